/// Declares a function-pointer table together with its registry rows.
///
/// Each group is `requirement => { vkName: PFN_type, ... }`. Field names are
/// the exact API symbol names; alias commands name the canonical PFN type.
macro_rules! entry_point_table {
    (
        $(#[$meta:meta])*
        pub struct $table:ident: $level:expr;
        $( $req:expr => { $( $name:ident : $pfn:ident ),* $(,)? } )*
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        #[derive(Clone, Copy, Default)]
        pub struct $table {
            $( $( pub $name: Option<::ash::vk::$pfn>, )* )*
        }

        impl $table {
            /// Registry rows, in the order `load` resolves them.
            pub const ENTRY_POINTS: &'static [$crate::requires::EntryPoint] = &[
                $( $(
                    $crate::requires::EntryPoint {
                        name: stringify!($name),
                        level: $level,
                        requires: $req,
                    },
                )* )*
            ];

            /// Resolve every entry point the profile enables through `source`.
            ///
            /// Disabled entries are not looked up and are reset to null, so no
            /// slot outlives the handle it was resolved from.
            /// Returns the number of non-null results.
            ///
            /// # Safety
            /// `source` must be safe to call for every enabled name.
            pub unsafe fn load<S>(&mut self, profile: &$crate::profile::Profile, source: &S) -> usize
            where
                S: $crate::source::SymbolSource + ?Sized,
            {
                let mut resolved = 0;
                $(
                    {
                        const REQUIRES: $crate::requires::Requires = $req;
                        if profile.enables(&REQUIRES) {
                            $(
                                // SAFETY: the literal ends in NUL and has no interior NUL.
                                let name = unsafe {
                                    ::std::ffi::CStr::from_bytes_with_nul_unchecked(
                                        concat!(stringify!($name), "\0").as_bytes(),
                                    )
                                };
                                // SAFETY: the driver returns the entry point named `name`,
                                // whose signature is the PFN type of this slot.
                                self.$name = unsafe { source.lookup(name) }.map(|f| unsafe {
                                    ::std::mem::transmute::<$crate::VoidFunction, ::ash::vk::$pfn>(f)
                                });
                                resolved += usize::from(self.$name.is_some());
                            )*
                        } else {
                            $( self.$name = None; )*
                        }
                    }
                )*
                resolved
            }

            /// Every slot as `(name, type-erased pointer)`, in registry order.
            pub fn slots(&self) -> Vec<(&'static str, ::ash::vk::PFN_vkVoidFunction)> {
                vec![
                    $( $(
                        (
                            stringify!($name),
                            self.$name.map(|f| unsafe {
                                ::std::mem::transmute::<::ash::vk::$pfn, $crate::VoidFunction>(f)
                            }),
                        ),
                    )* )*
                ]
            }

            /// Type-erased slot value by symbol name; None for unknown names.
            pub fn get(&self, name: &str) -> ::ash::vk::PFN_vkVoidFunction {
                match name {
                    $( $(
                        stringify!($name) => self.$name.map(|f| unsafe {
                            ::std::mem::transmute::<::ash::vk::$pfn, $crate::VoidFunction>(f)
                        }),
                    )* )*
                    _ => None,
                }
            }

            /// Number of non-null slots.
            pub fn resolved(&self) -> usize {
                0 $( $( + usize::from(self.$name.is_some()) )* )*
            }

            /// Reset every slot to null.
            pub fn clear(&mut self) {
                *self = Self::default();
            }
        }

        impl ::std::fmt::Debug for $table {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($table))
                    .field("resolved", &self.resolved())
                    .field("entry_points", &Self::ENTRY_POINTS.len())
                    .finish()
            }
        }
    };
}
