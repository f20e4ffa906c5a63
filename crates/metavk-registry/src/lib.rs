//! Vulkan entry-point registry.
//!
//! Every entry point the loader knows about is declared once, in `tables.rs`,
//! together with the tier that resolves it and the capability that gates it.
//! That single declaration produces both the function-pointer tables
//! (`LoaderTable`, `InstanceTable`, `DeviceTable`) and the registry rows
//! (`EntryPoint`) that tools and tests inspect.

#[macro_use]
mod macros;

pub mod profile;
pub mod requires;
pub mod source;
pub mod tables;

pub use profile::Profile;
pub use requires::{all, any, ext, EntryPoint, Level, Requires, V1_0, V1_1, V1_2, V1_3};
pub use source::{DeviceSymbols, InstanceSymbols, LookupFn, SymbolSource};
pub use tables::{DeviceTable, GlobalSlots, InstanceTable, LoaderTable};

/// Type-erased entry point, as returned by the `*ProcAddr` functions.
pub type VoidFunction = unsafe extern "system" fn();

/// Every registry row: loader tier first, then instance, then device.
pub fn entry_points() -> impl Iterator<Item = &'static EntryPoint> {
    LoaderTable::ENTRY_POINTS
        .iter()
        .chain(InstanceTable::ENTRY_POINTS)
        .chain(DeviceTable::ENTRY_POINTS)
}

/// Look up a registry row by symbol name.
pub fn find(name: &str) -> Option<&'static EntryPoint> {
    entry_points().find(|entry| entry.name == name)
}
