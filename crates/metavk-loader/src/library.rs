//! Opening the platform Vulkan loader.
//!
//! Uses `libloading` to open `vulkan-1.dll` (Windows), `libvulkan.so` /
//! `libvulkan.so.1` (Linux) or the MoltenVK-backed loader (macOS), and takes
//! the one seed function every other lookup goes through.

use ash::vk;
use libloading::{Library, Symbol};
use tracing::{debug, info};

use crate::error::LoaderError;

const SEED_SYMBOL: &[u8] = b"vkGetInstanceProcAddr\0";

/// An open loader library and its `vkGetInstanceProcAddr`.
pub struct VulkanLibrary {
    name: String,
    get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    // Keeps `get_instance_proc_addr` valid; dropped last.
    _lib: Library,
}

impl VulkanLibrary {
    /// Open the first loadable candidate and resolve the seed symbol.
    ///
    /// # Safety
    /// Loading a library runs its initialisers; candidates must name
    /// genuine Vulkan loaders so the seed symbol has the expected signature.
    pub unsafe fn open<S: AsRef<str>>(candidates: &[S]) -> Result<Self, LoaderError> {
        let (lib, name) = unsafe { Self::load_library(candidates)? };

        let get_instance_proc_addr = unsafe {
            let sym: Symbol<vk::PFN_vkGetInstanceProcAddr> =
                lib.get(SEED_SYMBOL).map_err(|e| LoaderError::MissingSeedSymbol {
                    library: name.clone(),
                    reason: e.to_string(),
                })?;
            *sym
        };

        Ok(Self {
            name,
            get_instance_proc_addr,
            _lib: lib,
        })
    }

    /// Open using the platform's default candidate names.
    ///
    /// # Safety
    /// See [`open`](VulkanLibrary::open).
    pub unsafe fn open_default() -> Result<Self, LoaderError> {
        unsafe { Self::open(metavk_common::platform::loader_library_names()) }
    }

    unsafe fn load_library<S: AsRef<str>>(candidates: &[S]) -> Result<(Library, String), LoaderError> {
        let mut last_err = String::from("no candidate library names");
        for name in candidates {
            let name = name.as_ref();
            match unsafe { Library::new(name) } {
                Ok(lib) => {
                    info!("loaded Vulkan loader from: {}", name);
                    return Ok((lib, name.to_string()));
                }
                Err(e) => {
                    last_err = format!("{}: {}", name, e);
                    debug!("failed to load {}: {}", name, e);
                }
            }
        }

        Err(LoaderError::LibraryNotFound(last_err))
    }

    /// The candidate name that was opened.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_instance_proc_addr(&self) -> vk::PFN_vkGetInstanceProcAddr {
        self.get_instance_proc_addr
    }
}

impl std::fmt::Debug for VulkanLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VulkanLibrary").field("name", &self.name).finish()
    }
}
