//! metavk: a Vulkan meta-loader.
//!
//! Opens the platform Vulkan loader at runtime, takes `vkGetInstanceProcAddr`
//! from it, and fills function-pointer tables in three tiers: loader-level
//! entry points, then instance-level ones for a given `VkInstance`, then
//! device-level ones for a given `VkDevice`.
//!
//! Two ways to hold the results:
//! - [`Loader`], an explicit context owned by the caller, and the process-wide
//!   instance of it in [`global`];
//! - caller-owned [`InstanceTable`] / [`DeviceTable`] values filled through
//!   [`Loader::load_instance_table`] and [`Loader::load_device_table`], which
//!   never touch the context's own slots. Prefer these when several devices
//!   are live at once.

pub mod context;
pub mod error;
pub mod global;
pub mod library;

pub use context::{Loader, LoaderOptions};
pub use error::LoaderError;
pub use library::VulkanLibrary;
pub use metavk_registry::{
    DeviceTable, EntryPoint, GlobalSlots, InstanceTable, Level, LoaderTable, Profile, Requires,
};
