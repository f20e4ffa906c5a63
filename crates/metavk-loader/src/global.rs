//! The process-wide loader.
//!
//! Convenience wrappers over one shared [`Loader`]. The slots are shared by
//! the whole process: loading device entry points here is only sound for
//! applications with a single live device. Multi-device applications should
//! keep per-device [`DeviceTable`]s filled with [`load_device_table`].

use std::sync::OnceLock;

use ash::vk;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::context::{Loader, LoaderOptions};
use crate::error::LoaderError;
use metavk_registry::{DeviceTable, GlobalSlots, InstanceTable};

static LOADER: OnceLock<RwLock<Loader>> = OnceLock::new();

fn loader() -> &'static RwLock<Loader> {
    LOADER.get_or_init(|| RwLock::new(Loader::default()))
}

/// Read access to the shared loader.
pub fn read() -> RwLockReadGuard<'static, Loader> {
    loader().read()
}

/// Replace the options used by subsequent calls.
pub fn configure(options: LoaderOptions) {
    loader().write().set_options(options);
}

/// # Safety
/// See [`Loader::initialize`].
pub unsafe fn initialize() -> Result<(), LoaderError> {
    unsafe { loader().write().initialize() }
}

/// Configure and initialize in one step.
///
/// # Safety
/// See [`Loader::initialize`].
pub unsafe fn initialize_with(options: LoaderOptions) -> Result<(), LoaderError> {
    let mut loader = loader().write();
    loader.set_options(options);
    unsafe { loader.initialize() }
}

/// # Safety
/// See [`Loader::initialize_custom`].
pub unsafe fn initialize_custom(handler: vk::PFN_vkGetInstanceProcAddr) {
    unsafe { loader().write().initialize_custom(handler) };
}

pub fn finalize() {
    loader().write().finalize();
}

pub fn instance_version() -> u32 {
    loader().read().instance_version()
}

/// # Safety
/// See [`Loader::load_instance`].
pub unsafe fn load_instance(instance: vk::Instance) -> Result<(), LoaderError> {
    unsafe { loader().write().load_instance(instance) }
}

/// # Safety
/// See [`Loader::load_instance_only`].
pub unsafe fn load_instance_only(instance: vk::Instance) -> Result<(), LoaderError> {
    unsafe { loader().write().load_instance_only(instance) }
}

/// # Safety
/// See [`Loader::load_device`].
pub unsafe fn load_device(device: vk::Device) -> Result<(), LoaderError> {
    unsafe { loader().write().load_device(device) }
}

/// # Safety
/// See [`Loader::load_instance_table`].
pub unsafe fn load_instance_table(table: &mut InstanceTable, instance: vk::Instance) -> Result<usize, LoaderError> {
    unsafe { loader().read().load_instance_table(table, instance) }
}

/// # Safety
/// See [`Loader::load_device_table`].
pub unsafe fn load_device_table(table: &mut DeviceTable, device: vk::Device) -> Result<usize, LoaderError> {
    unsafe { loader().read().load_device_table(table, device) }
}

pub fn loaded_instance() -> vk::Instance {
    loader().read().loaded_instance()
}

pub fn loaded_device() -> vk::Device {
    loader().read().loaded_device()
}

/// Snapshot of every global slot.
pub fn slots() -> GlobalSlots {
    *loader().read().slots()
}
