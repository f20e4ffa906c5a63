//! Lookup functions the tables resolve entry points through.

use std::ffi::CStr;

use ash::vk;

/// Something that maps an entry-point name to an address.
pub trait SymbolSource {
    /// Resolve `name`, returning None when it is unavailable.
    ///
    /// # Safety
    /// The lookup function and handle behind this source must be valid.
    unsafe fn lookup(&self, name: &CStr) -> vk::PFN_vkVoidFunction;
}

/// `vkGetInstanceProcAddr` bound to an instance (null for loader-level names).
#[derive(Clone, Copy)]
pub struct InstanceSymbols {
    get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr,
    instance: vk::Instance,
}

impl InstanceSymbols {
    pub fn new(get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr, instance: vk::Instance) -> Self {
        Self {
            get_instance_proc_addr,
            instance,
        }
    }

    /// Source for the global entry points that exist before any instance.
    pub fn loader(get_instance_proc_addr: vk::PFN_vkGetInstanceProcAddr) -> Self {
        Self::new(get_instance_proc_addr, vk::Instance::null())
    }

    pub fn instance(&self) -> vk::Instance {
        self.instance
    }
}

impl SymbolSource for InstanceSymbols {
    unsafe fn lookup(&self, name: &CStr) -> vk::PFN_vkVoidFunction {
        unsafe { (self.get_instance_proc_addr)(self.instance, name.as_ptr()) }
    }
}

/// `vkGetDeviceProcAddr` bound to one device.
#[derive(Clone, Copy)]
pub struct DeviceSymbols {
    get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr,
    device: vk::Device,
}

impl DeviceSymbols {
    pub fn new(get_device_proc_addr: vk::PFN_vkGetDeviceProcAddr, device: vk::Device) -> Self {
        Self {
            get_device_proc_addr,
            device,
        }
    }

    pub fn device(&self) -> vk::Device {
        self.device
    }
}

impl SymbolSource for DeviceSymbols {
    unsafe fn lookup(&self, name: &CStr) -> vk::PFN_vkVoidFunction {
        unsafe { (self.get_device_proc_addr)(self.device, name.as_ptr()) }
    }
}

/// Adapts a closure into a [`SymbolSource`].
pub struct LookupFn<F>(pub F);

impl<F> SymbolSource for LookupFn<F>
where
    F: Fn(&CStr) -> vk::PFN_vkVoidFunction,
{
    unsafe fn lookup(&self, name: &CStr) -> vk::PFN_vkVoidFunction {
        (self.0)(name)
    }
}
