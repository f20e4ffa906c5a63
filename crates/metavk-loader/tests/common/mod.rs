//! Fake Vulkan driver for loader tests.
//!
//! The lookup functions record every requested name (per test thread) and
//! hand back `sentinel` for everything except the few entry points the loader
//! itself calls.
#![allow(dead_code)]

use std::cell::RefCell;
use std::ffi::{c_char, CStr};

use ash::vk;
use ash::vk::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Via {
    Instance,
    Device,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub via: Via,
    pub handle: u64,
    pub name: String,
}

thread_local! {
    static REQUESTS: RefCell<Vec<Request>> = const { RefCell::new(Vec::new()) };
}

fn record(via: Via, handle: u64, name: *const c_char) -> String {
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    REQUESTS.with(|r| {
        r.borrow_mut().push(Request {
            via,
            handle,
            name: name.clone(),
        })
    });
    name
}

/// Drain the requests recorded on this thread.
pub fn take_requests() -> Vec<Request> {
    REQUESTS.with(|r| std::mem::take(&mut *r.borrow_mut()))
}

pub unsafe extern "system" fn sentinel() {}

pub fn is_sentinel(f: vk::PFN_vkVoidFunction) -> bool {
    f.map(|f| f as usize) == Some(sentinel as usize)
}

pub const REPORTED_VERSION: u32 = vk::API_VERSION_1_2;

unsafe extern "system" fn enumerate_instance_version(api_version: *mut u32) -> vk::Result {
    unsafe { *api_version = REPORTED_VERSION };
    vk::Result::SUCCESS
}

unsafe extern "system" fn failing_enumerate_instance_version(_api_version: *mut u32) -> vk::Result {
    vk::Result::ERROR_OUT_OF_HOST_MEMORY
}

pub unsafe extern "system" fn get_device_proc_addr(
    device: vk::Device,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    record(Via::Device, device.as_raw(), name);
    Some(sentinel)
}

/// A 1.1+ driver that knows every entry point.
pub unsafe extern "system" fn get_instance_proc_addr(
    instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    match record(Via::Instance, instance.as_raw(), name).as_str() {
        "vkGetDeviceProcAddr" => Some(unsafe {
            std::mem::transmute::<vk::PFN_vkGetDeviceProcAddr, unsafe extern "system" fn()>(
                get_device_proc_addr,
            )
        }),
        "vkEnumerateInstanceVersion" => Some(unsafe {
            std::mem::transmute::<vk::PFN_vkEnumerateInstanceVersion, unsafe extern "system" fn()>(
                enumerate_instance_version,
            )
        }),
        _ => Some(sentinel),
    }
}

/// A 1.0 driver: no vkEnumerateInstanceVersion.
pub unsafe extern "system" fn get_instance_proc_addr_1_0(
    instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if unsafe { CStr::from_ptr(name) }.to_bytes() == b"vkEnumerateInstanceVersion" {
        return None;
    }
    unsafe { get_instance_proc_addr(instance, name) }
}

/// A driver whose vkEnumerateInstanceVersion fails.
pub unsafe extern "system" fn get_instance_proc_addr_failing_version(
    instance: vk::Instance,
    name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    if unsafe { CStr::from_ptr(name) }.to_bytes() == b"vkEnumerateInstanceVersion" {
        return Some(unsafe {
            std::mem::transmute::<vk::PFN_vkEnumerateInstanceVersion, unsafe extern "system" fn()>(
                failing_enumerate_instance_version,
            )
        });
    }
    unsafe { get_instance_proc_addr(instance, name) }
}

/// A driver that resolves nothing.
pub unsafe extern "system" fn get_instance_proc_addr_empty(
    _instance: vk::Instance,
    _name: *const c_char,
) -> vk::PFN_vkVoidFunction {
    None
}

pub fn instance(raw: u64) -> vk::Instance {
    vk::Instance::from_raw(raw)
}

pub fn device(raw: u64) -> vk::Device {
    vk::Device::from_raw(raw)
}

/// A library name no system provides.
pub const MISSING_LIBRARY: &str = "libmetavk-test-missing-loader.so.0";
