use std::collections::BTreeSet;
use std::ffi::CStr;

use ash::vk::{self, Handle};
use metavk_core::config::LoaderConfig;
use metavk_loader::{DeviceTable, InstanceTable, Loader, LoaderOptions, LoaderTable, Profile};
use serde::Serialize;

use crate::format_version;

// ── Check result types ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Skip,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    fn pass(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Pass, message)
    }

    fn fail(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Fail, message)
    }

    fn warn(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Warn, message)
    }

    fn skip(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Skip, message)
    }

    fn detail(mut self, detail: &str) -> Self {
        self.details.push(detail.to_string());
        self
    }
}

// ── Main entry point ────────────────────────────────────────────────────────

pub fn run_verify(config_path: &str, json: bool) -> anyhow::Result<()> {
    let mut results: Vec<CheckResult> = Vec::new();

    // Check 1: Configuration
    let options = check_config(config_path, &mut results);

    // Check 2: Library + seed
    let mut loader = Loader::new(options);
    let initialized = check_library(&mut loader, &mut results);

    if initialized {
        // Check 3 + 4: Loader-level entry points, instance version
        check_loader_symbols(&loader, &mut results);
        check_instance_version(&loader, &mut results);

        // Check 5 + 6: Instance and device loading
        check_instance_and_device(&mut loader, &mut results);
    } else {
        for name in ["Loader entry points", "Instance version", "Instance", "Device"] {
            results.push(CheckResult::skip(name, "Loader library not opened"));
        }
    }

    loader.finalize();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results_pretty(&results);
    }

    if results
        .iter()
        .any(|r| matches!(r.status, CheckStatus::Fail))
    {
        std::process::exit(1);
    }

    Ok(())
}

// ── Check 1: Configuration ──────────────────────────────────────────────────

fn check_config(config_path: &str, results: &mut Vec<CheckResult>) -> LoaderOptions {
    let config = if std::path::Path::new(config_path).exists() {
        match LoaderConfig::load(config_path) {
            Ok(config) => {
                results.push(CheckResult::pass(
                    "Configuration",
                    &format!("Loaded from {}", config_path),
                ));
                config
            }
            Err(e) => {
                results.push(
                    CheckResult::fail(
                        "Configuration",
                        &format!("Failed to parse {}: {}", config_path, e),
                    )
                    .detail("Falling back to default configuration"),
                );
                LoaderConfig::default()
            }
        }
    } else {
        results.push(
            CheckResult::skip(
                "Configuration",
                &format!("Config file not found: {}", config_path),
            )
            .detail("Using default configuration"),
        );
        LoaderConfig::default()
    };

    let config = config.with_env_overrides();
    match LoaderOptions::from_config(&config) {
        Ok(options) => {
            check_profile(&options.profile, results);
            options
        }
        Err(e) => {
            results.push(CheckResult::fail("Profile", &e.to_string()));
            LoaderOptions::default()
        }
    }
}

fn check_profile(profile: &Profile, results: &mut Vec<CheckResult>) {
    let version = format_version(profile.api_version());
    let Some(allowed) = profile.extensions() else {
        results.push(CheckResult::pass(
            "Profile",
            &format!("Vulkan {} with every extension", version),
        ));
        return;
    };

    let known: BTreeSet<&str> = metavk_registry::entry_points()
        .flat_map(|e| e.requires.extensions())
        .collect();
    let unknown: Vec<&String> = allowed
        .iter()
        .filter(|name| !known.contains(name.as_str()))
        .collect();

    let message = format!("Vulkan {} with {} extension(s)", version, allowed.len());
    let mut result = if unknown.is_empty() {
        CheckResult::pass("Profile", &message)
    } else {
        CheckResult::warn("Profile", &message)
    };
    for name in unknown {
        result = result.detail(&format!("No entry points gated by {}", name));
    }
    results.push(result);
}

// ── Check 2: Library ────────────────────────────────────────────────────────

fn check_library(loader: &mut Loader, results: &mut Vec<CheckResult>) -> bool {
    let candidates: Vec<String> = match loader.options().library_names {
        Some(ref names) => names.clone(),
        None => metavk_common::platform::loader_library_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    // SAFETY: candidates come from the platform defaults or the config file.
    match unsafe { loader.initialize() } {
        Ok(()) => {
            results.push(
                CheckResult::pass(
                    "Loader library",
                    &format!("Opened {}", loader.library_name().unwrap_or("?")),
                )
                .detail("vkGetInstanceProcAddr resolved"),
            );
            true
        }
        Err(e) => {
            let mut result = CheckResult::fail("Loader library", &e.to_string());
            for name in &candidates {
                result = result.detail(&format!("Tried: {}", name));
            }
            results.push(result.detail("Is a Vulkan runtime installed?"));
            false
        }
    }
}

// ── Check 3: Loader-level entry points ──────────────────────────────────────

fn check_loader_symbols(loader: &Loader, results: &mut Vec<CheckResult>) {
    let table = loader.loader_table();
    let message = format!(
        "{} of {} resolved",
        table.resolved(),
        LoaderTable::ENTRY_POINTS.len()
    );

    let result = if table.vkCreateInstance.is_some() {
        CheckResult::pass("Loader entry points", &message)
    } else {
        CheckResult::fail("Loader entry points", &message).detail("vkCreateInstance is missing")
    };

    results.push(missing_details(result, table.slots()));
}

// ── Check 4: Instance version ───────────────────────────────────────────────

fn check_instance_version(loader: &Loader, results: &mut Vec<CheckResult>) {
    let version = loader.instance_version();
    if version == 0 {
        results.push(CheckResult::warn(
            "Instance version",
            "Loader does not report a version",
        ));
        return;
    }

    let mut result = CheckResult::pass("Instance version", &format_version(version));
    if loader.loader_table().vkEnumerateInstanceVersion.is_none() {
        result = result.detail("vkEnumerateInstanceVersion not available, assuming 1.0");
    }
    results.push(result);
}

// ── Check 5 + 6: Instance and device ────────────────────────────────────────

fn check_instance_and_device(loader: &mut Loader, results: &mut Vec<CheckResult>) {
    let instance = match create_instance(loader) {
        Ok(instance) => instance,
        Err(e) => {
            results.push(CheckResult::fail("Instance", &format!("vkCreateInstance failed: {}", e)));
            results.push(CheckResult::skip("Device", "No instance"));
            return;
        }
    };

    // SAFETY: `instance` was just created through this loader.
    if let Err(e) = unsafe { loader.load_instance(instance) } {
        results.push(CheckResult::fail("Instance", &e.to_string()));
        results.push(CheckResult::skip("Device", "Instance entry points not loaded"));
        destroy_instance(loader, instance);
        return;
    }

    let result = CheckResult::pass(
        "Instance",
        &format!(
            "{} of {} instance-level entry points resolved",
            loader.instance_table().resolved(),
            InstanceTable::ENTRY_POINTS.len()
        ),
    )
    .detail(&format!(
        "{} of {} device-level entry points resolved through the instance",
        loader.device_table().resolved(),
        DeviceTable::ENTRY_POINTS.len()
    ));
    results.push(result);

    check_device(loader, instance, results);
    destroy_instance(loader, instance);
}

fn check_device(loader: &mut Loader, instance: vk::Instance, results: &mut Vec<CheckResult>) {
    let physical_devices = match enumerate_physical_devices(loader.instance_table(), instance) {
        Ok(devices) => devices,
        Err(e) => {
            results.push(CheckResult::fail(
                "Device",
                &format!("vkEnumeratePhysicalDevices failed: {}", e),
            ));
            return;
        }
    };

    let Some(&physical_device) = physical_devices.first() else {
        results.push(
            CheckResult::warn("Device", "No physical devices found")
                .detail("Device-level loading was not exercised"),
        );
        return;
    };

    let device_name = physical_device_name(loader.instance_table(), physical_device);
    let device = match create_device(loader.instance_table(), physical_device) {
        Ok(device) => device,
        Err(e) => {
            results.push(
                CheckResult::fail("Device", &format!("vkCreateDevice failed: {}", e))
                    .detail(&format!("Physical device: {}", device_name)),
            );
            return;
        }
    };

    // SAFETY: `device` was just created from the loaded instance.
    match unsafe { loader.load_device(device) } {
        Ok(()) => {
            let table = loader.device_table();
            let result = CheckResult::pass(
                "Device",
                &format!(
                    "{} of {} device-level entry points resolved for {}",
                    table.resolved(),
                    DeviceTable::ENTRY_POINTS.len(),
                    device_name
                ),
            )
            .detail(&format!("{} physical device(s) present", physical_devices.len()));
            results.push(result);
        }
        Err(e) => results.push(CheckResult::fail("Device", &e.to_string())),
    }

    if let Some(destroy_device) = loader.device_table().vkDestroyDevice {
        unsafe { destroy_device(device, std::ptr::null()) };
    }
}

// ── Raw Vulkan calls through the loaded slots ───────────────────────────────

fn create_instance(loader: &Loader) -> Result<vk::Instance, vk::Result> {
    let create = loader
        .loader_table()
        .vkCreateInstance
        .ok_or(vk::Result::ERROR_INITIALIZATION_FAILED)?;

    let api_version = match loader.instance_version() {
        0 => vk::API_VERSION_1_0,
        v => v.min(loader.profile().api_version()),
    };
    let app_info = vk::ApplicationInfo::default()
        .application_name(c"metavk verify")
        .engine_name(c"metavk")
        .api_version(api_version);
    let create_info = vk::InstanceCreateInfo::default().application_info(&app_info);

    let mut instance = vk::Instance::null();
    let result = unsafe { create(&create_info, std::ptr::null(), &mut instance) };
    if result != vk::Result::SUCCESS {
        return Err(result);
    }
    Ok(instance)
}

fn destroy_instance(loader: &Loader, instance: vk::Instance) {
    if let Some(destroy) = loader.instance_table().vkDestroyInstance {
        unsafe { destroy(instance, std::ptr::null()) };
    }
}

fn enumerate_physical_devices(
    table: &InstanceTable,
    instance: vk::Instance,
) -> Result<Vec<vk::PhysicalDevice>, vk::Result> {
    let enumerate = table
        .vkEnumeratePhysicalDevices
        .ok_or(vk::Result::ERROR_INITIALIZATION_FAILED)?;

    let mut count = 0u32;
    let result = unsafe { enumerate(instance, &mut count, std::ptr::null_mut()) };
    if result != vk::Result::SUCCESS {
        return Err(result);
    }

    let mut devices = vec![vk::PhysicalDevice::null(); count as usize];
    let result = unsafe { enumerate(instance, &mut count, devices.as_mut_ptr()) };
    if result != vk::Result::SUCCESS && result != vk::Result::INCOMPLETE {
        return Err(result);
    }
    devices.truncate(count as usize);
    Ok(devices)
}

fn physical_device_name(table: &InstanceTable, physical_device: vk::PhysicalDevice) -> String {
    let Some(get_properties) = table.vkGetPhysicalDeviceProperties else {
        return format!("{:#x}", physical_device.as_raw());
    };

    let mut properties = vk::PhysicalDeviceProperties::default();
    unsafe { get_properties(physical_device, &mut properties) };
    unsafe { CStr::from_ptr(properties.device_name.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

fn create_device(
    table: &InstanceTable,
    physical_device: vk::PhysicalDevice,
) -> Result<vk::Device, vk::Result> {
    let create = table
        .vkCreateDevice
        .ok_or(vk::Result::ERROR_INITIALIZATION_FAILED)?;

    // Any queue family will do; family 0 always exists.
    let priorities = [1.0f32];
    let queue_info = [vk::DeviceQueueCreateInfo::default()
        .queue_family_index(0)
        .queue_priorities(&priorities)];
    let create_info = vk::DeviceCreateInfo::default().queue_create_infos(&queue_info);

    let mut device = vk::Device::null();
    let result = unsafe { create(physical_device, &create_info, std::ptr::null(), &mut device) };
    if result != vk::Result::SUCCESS {
        return Err(result);
    }
    Ok(device)
}

fn missing_details(
    mut result: CheckResult,
    slots: Vec<(&'static str, vk::PFN_vkVoidFunction)>,
) -> CheckResult {
    for (name, slot) in slots {
        if slot.is_none() {
            result = result.detail(&format!("Missing: {}", name));
        }
    }
    result
}

// ── Output formatters ───────────────────────────────────────────────────────

fn print_results_pretty(results: &[CheckResult]) {
    println!();
    println!("metavk Loader Verification");
    println!("==========================");
    println!();

    let mut pass_count = 0u32;
    let mut fail_count = 0u32;
    let mut warn_count = 0u32;

    for result in results {
        let (icon, color_start, color_end) = match result.status {
            CheckStatus::Pass => {
                pass_count += 1;
                ("[PASS]", "\x1b[32m", "\x1b[0m")
            }
            CheckStatus::Fail => {
                fail_count += 1;
                ("[FAIL]", "\x1b[31m", "\x1b[0m")
            }
            CheckStatus::Warn => {
                warn_count += 1;
                ("[WARN]", "\x1b[33m", "\x1b[0m")
            }
            CheckStatus::Skip => ("[SKIP]", "\x1b[90m", "\x1b[0m"),
        };

        println!(
            "  {}{}{} {} - {}",
            color_start, icon, color_end, result.name, result.message
        );

        for detail in &result.details {
            println!("         {}", detail);
        }
        println!();
    }

    println!("-------------------------------");
    println!(
        "  {} passed, {} failed, {} warnings",
        pass_count, fail_count, warn_count
    );
    println!();
}
