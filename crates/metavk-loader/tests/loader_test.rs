//! Integration test: Loader context against a fake driver.
//!
//! Run with: cargo test -p metavk-loader --test loader_test

mod common;

use ash::vk;
use ash::vk::Handle;
use common::*;
use metavk_core::LoaderConfig;
use metavk_loader::{
    DeviceTable, InstanceTable, Loader, LoaderError, LoaderOptions, LoaderTable, Profile,
};
use metavk_registry::V1_0;

fn custom_loader(options: LoaderOptions) -> Loader {
    let mut loader = Loader::new(options);
    unsafe { loader.initialize_custom(get_instance_proc_addr) };
    take_requests();
    loader
}

fn entry_names(entries: &[metavk_loader::EntryPoint]) -> Vec<String> {
    entries.iter().map(|e| e.name.to_string()).collect()
}

#[test]
fn test_initialize_custom_loads_loader_level_only() {
    let mut loader = Loader::default();
    assert!(!loader.is_initialized());

    unsafe { loader.initialize_custom(get_instance_proc_addr) };
    assert!(loader.is_initialized());
    assert!(loader.library_name().is_none());

    let requests = take_requests();
    let names: Vec<String> = requests.iter().map(|r| r.name.clone()).collect();
    assert_eq!(names, entry_names(LoaderTable::ENTRY_POINTS));
    assert!(requests.iter().all(|r| r.via == Via::Instance && r.handle == 0));

    assert!(is_sentinel(loader.loader_table().get("vkCreateInstance")));
    assert!(loader.loader_table().vkEnumerateInstanceVersion.is_some());
    assert_eq!(loader.instance_table().resolved(), 0);
    assert_eq!(loader.device_table().resolved(), 0);
}

#[test]
fn test_instance_version_query() {
    let mut loader = Loader::default();
    assert_eq!(loader.instance_version(), 0);

    unsafe { loader.initialize_custom(get_instance_proc_addr) };
    assert_eq!(loader.instance_version(), REPORTED_VERSION);

    unsafe { loader.initialize_custom(get_instance_proc_addr_1_0) };
    assert_eq!(loader.instance_version(), vk::API_VERSION_1_0);

    unsafe { loader.initialize_custom(get_instance_proc_addr_failing_version) };
    assert_eq!(loader.instance_version(), vk::API_VERSION_1_0);

    unsafe { loader.initialize_custom(get_instance_proc_addr_empty) };
    assert_eq!(loader.instance_version(), 0);
}

#[test]
fn test_version_query_respects_profile() {
    // A 1.0 profile never loads vkEnumerateInstanceVersion.
    let loader = custom_loader(
        LoaderOptions::default().with_profile(Profile::core(vk::API_VERSION_1_0)),
    );
    assert!(loader.loader_table().vkEnumerateInstanceVersion.is_none());
    assert_eq!(loader.instance_version(), vk::API_VERSION_1_0);
}

#[test]
fn test_missing_library_leaves_slots_null() {
    let mut loader = Loader::new(LoaderOptions::default().with_library_names([MISSING_LIBRARY]));
    let err = unsafe { loader.initialize() }.unwrap_err();
    assert!(matches!(err, LoaderError::LibraryNotFound(_)), "got {:?}", err);
    assert!(err.to_string().contains(MISSING_LIBRARY));

    assert!(!loader.is_initialized());
    assert_eq!(loader.slots().resolved(), 0);
    assert_eq!(loader.instance_version(), 0);
}

#[cfg(target_os = "linux")]
#[test]
fn test_library_without_seed_symbol() {
    // libm is always present and exports no Vulkan symbols.
    let mut loader = Loader::new(LoaderOptions::default().with_library_names(["libm.so.6"]));
    let err = unsafe { loader.initialize() }.unwrap_err();
    match err {
        LoaderError::MissingSeedSymbol { ref library, .. } => assert_eq!(library, "libm.so.6"),
        ref other => panic!("expected MissingSeedSymbol, got {:?}", other),
    }
    assert!(err.to_string().contains("vkGetInstanceProcAddr"));

    assert!(!loader.is_initialized());
    assert!(loader.library_name().is_none());
    assert_eq!(loader.slots().resolved(), 0);
    assert_eq!(loader.instance_version(), 0);
}

#[test]
fn test_failed_initialize_clears_previous_state() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance(instance(0x10)) }.unwrap();
    assert!(loader.slots().resolved() > 0);

    loader.set_options(LoaderOptions::default().with_library_names([MISSING_LIBRARY]));
    assert!(unsafe { loader.initialize() }.is_err());
    assert_eq!(loader.slots().resolved(), 0);
    assert!(loader.loaded_instance().is_null());
}

#[test]
fn test_empty_candidate_list_is_not_found() {
    let mut loader = Loader::new(LoaderOptions::default().with_library_names(Vec::<String>::new()));
    assert!(matches!(unsafe { loader.initialize() }, Err(LoaderError::LibraryNotFound(_))));
}

#[test]
fn test_finalize_resets_everything() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance(instance(0x10)) }.unwrap();
    unsafe { loader.load_device(device(0x20)) }.unwrap();
    assert_eq!(loader.loaded_instance().as_raw(), 0x10);
    assert_eq!(loader.loaded_device().as_raw(), 0x20);

    loader.finalize();
    assert!(!loader.is_initialized());
    assert_eq!(loader.slots().resolved(), 0);
    assert!(loader.loaded_instance().is_null());
    assert!(loader.loaded_device().is_null());
    assert_eq!(loader.instance_version(), 0);

    // Finalize is idempotent.
    loader.finalize();
    assert_eq!(loader.slots().resolved(), 0);
}

#[test]
fn test_loads_require_initialization() {
    let mut loader = Loader::default();
    assert!(matches!(unsafe { loader.load_instance(instance(1)) }, Err(LoaderError::NotInitialized)));
    assert!(matches!(unsafe { loader.load_instance_only(instance(1)) }, Err(LoaderError::NotInitialized)));
    assert!(matches!(unsafe { loader.load_device(device(1)) }, Err(LoaderError::NotInitialized)));

    let mut table = InstanceTable::default();
    assert!(matches!(
        unsafe { loader.load_instance_table(&mut table, instance(1)) },
        Err(LoaderError::NotInitialized)
    ));
    assert!(take_requests().is_empty());
}

#[test]
fn test_device_loading_needs_get_device_proc_addr() {
    let mut loader = custom_loader(LoaderOptions::default());
    let err = unsafe { loader.load_device(device(0x20)) }.unwrap_err();
    assert!(matches!(err, LoaderError::MissingSymbol("vkGetDeviceProcAddr")), "got {:?}", err);

    let mut table = DeviceTable::default();
    assert!(unsafe { loader.load_device_table(&mut table, device(0x20)) }.is_err());
    assert!(loader.loaded_device().is_null());
}

#[test]
fn test_load_instance_fills_instance_and_device_slots() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance(instance(0x10)) }.unwrap();
    assert_eq!(loader.loaded_instance().as_raw(), 0x10);
    assert!(loader.loaded_device().is_null());

    for (name, slot) in loader
        .instance_table()
        .slots()
        .into_iter()
        .chain(loader.device_table().slots())
    {
        if name == "vkGetDeviceProcAddr" {
            assert!(slot.is_some());
            continue;
        }
        assert!(is_sentinel(slot), "slot {} not populated", name);
    }

    let requests = take_requests();
    assert_eq!(
        requests.len(),
        InstanceTable::ENTRY_POINTS.len() + DeviceTable::ENTRY_POINTS.len()
    );
    assert!(requests.iter().all(|r| r.via == Via::Instance && r.handle == 0x10));
}

#[test]
fn test_base_version_scenario() {
    let mut loader = custom_loader(
        LoaderOptions::default().with_profile(Profile::core(vk::API_VERSION_1_0)),
    );

    unsafe { loader.load_instance_only(instance(0x10)) }.unwrap();
    for (entry, (name, slot)) in InstanceTable::ENTRY_POINTS
        .iter()
        .zip(loader.instance_table().slots())
    {
        assert_eq!(slot.is_some(), entry.requires == V1_0, "instance slot {}", name);
    }
    assert_eq!(loader.device_table().resolved(), 0);

    unsafe { loader.load_device(device(0x20)) }.unwrap();
    for (entry, (name, slot)) in DeviceTable::ENTRY_POINTS
        .iter()
        .zip(loader.device_table().slots())
    {
        assert_eq!(slot.is_some(), entry.requires == V1_0, "device slot {}", name);
    }

    let device_requests: Vec<_> = take_requests()
        .into_iter()
        .filter(|r| r.via == Via::Device)
        .collect();
    let expected = DeviceTable::ENTRY_POINTS
        .iter()
        .filter(|e| e.requires == V1_0)
        .count();
    assert_eq!(device_requests.len(), expected);
    assert!(device_requests.iter().all(|r| r.handle == 0x20));
    assert_eq!(loader.loaded_device().as_raw(), 0x20);
}

#[test]
fn test_caller_tables_are_independent_of_global_slots() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance_only(instance(0x10)) }.unwrap();
    let before = *loader.slots();
    take_requests();

    let mut instance_table = InstanceTable::default();
    let mut device_table = DeviceTable::default();
    let instance_count = unsafe { loader.load_instance_table(&mut instance_table, instance(0x11)) }.unwrap();
    let device_count = unsafe { loader.load_device_table(&mut device_table, device(0x21)) }.unwrap();
    assert_eq!(instance_count, InstanceTable::ENTRY_POINTS.len());
    assert_eq!(device_count, DeviceTable::ENTRY_POINTS.len());

    // Global slots and loaded handles are untouched.
    assert_eq!(loader.slots().resolved(), before.resolved());
    assert_eq!(loader.device_table().resolved(), 0);
    assert_eq!(loader.loaded_instance().as_raw(), 0x10);
    assert!(loader.loaded_device().is_null());

    let requests = take_requests();
    assert!(requests
        .iter()
        .filter(|r| r.via == Via::Device)
        .all(|r| r.handle == 0x21));

    // And global loading leaves the caller's table alone.
    unsafe { loader.load_device(device(0x20)) }.unwrap();
    assert_eq!(device_table.resolved(), DeviceTable::ENTRY_POINTS.len());
    assert!(is_sentinel(device_table.get("vkCmdDraw")));
}

#[test]
fn test_second_device_replaces_by_default() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance_only(instance(0x10)) }.unwrap();
    unsafe { loader.load_device(device(0x20)) }.unwrap();
    unsafe { loader.load_device(device(0x30)) }.unwrap();
    assert_eq!(loader.loaded_device().as_raw(), 0x30);

    // Reloading the same device is always fine.
    unsafe { loader.load_device(device(0x30)) }.unwrap();
}

#[test]
fn test_strict_single_device() {
    let mut loader = custom_loader(LoaderOptions::default().strict_single_device(true));
    unsafe { loader.load_instance_only(instance(0x10)) }.unwrap();
    unsafe { loader.load_device(device(0x20)) }.unwrap();
    unsafe { loader.load_device(device(0x20)) }.unwrap();

    let err = unsafe { loader.load_device(device(0x30)) }.unwrap_err();
    match err {
        LoaderError::DeviceAlreadyLoaded { loaded, requested } => {
            assert_eq!(loaded, 0x20);
            assert_eq!(requested, 0x30);
        }
        other => panic!("expected DeviceAlreadyLoaded, got {:?}", other),
    }
    assert_eq!(loader.loaded_device().as_raw(), 0x20);

    // Finalize lifts the restriction.
    loader.finalize();
    unsafe { loader.initialize_custom(get_instance_proc_addr) };
    unsafe { loader.load_instance_only(instance(0x10)) }.unwrap();
    unsafe { loader.load_device(device(0x30)) }.unwrap();
}

#[test]
fn test_options_from_config() {
    let config = LoaderConfig::parse(
        r#"
        [library]
        names = ["libvulkan.so.1"]

        [profile]
        api_version = "1.1"
        extensions = ["VK_KHR_surface"]

        [loader]
        strict_single_device = true
        "#,
    )
    .unwrap();
    let options = LoaderOptions::from_config(&config).unwrap();
    assert_eq!(options.library_names, Some(vec!["libvulkan.so.1".to_string()]));
    assert!(options.strict_single_device);
    assert_eq!(options.profile.api_version(), vk::API_VERSION_1_1);
    assert!(options.profile.allows_extension("VK_KHR_surface"));
    assert!(!options.profile.allows_extension("VK_KHR_swapchain"));

    let defaults = LoaderOptions::from_config(&LoaderConfig::default()).unwrap();
    assert_eq!(defaults, LoaderOptions::default());
}

#[test]
fn test_profile_limits_global_loading() {
    let mut loader = custom_loader(
        LoaderOptions::default()
            .with_profile(Profile::core(vk::API_VERSION_1_1).with_extensions(["VK_KHR_swapchain"])),
    );
    unsafe { loader.load_instance(instance(0x10)) }.unwrap();

    let device = loader.device_table();
    assert!(device.vkCreateSwapchainKHR.is_some());
    assert!(device.vkGetDeviceGroupPresentCapabilitiesKHR.is_some());
    assert!(device.vkBindBufferMemory2.is_some());
    assert!(device.vkWaitSemaphores.is_none());
    assert!(device.vkCmdDebugMarkerBeginEXT.is_none());
    assert!(loader.instance_table().vkDestroySurfaceKHR.is_none());
}

#[test]
fn test_profile_change_clears_disabled_slots() {
    let mut loader = custom_loader(LoaderOptions::default());
    unsafe { loader.load_instance(instance(0x10)) }.unwrap();
    assert!(loader.device_table().vkCreateSwapchainKHR.is_some());
    take_requests();

    loader.set_options(
        LoaderOptions::default().with_profile(Profile::core(vk::API_VERSION_1_0)),
    );
    unsafe { loader.load_instance(instance(0x11)) }.unwrap();
    assert_eq!(loader.loaded_instance().as_raw(), 0x11);

    // Nothing resolved against 0x10 survives the reload.
    assert!(loader.device_table().vkCreateSwapchainKHR.is_none());
    assert!(loader.instance_table().vkDestroySurfaceKHR.is_none());
    assert!(loader.device_table().vkWaitSemaphores.is_none());
    assert!(is_sentinel(loader.device_table().get("vkCmdDraw")));

    let requests = take_requests();
    assert!(requests.iter().all(|r| r.handle == 0x11));
    assert!(!requests.iter().any(|r| r.name == "vkCreateSwapchainKHR"));
}
