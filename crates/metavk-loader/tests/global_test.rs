//! Integration test: the process-wide loader.
//!
//! One test function, since every call shares the same global state.
//!
//! Run with: cargo test -p metavk-loader --test global_test

mod common;

use ash::vk::Handle;
use common::*;
use metavk_loader::{global, DeviceTable, LoaderError, LoaderOptions, LoaderTable};

#[test]
fn test_global_lifecycle() {
    // Untouched: nothing loaded, nothing callable.
    assert_eq!(global::instance_version(), 0);
    assert_eq!(global::slots().resolved(), 0);
    assert!(matches!(
        unsafe { global::load_instance(instance(0x10)) },
        Err(LoaderError::NotInitialized)
    ));

    // Custom handler.
    unsafe { global::initialize_custom(get_instance_proc_addr) };
    assert!(global::read().is_initialized());
    assert_eq!(global::slots().loader.resolved(), LoaderTable::ENTRY_POINTS.len());
    assert_eq!(global::instance_version(), REPORTED_VERSION);

    unsafe { global::load_instance(instance(0x10)) }.unwrap();
    unsafe { global::load_device(device(0x20)) }.unwrap();
    assert_eq!(global::loaded_instance().as_raw(), 0x10);
    assert_eq!(global::loaded_device().as_raw(), 0x20);
    assert!(is_sentinel(global::slots().device.get("vkQueueSubmit")));

    let mut table = DeviceTable::default();
    take_requests();
    unsafe { global::load_device_table(&mut table, device(0x30)) }.unwrap();
    assert!(take_requests()
        .iter()
        .all(|r| r.via == Via::Device && r.handle == 0x30));
    assert_eq!(global::loaded_device().as_raw(), 0x20);

    // Failed initialize leaves everything null.
    let options = LoaderOptions::default().with_library_names([MISSING_LIBRARY]);
    let err = unsafe { global::initialize_with(options) }.unwrap_err();
    assert!(matches!(err, LoaderError::LibraryNotFound(_)));
    assert_eq!(global::slots().resolved(), 0);
    assert!(global::loaded_instance().is_null());
    assert_eq!(global::instance_version(), 0);

    // Options stick across re-initialization.
    global::configure(LoaderOptions::default().strict_single_device(true));
    unsafe { global::initialize_custom(get_instance_proc_addr) };
    unsafe { global::load_instance_only(instance(0x10)) }.unwrap();
    unsafe { global::load_device(device(0x20)) }.unwrap();
    assert!(matches!(
        unsafe { global::load_device(device(0x30)) },
        Err(LoaderError::DeviceAlreadyLoaded { .. })
    ));

    global::finalize();
    assert_eq!(global::slots().resolved(), 0);
    assert!(global::loaded_device().is_null());
    assert!(!global::read().is_initialized());
}
