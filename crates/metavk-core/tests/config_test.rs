//! Integration test: LoaderConfig parsing and defaults.

use metavk_core::config::{parse_api_version, LoaderConfig};
use metavk_core::CoreError;

#[test]
fn test_empty_config_uses_defaults() {
    let config = LoaderConfig::parse("").expect("empty config parses");
    assert_eq!(config, LoaderConfig::default());
    assert_eq!(config.profile.api_version, "1.3");
    assert!(config.profile.extensions.is_none());
    assert!(!config.loader.strict_single_device);
    assert!(config.library_candidates().is_none());
}

#[test]
fn test_full_config() {
    let config = LoaderConfig::parse(
        r#"
        [library]
        path = "/opt/vulkan/libvulkan.so.1"
        names = ["libvulkan.so.1"]

        [profile]
        api_version = "1.1"
        extensions = ["VK_KHR_surface", "VK_KHR_swapchain"]

        [loader]
        strict_single_device = true
        "#,
    )
    .expect("config parses");

    assert_eq!(config.profile.api_version, "1.1");
    assert_eq!(
        config.profile.extensions.as_deref(),
        Some(&["VK_KHR_surface".to_string(), "VK_KHR_swapchain".to_string()][..])
    );
    assert!(config.loader.strict_single_device);
    assert_eq!(
        config.library_candidates(),
        Some(vec![
            "/opt/vulkan/libvulkan.so.1".to_string(),
            "libvulkan.so.1".to_string()
        ])
    );
}

#[test]
fn test_path_falls_back_to_platform_defaults() {
    let config = LoaderConfig::parse("[library]\npath = \"custom.so\"\n").expect("config parses");
    let mut expected = vec!["custom.so".to_string()];
    expected.extend(
        metavk_common::platform::loader_library_names()
            .iter()
            .map(|name| name.to_string()),
    );
    assert_eq!(config.library_candidates(), Some(expected));
}

#[test]
fn test_bad_api_version_rejected() {
    let err = LoaderConfig::parse("[profile]\napi_version = \"one\"\n").unwrap_err();
    assert!(matches!(err, CoreError::InvalidApiVersion(_)), "got {:?}", err);
}

#[test]
fn test_empty_library_list_rejected() {
    let err = LoaderConfig::parse("[library]\nnames = []\n").unwrap_err();
    assert!(matches!(err, CoreError::ConfigError(_)), "got {:?}", err);

    // An explicit path makes an empty fallback list fine.
    let config = LoaderConfig::parse("[library]\npath = \"/opt/vk/libvulkan.so.1\"\nnames = []\n").unwrap();
    assert_eq!(
        config.library_candidates(),
        Some(vec!["/opt/vk/libvulkan.so.1".to_string()])
    );
}

#[test]
fn test_malformed_toml_rejected() {
    let err = LoaderConfig::parse("[profile\n").unwrap_err();
    assert!(matches!(err, CoreError::Toml(_)), "got {:?}", err);
}

#[test]
fn test_parse_api_version() {
    assert_eq!(parse_api_version("1.0").unwrap(), (1, 0));
    assert_eq!(parse_api_version(" 1.3 ").unwrap(), (1, 3));
    assert_eq!(parse_api_version("1.2.198").unwrap(), (1, 2));
    assert!(parse_api_version("1").is_err());
    assert!(parse_api_version("1.x").is_err());
    assert!(parse_api_version("1.2.3.4").is_err());
    assert!(parse_api_version("").is_err());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = LoaderConfig::load_or_default("/nonexistent/metavk/metavk.toml");
    assert_eq!(config, LoaderConfig::default());
}
