/// Candidate file names for the platform's Vulkan loader, in search order.
pub fn loader_library_names() -> &'static [&'static str] {
    #[cfg(windows)]
    {
        &["vulkan-1.dll"]
    }
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        &["libvulkan.dylib", "libvulkan.1.dylib", "libMoltenVK.dylib"]
    }
    #[cfg(not(any(windows, target_os = "macos", target_os = "ios")))]
    {
        &["libvulkan.so", "libvulkan.so.1"]
    }
}

/// Returns the platform name string.
pub fn platform_name() -> &'static str {
    #[cfg(target_os = "windows")]
    { "windows" }
    #[cfg(target_os = "linux")]
    { "linux" }
    #[cfg(target_os = "macos")]
    { "macos" }
    #[cfg(target_os = "android")]
    { "android" }
    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos", target_os = "android")))]
    { "unknown" }
}
