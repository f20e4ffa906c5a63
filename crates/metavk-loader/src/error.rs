#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("Vulkan loader library not found: {0}")]
    LibraryNotFound(String),

    #[error("{library} does not export vkGetInstanceProcAddr: {reason}")]
    MissingSeedSymbol { library: String, reason: String },

    #[error("loader is not initialized")]
    NotInitialized,

    #[error("entry point {0} is not loaded")]
    MissingSymbol(&'static str),

    #[error("device {requested:#x} rejected: global slots already hold device {loaded:#x}")]
    DeviceAlreadyLoaded { loaded: u64, requested: u64 },

    #[error("configuration error: {0}")]
    Config(#[from] metavk_core::CoreError),
}
