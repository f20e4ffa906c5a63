pub mod config;
pub mod error;

pub use config::LoaderConfig;
pub use error::CoreError;
