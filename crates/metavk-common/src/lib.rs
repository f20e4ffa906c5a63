//! Shared helpers for the metavk crates: logging setup and platform facts.

pub mod logging;
pub mod platform;

pub use logging::init_logging;
