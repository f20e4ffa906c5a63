use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;

/// Environment variable that overrides `library.path`.
pub const LIBRARY_ENV: &str = "METAVK_LIBRARY";

/// Top-level metavk configuration, loaded from metavk.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub loader: BehaviorConfig,
}

/// Where to find the platform Vulkan loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Explicit library path, tried before any name in `names`
    pub path: Option<String>,
    /// Replacement search list (None = platform defaults)
    pub names: Option<Vec<String>>,
}

/// Which entry points are eligible for loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Highest core version whose entry points are loaded, e.g. "1.3"
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Extensions whose entry points are loaded (None = every extension)
    pub extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Reject global device loading for a second, different device
    #[serde(default)]
    pub strict_single_device: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            extensions: None,
        }
    }
}

impl LoaderConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, CoreError> {
        let config: LoaderConfig = toml::from_str(content)?;
        parse_api_version(&config.profile.api_version)?;
        if config.library.path.is_none() && config.library.names.as_ref().is_some_and(Vec::is_empty) {
            return Err(CoreError::ConfigError(
                "library.names is empty and no library.path is set".to_string(),
            ));
        }
        Ok(config)
    }

    /// Load configuration from file if it exists, otherwise return defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                debug!("using default configuration ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply `METAVK_LIBRARY` on top of the file settings.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(LIBRARY_ENV) {
            if !path.is_empty() {
                self.library.path = Some(path);
            }
        }
        self
    }

    /// The library candidates in search order, or None for platform defaults.
    ///
    /// `path` comes first, followed by `names` or, when no names are set,
    /// the platform defaults.
    pub fn library_candidates(&self) -> Option<Vec<String>> {
        let mut names = Vec::new();
        if let Some(ref path) = self.library.path {
            names.push(path.clone());
        }
        match self.library.names {
            Some(ref list) => names.extend(list.iter().cloned()),
            None if names.is_empty() => return None,
            None => names.extend(
                metavk_common::platform::loader_library_names()
                    .iter()
                    .map(|name| name.to_string()),
            ),
        }
        Some(names)
    }
}

/// Parse "MAJOR.MINOR" (an optional ".PATCH" is accepted and ignored).
pub fn parse_api_version(text: &str) -> Result<(u32, u32), CoreError> {
    let invalid = || CoreError::InvalidApiVersion(text.to_string());
    let mut parts = text.trim().split('.');
    let major = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    let minor = parts
        .next()
        .and_then(|p| p.parse::<u32>().ok())
        .ok_or_else(invalid)?;
    if let Some(patch) = parts.next() {
        patch.parse::<u32>().map_err(|_| invalid())?;
    }
    if parts.next().is_some() || major > 0x7f || minor > 0x3ff {
        return Err(invalid());
    }
    Ok((major, minor))
}

/// Returns the default config file path based on platform conventions.
/// Search order:
/// 1. System-wide config: `%PROGRAMDATA%\metavk\metavk.toml` (Windows) or `/etc/metavk/metavk.toml`
/// 2. Local fallback: `./metavk.toml`
pub fn default_config_path() -> String {
    #[cfg(windows)]
    {
        let programdata = std::env::var("PROGRAMDATA")
            .unwrap_or_else(|_| r"C:\ProgramData".to_string());
        let system_path = format!(r"{}\metavk\metavk.toml", programdata);
        if Path::new(&system_path).exists() {
            return system_path;
        }
    }
    #[cfg(not(windows))]
    {
        let system_path = "/etc/metavk/metavk.toml";
        if Path::new(system_path).exists() {
            return system_path.to_string();
        }
    }
    "metavk.toml".to_string()
}

fn default_api_version() -> String {
    "1.3".to_string()
}
