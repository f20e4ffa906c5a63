use std::collections::BTreeSet;

use ash::vk;

use crate::requires::Requires;

/// Selects which registry entries are eligible for loading.
///
/// A profile is the runtime form of the per-version and per-extension switches
/// a C loader would expose as preprocessor defines: entries whose predicate is
/// not satisfied are never looked up and their slots are reset to null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    api_version: u32,
    /// None means every extension.
    extensions: Option<BTreeSet<String>>,
}

impl Profile {
    /// Newest core version the registry describes.
    pub const LATEST: u32 = vk::API_VERSION_1_3;

    /// Latest core version and every extension.
    pub fn all() -> Self {
        Self {
            api_version: Self::LATEST,
            extensions: None,
        }
    }

    /// Core entry points up to `api_version`, no extensions.
    pub fn core(api_version: u32) -> Self {
        Self {
            api_version,
            extensions: Some(BTreeSet::new()),
        }
    }

    /// Allow the given extensions in addition to those already allowed.
    pub fn with_extensions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(ref mut set) = self.extensions {
            set.extend(names.into_iter().map(Into::into));
        }
        self
    }

    pub fn with_all_extensions(mut self) -> Self {
        self.extensions = None;
        self
    }

    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    /// The explicit extension allow-list, or None when all are allowed.
    pub fn extensions(&self) -> Option<&BTreeSet<String>> {
        self.extensions.as_ref()
    }

    pub fn allows_version(&self, required: u32) -> bool {
        version_key(required) <= version_key(self.api_version)
    }

    pub fn allows_extension(&self, name: &str) -> bool {
        match self.extensions {
            Some(ref set) => set.contains(name),
            None => true,
        }
    }

    pub fn enables(&self, requires: &Requires) -> bool {
        requires.eval(
            &|version| self.allows_version(version),
            &|name| self.allows_extension(name),
        )
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::all()
    }
}

// Patch level never gates entry points.
fn version_key(version: u32) -> (u32, u32) {
    (vk::api_version_major(version), vk::api_version_minor(version))
}
