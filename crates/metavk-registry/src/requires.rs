use std::fmt;

use ash::vk;
use serde::Serialize;

/// The tier whose lookup function resolves an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Resolved with a null instance before any instance exists.
    Loader,
    /// First parameter is an instance or physical device.
    Instance,
    /// First parameter is a device, queue or command buffer.
    Device,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Loader => "loader",
            Level::Instance => "instance",
            Level::Device => "device",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability predicate gating an entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requires {
    /// Core version, packed with `vk::make_api_version`.
    Version(u32),
    /// Named extension, e.g. `VK_KHR_swapchain`.
    Extension(&'static str),
    All(&'static [Requires]),
    Any(&'static [Requires]),
}

pub const V1_0: Requires = Requires::Version(vk::API_VERSION_1_0);
pub const V1_1: Requires = Requires::Version(vk::API_VERSION_1_1);
pub const V1_2: Requires = Requires::Version(vk::API_VERSION_1_2);
pub const V1_3: Requires = Requires::Version(vk::API_VERSION_1_3);

pub const fn ext(name: &'static str) -> Requires {
    Requires::Extension(name)
}

pub const fn all(terms: &'static [Requires]) -> Requires {
    Requires::All(terms)
}

pub const fn any(terms: &'static [Requires]) -> Requires {
    Requires::Any(terms)
}

impl Requires {
    /// Evaluate the predicate against version and extension tests.
    pub fn eval(&self, version: &impl Fn(u32) -> bool, extension: &impl Fn(&str) -> bool) -> bool {
        match *self {
            Requires::Version(v) => version(v),
            Requires::Extension(name) => extension(name),
            Requires::All(terms) => terms.iter().all(|t| t.eval(version, extension)),
            Requires::Any(terms) => terms.iter().any(|t| t.eval(version, extension)),
        }
    }

    /// Every extension name mentioned by the predicate.
    pub fn extensions(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        self.collect_extensions(&mut out);
        out
    }

    fn collect_extensions(&self, out: &mut Vec<&'static str>) {
        match *self {
            Requires::Version(_) => {}
            Requires::Extension(name) => {
                if !out.contains(&name) {
                    out.push(name);
                }
            }
            Requires::All(terms) | Requires::Any(terms) => {
                for term in terms {
                    term.collect_extensions(out);
                }
            }
        }
    }
}

impl fmt::Display for Requires {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, terms: &[Requires], sep: &str) -> fmt::Result {
            f.write_str("(")?;
            for (i, term) in terms.iter().enumerate() {
                if i > 0 {
                    f.write_str(sep)?;
                }
                write!(f, "{}", term)?;
            }
            f.write_str(")")
        }

        match *self {
            Requires::Version(v) => write!(
                f,
                "VK_VERSION_{}_{}",
                vk::api_version_major(v),
                vk::api_version_minor(v)
            ),
            Requires::Extension(name) => f.write_str(name),
            Requires::All(terms) => join(f, terms, " && "),
            Requires::Any(terms) => join(f, terms, " || "),
        }
    }
}

impl Serialize for Requires {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub name: &'static str,
    pub level: Level,
    pub requires: Requires,
}
