//! App version resolution
//!
//! Reads `versionCode`/`versionName` overrides from the version property
//! source (`local.properties` by convention) and falls back to the
//! defaults when the file or the keys are absent.

use serde::{Deserialize, Serialize};
use unng_core::error::{Error, Result};
use unng_core::properties::PropertySource;

/// Version code used when no override is present
pub const DEFAULT_VERSION_CODE: u32 = 1;

/// Version name used when no override is present
pub const DEFAULT_VERSION_NAME: &str = "1.0";

const VERSION_CODE_KEY: &str = "versionCode";
const VERSION_NAME_KEY: &str = "versionName";

// The Flutter toolchain writes these spellings into local.properties.
const FLUTTER_VERSION_CODE_KEY: &str = "flutter.versionCode";
const FLUTTER_VERSION_NAME_KEY: &str = "flutter.versionName";

/// Resolved app version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    /// Monotonically increasing integer version, >= 1
    pub code: u32,
    /// Human-readable version string
    pub name: String,
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self {
            code: DEFAULT_VERSION_CODE,
            name: DEFAULT_VERSION_NAME.to_string(),
        }
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Resolve the app version from a property source.
///
/// An absent source or absent keys resolve to the defaults. A present
/// `versionCode` that is not a positive integer is a hard error.
pub fn resolve(source: &PropertySource) -> Result<VersionInfo> {
    let code = match lookup(source, VERSION_CODE_KEY, FLUTTER_VERSION_CODE_KEY) {
        Some(raw) => parse_version_code(raw)?,
        None => DEFAULT_VERSION_CODE,
    };

    let name = lookup(source, VERSION_NAME_KEY, FLUTTER_VERSION_NAME_KEY)
        .unwrap_or(DEFAULT_VERSION_NAME)
        .to_string();

    Ok(VersionInfo { code, name })
}

fn lookup<'a>(source: &'a PropertySource, key: &str, flutter_key: &str) -> Option<&'a str> {
    source.get(key).or_else(|| source.get(flutter_key))
}

fn parse_version_code(raw: &str) -> Result<u32> {
    let code: u32 = raw
        .parse()
        .map_err(|_| Error::invalid_version_code(raw))?;

    if code < 1 {
        return Err(Error::invalid_version_code(raw));
    }

    Ok(code)
}
