//! Platform SDK versions
//!
//! SDK levels come from the external toolchain (the Flutter Gradle plugin
//! in the standard setup). The resolver passes them through unmodified.

use serde::{Deserialize, Serialize};

/// Platform SDK versions supplied by the toolchain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkInfo {
    /// SDK version the app is compiled against
    pub compile_sdk: u32,
    /// Minimum supported SDK version
    pub min_sdk: u32,
    /// SDK version the app targets
    pub target_sdk: u32,
    /// NDK version, when native code is built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ndk_version: Option<String>,
}

impl SdkInfo {
    /// Create SDK info without an NDK version
    pub fn new(compile_sdk: u32, min_sdk: u32, target_sdk: u32) -> Self {
        Self {
            compile_sdk,
            min_sdk,
            target_sdk,
            ndk_version: None,
        }
    }

    /// Set the NDK version
    pub fn with_ndk_version(mut self, version: impl Into<String>) -> Self {
        self.ndk_version = Some(version.into());
        self
    }
}
