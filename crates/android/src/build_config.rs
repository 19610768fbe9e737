//! Build configuration resolution
//!
//! Combines the version and signing property sources with the
//! toolchain-supplied SDK info into one immutable [`BuildConfig`] record.
//! Resolution is a single pass with no side effects beyond the two file
//! reads, so resolving the same inputs twice yields identical values.

use crate::sdk::SdkInfo;
use crate::signing::{self, SigningConfig};
use crate::version::{self, VersionInfo};
use serde::{Deserialize, Serialize};
use std::path::Path;
use unng_core::error::Result;
use unng_core::properties::PropertySource;

/// Application id of the UNNG Logs app
pub const APPLICATION_ID: &str = "unng.logs";

/// Java/Kotlin compatibility settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaCompat {
    /// Java source compatibility level
    pub source: u8,
    /// Java target compatibility level
    pub target: u8,
    /// Kotlin JVM target
    pub jvm_target: String,
}

impl Default for JavaCompat {
    fn default() -> Self {
        Self {
            source: 11,
            target: 11,
            jvm_target: "11".to_string(),
        }
    }
}

/// Release build-type options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseOptions {
    /// Whether code minification is enabled
    pub minify: bool,
    /// Whether unused resources are stripped
    pub shrink_resources: bool,
    /// Proguard rule files, in application order
    pub proguard_files: Vec<String>,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            minify: true,
            shrink_resources: true,
            proguard_files: vec![
                "proguard-android-optimize.txt".to_string(),
                "proguard-rules.pro".to_string(),
            ],
        }
    }
}

/// Immutable resolved build configuration
///
/// `signing` is the release signing config when the signing source exists;
/// `None` means the orchestrator decides its own fallback (typically debug
/// keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    /// Application id / namespace
    pub application_id: String,
    /// Resolved app version
    pub version: VersionInfo,
    /// Platform SDK versions
    pub sdk: SdkInfo,
    /// Java/Kotlin compatibility
    pub java: JavaCompat,
    /// Release build-type options
    pub release: ReleaseOptions,
    /// Release signing config, if the signing source exists
    pub signing: Option<SigningConfig>,
}

impl BuildConfig {
    /// Whether a release signing config was resolved
    pub fn is_signed(&self) -> bool {
        self.signing.is_some()
    }
}

/// Resolve a build configuration from already-loaded property sources.
///
/// Pure composition: any resolution error aborts the whole call and no
/// partial configuration is returned.
pub fn resolve(
    sdk: SdkInfo,
    version_source: &PropertySource,
    signing_source: &PropertySource,
) -> Result<BuildConfig> {
    resolve_with_application_id(APPLICATION_ID, sdk, version_source, signing_source)
}

/// Resolve a build configuration with an explicit application id.
pub fn resolve_with_application_id(
    application_id: &str,
    sdk: SdkInfo,
    version_source: &PropertySource,
    signing_source: &PropertySource,
) -> Result<BuildConfig> {
    let version = version::resolve(version_source)?;
    let signing = signing::resolve(signing_source)?;

    tracing::info!(
        application_id,
        version = %version,
        signed = signing.is_some(),
        "resolved build configuration"
    );

    Ok(BuildConfig {
        application_id: application_id.to_string(),
        version,
        sdk,
        java: JavaCompat::default(),
        release: ReleaseOptions::default(),
        signing,
    })
}

/// Load both property sources from paths, then resolve.
pub fn resolve_from_paths(
    sdk: SdkInfo,
    version_path: impl AsRef<Path>,
    signing_path: impl AsRef<Path>,
) -> Result<BuildConfig> {
    let version_source = PropertySource::load(version_path)?;
    let signing_source = PropertySource::load(signing_path)?;

    resolve(sdk, &version_source, &signing_source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use unng_core::error::ErrorCode;

    fn write_props(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn sdk() -> SdkInfo {
        SdkInfo::new(34, 21, 34).with_ndk_version("26.1.10909125")
    }

    #[test]
    fn test_resolves_defaults_when_both_sources_absent() {
        let version_source = PropertySource::absent("local.properties");
        let signing_source = PropertySource::absent("key.properties");

        let config = resolve(sdk(), &version_source, &signing_source).unwrap();

        assert_eq!(config.application_id, APPLICATION_ID);
        assert_eq!(config.version.code, 1);
        assert_eq!(config.version.name, "1.0");
        assert_eq!(config.signing, None);
        assert!(config.release.minify);
        assert!(config.release.shrink_resources);
        assert_eq!(config.java.jvm_target, "11");
    }

    #[test]
    fn test_resolves_from_paths() {
        let dir = tempfile::tempdir().unwrap();
        let version_path = write_props(&dir, "local.properties", "versionCode=42\nversionName=2.3.1\n");
        let signing_path = write_props(
            &dir,
            "key.properties",
            "keyAlias=upload\nkeyPassword=a\nstoreFile=/keys/release.jks\nstorePassword=b\n",
        );

        let config = resolve_from_paths(sdk(), &version_path, &signing_path).unwrap();

        assert_eq!(config.version.code, 42);
        assert_eq!(config.version.name, "2.3.1");
        assert!(config.is_signed());
        assert_eq!(config.signing.unwrap().key_alias, "upload");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let version_path = write_props(&dir, "local.properties", "versionCode=5\n");
        let signing_path = dir.path().join("key.properties");

        let first = resolve_from_paths(sdk(), &version_path, &signing_path).unwrap();
        let second = resolve_from_paths(sdk(), &version_path, &signing_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_version_error_aborts_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let version_path = write_props(&dir, "local.properties", "versionCode=abc\n");
        let signing_path = dir.path().join("key.properties");

        let err = resolve_from_paths(sdk(), &version_path, &signing_path).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidVersionCode);
    }

    #[test]
    fn test_signing_error_aborts_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let version_path = dir.path().join("local.properties");
        let signing_path = write_props(&dir, "key.properties", "keyAlias=upload\n");

        let err = resolve_from_paths(sdk(), &version_path, &signing_path).unwrap_err();
        assert_eq!(err.code, ErrorCode::IncompleteSigningConfig);
    }

    #[test]
    fn test_custom_application_id() {
        let version_source = PropertySource::absent("local.properties");
        let signing_source = PropertySource::absent("key.properties");

        let config = resolve_with_application_id(
            "unng.logs.dev",
            sdk(),
            &version_source,
            &signing_source,
        )
        .unwrap();

        assert_eq!(config.application_id, "unng.logs.dev");
    }

    #[test]
    fn test_json_round_trip() {
        let version_source = PropertySource::absent("local.properties");
        let signing_source = PropertySource::absent("key.properties");
        let config = resolve(sdk(), &version_source, &signing_source).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"applicationId\":\"unng.logs\""));

        let parsed: BuildConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
