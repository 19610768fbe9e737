//! Release signing configuration
//!
//! Reads the release keystore credentials from the signing property source
//! (`key.properties` by convention). The config is all-or-nothing: an
//! absent file means "build unsigned" and is not an error, but a present
//! file must supply every credential.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use unng_core::error::{Error, Result};
use unng_core::properties::PropertySource;
use unng_core::validation::Validator;

const KEY_ALIAS: &str = "keyAlias";
const KEY_PASSWORD: &str = "keyPassword";
const STORE_FILE: &str = "storeFile";
const STORE_PASSWORD: &str = "storePassword";

/// Release signing credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningConfig {
    /// Alias of the signing key inside the keystore
    pub key_alias: String,
    /// Password for the signing key
    pub key_password: String,
    /// Path to the keystore file
    pub store_file: PathBuf,
    /// Password for the keystore
    pub store_password: String,
}

// Passwords stay out of Debug output and logs.
impl std::fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("key_alias", &self.key_alias)
            .field("key_password", &"<redacted>")
            .field("store_file", &self.store_file)
            .field("store_password", &"<redacted>")
            .finish()
    }
}

/// Resolve the signing config from a property source.
///
/// Returns `None` if the source does not exist. If it exists, all four
/// credential keys must be present and non-empty.
pub fn resolve(source: &PropertySource) -> Result<Option<SigningConfig>> {
    if !source.exists() {
        tracing::debug!(path = %source.path().display(), "no signing source, building unsigned");
        return Ok(None);
    }

    let result = Validator::new()
        .required(KEY_ALIAS, source.get(KEY_ALIAS))
        .required(KEY_PASSWORD, source.get(KEY_PASSWORD))
        .required(STORE_FILE, source.get(STORE_FILE))
        .required(STORE_PASSWORD, source.get(STORE_PASSWORD))
        .validate();

    if !result.is_valid() {
        return Err(Error::incomplete_signing_config(&result.failed_fields())
            .with_context(format!("Signing source: {}", source.path().display())));
    }

    Ok(Some(SigningConfig {
        key_alias: source.get(KEY_ALIAS).unwrap_or_default().to_string(),
        key_password: source.get(KEY_PASSWORD).unwrap_or_default().to_string(),
        store_file: PathBuf::from(source.get(STORE_FILE).unwrap_or_default()),
        store_password: source.get(STORE_PASSWORD).unwrap_or_default().to_string(),
    }))
}
