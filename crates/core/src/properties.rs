//! Property file loading
//!
//! Simple `key=value` property sources used for build configuration
//! overlays. A source file is optional: absence is a valid state, not an
//! error, and the loaded value keeps track of it so callers cannot skip
//! the existence check.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// An ordered key/value property source loaded from an optional file.
///
/// The file is read once at load time and never re-read. Lookups are
/// last-occurrence-wins, matching the override semantics of layered
/// property files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySource {
    path: PathBuf,
    entries: Vec<(String, String)>,
    exists: bool,
}

impl PropertySource {
    /// Load a property source from a path.
    ///
    /// Returns an absent source (`exists() == false`) if the file does not
    /// exist. An existing file that is not well-formed `key=value` text is
    /// a hard error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "property source absent, using defaults");
            return Ok(Self::absent(path));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::from(e).with_context(format!("Failed to read property file {}", path.display()))
        })?;

        let entries = parse_properties(path, &content)?;
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "loaded property source"
        );

        Ok(Self {
            path: path.to_path_buf(),
            entries,
            exists: true,
        })
    }

    /// Create an absent source for a path that does not exist.
    pub fn absent(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
            exists: false,
        }
    }

    /// Whether the backing file existed at load time
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Path the source was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a key. Returns `None` for absent sources and unknown keys.
    ///
    /// When a key appears more than once, the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of entries in the source
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the source has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Parse `key=value` lines. `#` introduces a comment line, blank lines are
/// ignored, keys and values are trimmed. Values may be empty.
fn parse_properties(path: &Path, content: &str) -> Result<Vec<(String, String)>> {
    let mut entries = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        let line_no = idx + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::parse(path, line_no, "missing '='"));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::parse(path, line_no, "empty key"));
        }

        entries.push((key.to_string(), value.trim().to_string()));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    fn write_props(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_absent_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = PropertySource::load(dir.path().join("missing.properties")).unwrap();

        assert!(!source.exists());
        assert!(source.is_empty());
        assert_eq!(source.get("anything"), None);
    }

    #[test]
    fn test_parses_key_value_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(&dir, "local.properties", "versionCode=42\nversionName=2.3.1\n");

        let source = PropertySource::load(path).unwrap();
        assert!(source.exists());
        assert_eq!(source.len(), 2);
        assert_eq!(source.get("versionCode"), Some("42"));
        assert_eq!(source.get("versionName"), Some("2.3.1"));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(
            &dir,
            "key.properties",
            "# release keystore\n\nkeyAlias=upload\n   # indented comment\n",
        );

        let source = PropertySource::load(path).unwrap();
        assert_eq!(source.len(), 1);
        assert_eq!(source.get("keyAlias"), Some("upload"));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(&dir, "local.properties", "versionName=1.0\nversionName=2.0\n");

        let source = PropertySource::load(path).unwrap();
        assert_eq!(source.get("versionName"), Some("2.0"));
    }

    #[test]
    fn test_values_are_trimmed_and_may_be_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(&dir, "key.properties", "keyAlias =  upload  \nstorePassword=\n");

        let source = PropertySource::load(path).unwrap();
        assert_eq!(source.get("keyAlias"), Some("upload"));
        assert_eq!(source.get("storePassword"), Some(""));
    }

    #[test]
    fn test_missing_equals_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(&dir, "local.properties", "versionCode=1\nnot a property\n");

        let err = PropertySource::load(path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.message.contains("line 2"));
    }

    #[test]
    fn test_empty_key_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_props(&dir, "local.properties", "=value\n");

        let err = PropertySource::load(path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }
}
