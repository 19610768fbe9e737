//! Input validation
//!
//! Fluent validation for resolved configuration fields. Collects every
//! failure instead of stopping at the first, so callers can report all
//! missing fields at once.

use serde::{Deserialize, Serialize};

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
    warnings: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Get all warnings
    pub fn warnings(&self) -> &[ValidationError] {
        &self.warnings
    }

    /// Names of the fields that failed, in validation order
    pub fn failed_fields(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.field.clone()).collect()
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: ValidationError) {
        self.warnings.push(warning);
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is present and not empty
    pub fn required(mut self, field: &str, value: Option<&str>) -> Self {
        let missing = match value {
            Some(v) => v.trim().is_empty(),
            None => true,
        };
        if missing {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: "REQUIRED".to_string(),
            });
        }
        self
    }

    /// Add a warning (non-blocking)
    pub fn warn_if(mut self, field: &str, condition: bool, message: &str) -> Self {
        if condition {
            self.result.add_warning(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
                code: "WARNING".to_string(),
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_missing() {
        let result = Validator::new().required("keyAlias", None).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
    }

    #[test]
    fn test_required_empty() {
        let result = Validator::new().required("keyAlias", Some("  ")).validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_required_present() {
        let result = Validator::new().required("keyAlias", Some("upload")).validate();
        assert!(result.is_valid());
    }

    #[test]
    fn test_failed_fields_in_order() {
        let result = Validator::new()
            .required("keyAlias", Some("upload"))
            .required("keyPassword", None)
            .required("storePassword", Some(""))
            .validate();

        assert_eq!(result.failed_fields(), vec!["keyPassword", "storePassword"]);
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let result = Validator::new()
            .warn_if("storeFile", true, "Keystore file not found on disk")
            .validate();

        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }
}
