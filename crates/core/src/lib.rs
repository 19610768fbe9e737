//! Core utilities for UNNG development tools
//!
//! This crate provides shared functionality used across the platform tools:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Property files**: optional `key=value` sources with existence tracking
//! - **Validation**: fluent field validation that collects every failure
//!
//! # Example
//!
//! ```rust,no_run
//! use unng_core::properties::PropertySource;
//!
//! let source = PropertySource::load("local.properties").expect("malformed property file");
//! if source.exists() {
//!     println!("versionName override: {:?}", source.get("versionName"));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod properties;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::properties::PropertySource;
    pub use crate::validation::{ValidationResult, Validator};
}
