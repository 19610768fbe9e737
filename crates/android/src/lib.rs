//! Android build-configuration tools for UNNG
//!
//! This crate resolves the Android build configuration for the UNNG Logs
//! app from optional property files plus toolchain-supplied SDK versions:
//! - Version resolution (`local.properties`)
//! - Release signing resolution (`key.properties`)
//! - Immutable `BuildConfig` composition for the build orchestrator

#![warn(missing_docs)]

pub mod build_config;
pub mod sdk;
pub mod signing;
pub mod version;

pub use build_config::BuildConfig;
pub use sdk::SdkInfo;
pub use signing::SigningConfig;
pub use version::VersionInfo;
