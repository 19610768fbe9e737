//! UNNG Android CLI
//!
//! Build-configuration tools for the UNNG Logs Android app.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unng_android::build_config;
use unng_android::sdk::SdkInfo;
use unng_cli::output::{self, Status};
use unng_core::error::{exit_codes, ErrorCode};
use unng_core::properties::PropertySource;
use unng_core::validation::Validator;

#[derive(Parser)]
#[command(name = "unng-android")]
#[command(about = "Build-configuration tools for the UNNG Logs Android app")]
#[command(version)]
struct Cli {
    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the build configuration and print it
    Resolve {
        /// Version property file
        #[arg(long, default_value = "local.properties")]
        version_props: PathBuf,
        /// Signing property file
        #[arg(long, default_value = "key.properties")]
        key_props: PathBuf,
        /// Application id
        #[arg(long, default_value = build_config::APPLICATION_ID)]
        app_id: String,
        /// SDK version to compile against
        #[arg(long, default_value_t = 34)]
        compile_sdk: u32,
        /// Minimum supported SDK version
        #[arg(long, default_value_t = 21)]
        min_sdk: u32,
        /// SDK version to target
        #[arg(long, default_value_t = 34)]
        target_sdk: u32,
        /// NDK version
        #[arg(long)]
        ndk_version: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the property sources and report problems
    Check {
        /// Version property file
        #[arg(long, default_value = "local.properties")]
        version_props: PathBuf,
        /// Signing property file
        #[arg(long, default_value = "key.properties")]
        key_props: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    if cli.verbose > 0 {
        tracing_subscriber::fmt()
            .with_env_filter("unng_core=debug,unng_android=debug")
            .init();
    }

    let exit_code = match cli.command {
        Commands::Resolve {
            version_props,
            key_props,
            app_id,
            compile_sdk,
            min_sdk,
            target_sdk,
            ndk_version,
            json,
        } => {
            let mut sdk = SdkInfo::new(compile_sdk, min_sdk, target_sdk);
            if let Some(ndk) = ndk_version {
                sdk = sdk.with_ndk_version(ndk);
            }
            run_resolve(&app_id, sdk, &version_props, &key_props, json)
        }
        Commands::Check {
            version_props,
            key_props,
        } => run_check(&version_props, &key_props, cli.quiet),
    };

    std::process::exit(exit_code);
}

fn exit_code_for(code: ErrorCode) -> i32 {
    match code.category() {
        "Configuration" => exit_codes::CONFIG_ERROR,
        "Signing" => exit_codes::SIGNING_ERROR,
        _ => exit_codes::FAILURE,
    }
}

fn run_resolve(
    app_id: &str,
    sdk: SdkInfo,
    version_props: &std::path::Path,
    key_props: &std::path::Path,
    json: bool,
) -> i32 {
    let version_source = match PropertySource::load(version_props) {
        Ok(source) => source,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(e.code);
        }
    };
    let signing_source = match PropertySource::load(key_props) {
        Ok(source) => source,
        Err(e) => {
            Status::error(&format!("{}", e));
            return exit_code_for(e.code);
        }
    };

    let config =
        match build_config::resolve_with_application_id(app_id, sdk, &version_source, &signing_source)
        {
            Ok(config) => config,
            Err(e) => {
                Status::error(&format!("{}", e));
                return exit_code_for(e.code);
            }
        };

    if json {
        match serde_json::to_string_pretty(&config) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                Status::error(&format!("JSON output failed: {}", e));
                return exit_codes::FAILURE;
            }
        }
        return exit_codes::SUCCESS;
    }

    Status::header("Build Configuration");
    output::field("applicationId", &config.application_id);
    output::field("version", &config.version.to_string());
    output::field("compileSdk", &config.sdk.compile_sdk.to_string());
    output::field("minSdk", &config.sdk.min_sdk.to_string());
    output::field("targetSdk", &config.sdk.target_sdk.to_string());
    output::optional_field("ndkVersion", config.sdk.ndk_version.as_deref());
    output::field("jvmTarget", &config.java.jvm_target);
    output::field("minify", &config.release.minify.to_string());
    output::field("shrinkResources", &config.release.shrink_resources.to_string());
    output::field("proguardFiles", &config.release.proguard_files.join(", "));

    match &config.signing {
        Some(signing) => {
            Status::header("Release Signing");
            output::field("keyAlias", &signing.key_alias);
            output::field("keyPassword", output::redacted());
            output::field("storeFile", &signing.store_file.display().to_string());
            output::field("storePassword", output::redacted());
        }
        None => {
            println!();
            Status::info("No signing source; orchestrator falls back to debug signing");
        }
    }

    exit_codes::SUCCESS
}

fn run_check(version_props: &std::path::Path, key_props: &std::path::Path, quiet: bool) -> i32 {
    let mut failed = false;

    for (label, path) in [("version source", version_props), ("signing source", key_props)] {
        match PropertySource::load(path) {
            Ok(source) if source.exists() => {
                if !quiet {
                    Status::success(&format!(
                        "{}: {} ({} entries)",
                        label,
                        path.display(),
                        source.len()
                    ));
                }
            }
            Ok(_) => {
                if !quiet {
                    Status::info(&format!(
                        "{}: {} absent, defaults apply",
                        label,
                        path.display()
                    ));
                }
            }
            Err(e) => {
                Status::error(&format!("{}: {}", label, e));
                failed = true;
            }
        }
    }

    if failed {
        return exit_codes::CONFIG_ERROR;
    }

    // Full resolution with placeholder SDK levels; they cannot fail resolution.
    let sdk = SdkInfo::new(34, 21, 34);
    match build_config::resolve_from_paths(sdk, version_props, key_props) {
        Ok(config) => {
            if let Some(signing) = &config.signing {
                let result = Validator::new()
                    .warn_if(
                        "storeFile",
                        !signing.store_file.exists(),
                        "Keystore file not found on disk",
                    )
                    .validate();
                for warning in result.warnings() {
                    Status::warning(&format!("{}", warning));
                }
            }
            if !quiet {
                Status::success(&format!(
                    "Configuration resolves: {} {}",
                    config.application_id, config.version
                ));
            }
            exit_codes::SUCCESS
        }
        Err(e) => {
            Status::error(&format!("{}", e));
            exit_code_for(e.code)
        }
    }
}
