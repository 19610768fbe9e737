//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.len()));
    }
}

/// Print an aligned key/value field
pub fn field(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", key).dimmed(), value);
}

/// Print an aligned key/value field, or a dimmed placeholder when absent
pub fn optional_field(key: &str, value: Option<&str>) {
    match value {
        Some(v) => field(key, v),
        None => println!("  {:<16} {}", format!("{}:", key).dimmed(), "(none)".dimmed()),
    }
}

/// Mask a secret for display, keeping only its length hidden
pub fn redacted() -> &'static str {
    "********"
}
