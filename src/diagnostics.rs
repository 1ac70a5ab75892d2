//! Shared diagnostics helpers for consistent, colored output on stderr.

use colored::Colorize;

/// Print a warning with a colored prefix.
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", "WARN".yellow().bold(), message.as_ref());
}

/// Print a progress note (e.g. the path of a written report).
pub fn note(message: impl AsRef<str>) {
    eprintln!("{} {}", "INFO".green().bold(), message.as_ref());
}

/// Format an error message with a colored prefix.
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{} {}", "ERROR".red().bold(), message.as_ref())
}
