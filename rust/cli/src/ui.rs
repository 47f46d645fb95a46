//! UI helper functions for terminal output formatting.

use std::io::Write;

pub const SEPARATOR: &str =
    "===============================================================================";

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Zero-padded 1-based menu index, as shown next to each option.
pub fn menu_index(index: usize) -> String {
    format!("{:02}", index + 1)
}
