//! User interface module - output and diagnostics.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Writing the version to standard output

use std::io::{self, Write};

pub mod formatter;

pub use formatter::{display_error, format_error, format_version_output};

/// Write the rendered version to standard output and flush it.
pub fn write_output(output: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()
}
