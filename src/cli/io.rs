//! CLI output helpers
//!
//! Command results are written to stdout as single JSON lines.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a JSON response line to stdout
pub fn write_response(value: Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", value)?;
    stdout.flush()?;
    Ok(())
}
