use std::io::{self, Write};

use crate::options::OPTIONS;

/// Write usage text for `program` into `writer`: a usage line, followed by each option's aliases and description in
/// table order.
///
/// # Errors
///
/// Returns an error when writing to `writer` fails.
pub fn write_help(mut writer: impl Write, program: &str) -> Result<(), io::Error> {
  writeln!(writer, "USAGE: {} [options...]", program)?;
  writeln!(writer)?;
  writeln!(writer, "OPTIONS (optional):")?;
  for entry in OPTIONS {
    writeln!(writer, "  - {:?}: {}", entry.aliases, entry.description)?;
  }
  Ok(())
}
