//! Command-line front end for a build tool: parses option tokens into a [`Configuration`] and hands it to a
//! [`Builder`].

use std::io::Write;

use thiserror::Error;
use tracing::{debug, warn};

use crate::build::Builder;
use crate::config::Configuration;
use crate::help::write_help;
use crate::parse::{parse, ParseError};

pub mod build;
pub mod config;
pub mod help;
pub mod options;
pub mod parse;

/// Reason [`run`] failed.
#[derive(Debug, Error)]
pub enum RunError {
  #[error("invalid arguments: {0}")]
  Parse(#[from] ParseError),
  #[error("build failed: {0:#}")]
  Build(anyhow::Error),
}

/// Parse `tokens` and build with the resulting configuration. When parsing fails, usage text for `program` is
/// written to `out` instead, and nothing is built.
///
/// # Errors
///
/// Returns [`RunError::Parse`] when parsing `tokens` fails, and [`RunError::Build`] when `builder` fails.
pub fn run<S: AsRef<str>>(
  program: &str,
  tokens: &[S],
  mut builder: impl Builder,
  out: impl Write,
) -> Result<(), RunError> {
  let config: Configuration = match parse(tokens) {
    Ok(config) => config,
    Err(error) => {
      warn!(%error, "parsing arguments failed");
      if let Err(write_error) = write_help(out, program) {
        warn!(error = %write_error, "writing help failed");
      }
      return Err(error.into());
    }
  };
  debug!(?config, "parsed arguments");
  builder.build(config.clean(), config.build_dir()).map_err(RunError::Build)
}
