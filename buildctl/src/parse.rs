use thiserror::Error;
use tracing::{debug, trace};

use crate::config::{Configuration, ConfigError};
use crate::options::{is_option, resolve};

/// Reason parsing command-line arguments failed. Carries the option token that caused the failure.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
pub enum ParseError {
  #[error("unrecognized option '{0}'")]
  UnrecognizedOption(String),
  #[error("option '{0}' requires a value")]
  MissingRequiredValue(String),
}

/// Parse `tokens` into a [`Configuration`], starting from the default configuration and dispatching each option to
/// its configuration operation in order.
///
/// An option that takes a value claims the next token as its value, even if that token looks like an option. Tokens
/// that do not look like options, and are not claimed as a value, are ignored.
///
/// # Errors
///
/// Returns the first error encountered, without processing remaining tokens:
/// - [`ParseError::UnrecognizedOption`] when a token looks like an option but no option has it as alias.
/// - [`ParseError::MissingRequiredValue`] when an option that takes a value is the last token.
pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Configuration, ParseError> {
  let mut config = Configuration::default();
  let mut value_consumed = false;
  for (i, token) in tokens.iter().enumerate() {
    let token = token.as_ref();
    if value_consumed {
      value_consumed = false;
      continue;
    }
    if !is_option(token) {
      debug!(token, "ignoring non-option argument");
      continue;
    }

    let Some(entry) = resolve(token) else {
      return Err(ParseError::UnrecognizedOption(token.to_string()));
    };
    // Claims the next token, even when there is none.
    value_consumed = entry.takes_value;
    let value = if entry.takes_value { tokens.get(i + 1).map(|value| value.as_ref()) } else { None };
    trace!(token, operation = entry.target.name(), value, "dispatching option");
    entry.target.apply(&mut config, value).map_err(|e| match e {
      ConfigError::MissingRequiredValue => ParseError::MissingRequiredValue(token.to_string()),
    })?;
  }
  Ok(config)
}
