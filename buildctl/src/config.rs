use thiserror::Error;

use crate::options::{DEFAULT_BUILD_DIR, DEFAULT_CLEAN};

/// Error returned by a configuration operation.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum ConfigError {
  #[error("a value is required but none was given")]
  MissingRequiredValue,
}

/// Resolved build settings. Each operation corresponds to a [`Target`](crate::options::Target).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Configuration {
  clean: bool,
  build_dir: String,
}

impl Default for Configuration {
  fn default() -> Self {
    Self { clean: DEFAULT_CLEAN, build_dir: DEFAULT_BUILD_DIR.to_string() }
  }
}

impl Configuration {
  /// Whether the build directory is cleaned before building.
  #[inline]
  pub fn clean(&self) -> bool { self.clean }

  #[inline]
  pub fn build_dir(&self) -> &str { &self.build_dir }

  /// Toggles cleaning the build directory before building. Calling this twice restores the previous setting. The
  /// argument is ignored.
  ///
  /// # Errors
  ///
  /// Never fails.
  pub fn clean_directory_before_build(&mut self, _value: Option<&str>) -> Result<(), ConfigError> {
    self.clean = !self.clean;
    Ok(())
  }

  /// Sets the build directory to `value`.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::MissingRequiredValue`] when `value` is `None`, leaving the build directory unchanged.
  pub fn set_build_directory(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
    let build_dir = value.ok_or(ConfigError::MissingRequiredValue)?;
    self.build_dir = build_dir.to_string();
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default() {
    let config = Configuration::default();
    assert!(!config.clean());
    assert_eq!(config.build_dir(), ".build");
  }

  #[test]
  fn test_clean_toggles() -> Result<(), ConfigError> {
    let mut config = Configuration::default();
    config.clean_directory_before_build(None)?;
    assert!(config.clean());
    // The argument has no influence.
    config.clean_directory_before_build(Some("true"))?;
    assert!(!config.clean());
    Ok(())
  }

  #[test]
  fn test_set_build_directory() -> Result<(), ConfigError> {
    let mut config = Configuration::default();
    config.set_build_directory(Some("out"))?;
    assert_eq!(config.build_dir(), "out");
    config.set_build_directory(Some(""))?;
    assert_eq!(config.build_dir(), "");

    config.set_build_directory(Some("target/build"))?;
    assert_eq!(config.set_build_directory(None), Err(ConfigError::MissingRequiredValue));
    assert_eq!(config.build_dir(), "target/build");
    Ok(())
  }
}
