use crate::config::{Configuration, ConfigError};

/// Default for [`Configuration::clean`].
pub const DEFAULT_CLEAN: bool = false;
/// Default for [`Configuration::build_dir`].
pub const DEFAULT_BUILD_DIR: &str = ".build";

/// Configuration operation an option dispatches to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Target {
  CleanDirectoryBeforeBuild,
  SetBuildDirectory,
}

impl Target {
  /// Name of the configuration operation, as it appears in logs.
  pub fn name(self) -> &'static str {
    match self {
      Target::CleanDirectoryBeforeBuild => "cleanDirectoryBeforeBuild",
      Target::SetBuildDirectory => "setBuildDirectory",
    }
  }

  /// Apply this target to `config`, passing `value` as the (possibly absent) option argument.
  ///
  /// # Errors
  ///
  /// Returns the error of the dispatched configuration operation.
  pub fn apply(self, config: &mut Configuration, value: Option<&str>) -> Result<(), ConfigError> {
    match self {
      Target::CleanDirectoryBeforeBuild => config.clean_directory_before_build(value),
      Target::SetBuildDirectory => config.set_build_directory(value),
    }
  }
}

/// A recognized command-line option.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct OptionEntry {
  /// Spellings that select this option. Disjoint from the aliases of every other entry.
  pub aliases: &'static [&'static str],
  pub target: Target,
  /// Whether the option consumes the following token as its argument.
  pub takes_value: bool,
  pub description: &'static str,
}

impl OptionEntry {
  /// Checks whether `token` is one of the aliases of this option.
  #[inline]
  pub fn matches(&self, token: &str) -> bool {
    self.aliases.contains(&token)
  }
}

/// All recognized options, in the order they are shown in help text.
pub static OPTIONS: &[OptionEntry] = &[
  OptionEntry {
    aliases: &["--clean", "-c"],
    target: Target::CleanDirectoryBeforeBuild,
    takes_value: false,
    description: "Cleans the building directory before build (default: false)",
  },
  OptionEntry {
    aliases: &["-b", "--build-dir"],
    target: Target::SetBuildDirectory,
    takes_value: true,
    description: "Defines the building directory (default: \".build\")",
  },
];

/// Checks whether `token` looks like an option: it starts with `-`, which includes `--` and the bare `-` and `--`.
#[inline]
pub fn is_option(token: &str) -> bool {
  token.starts_with('-')
}

/// Returns the option entry `token` is an alias of, or `None` if no option matches.
pub fn resolve(token: &str) -> Option<&'static OptionEntry> {
  OPTIONS.iter().find(|entry| entry.matches(token))
}

/// Checks whether the option `token` selects takes a value. Unrecognized tokens do not take a value; combine with
/// [`resolve`] to tell them apart from recognized options without a value.
pub fn takes_value(token: &str) -> bool {
  resolve(token).map_or(false, |entry| entry.takes_value)
}
