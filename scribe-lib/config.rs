//! Configuration for generated text.
//!
//! The built-in defaults live in `config.toml` next to this file and are
//! compiled in. Callers hand over their own TOML text, which is merged on top
//! of the defaults; reading it from disk is up to them.
//!
//! ```
//! use scribe_lib::config::Config;
//!
//! let config = Config::from_toml("wrap-width = 100").unwrap();
//! assert_eq!(config.wrap_width, 100);
//! assert_eq!(config.comment_prefix, "/// ");
//! ```

use eyre::{
  Context,
  Result,
  ensure,
};
use scribe_core::line_ending::{
  LineEnding,
  NATIVE_LINE_ENDING,
};
use serde::Deserialize;

use crate::line::{
  DEFAULT_COMMENT_PREFIX,
  DEFAULT_WRAP_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub wrap_width:     usize,
  pub comment_prefix: String,
  pub line_ending:    LineEndingConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      wrap_width:     DEFAULT_WRAP_WIDTH,
      comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
      line_ending:    LineEndingConfig::default(),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEndingConfig {
  #[default]
  Lf,
  Crlf,
  Native,
}

impl LineEndingConfig {
  pub fn line_ending(self) -> LineEnding {
    match self {
      Self::Lf => LineEnding::LF,
      Self::Crlf => LineEnding::Crlf,
      Self::Native => NATIVE_LINE_ENDING,
    }
  }
}

impl Config {
  /// The built-in defaults.
  pub fn builtin() -> Result<Self> {
    Self::from_value(default_config()?)
  }

  /// `user` merged over the built-in defaults. Keys `user` leaves out keep
  /// their default values.
  pub fn from_toml(user: &str) -> Result<Self> {
    let user: toml::Value = toml::from_str(user).context("failed to parse scribe config")?;
    Self::from_value(merge_toml_values(default_config()?, user, 3))
  }

  fn from_value(value: toml::Value) -> Result<Self> {
    let config: Config = value.try_into().context("invalid scribe config")?;
    ensure!(config.wrap_width > 0, "wrap-width must be at least 1");
    tracing::debug!(?config, "resolved scribe config");
    Ok(config)
  }

  pub fn line_ending(&self) -> LineEnding {
    self.line_ending.line_ending()
  }
}

/// Built-in config.toml.
pub fn default_config() -> Result<toml::Value> {
  let default_config = include_str!("config.toml");
  toml::from_str(default_config).context("failed to parse built-in config.toml")
}

/// Merges `right` into `left`, descending `merge_depth` levels into nested
/// tables. Below that depth, and for anything that is not a table on both
/// sides, the value from `right` wins.
pub fn merge_toml_values(left: toml::Value, right: toml::Value, merge_depth: usize) -> toml::Value {
  use toml::Value;

  match (left, right) {
    (Value::Table(mut left_map), Value::Table(right_map)) if merge_depth > 0 => {
      for (rname, rvalue) in right_map {
        let merged_value = match left_map.remove(&rname) {
          Some(lvalue) => merge_toml_values(lvalue, rvalue, merge_depth - 1),
          None => rvalue,
        };
        left_map.insert(rname, merged_value);
      }
      Value::Table(left_map)
    },
    (_, value) => value,
  }
}
