//! Plugin configuration.
//!
//! A [`Config`] is built once at activation, either from [`Config::default`]
//! or from a TOML file, and passed by shared reference to every component.
//! Nothing mutates it afterwards; changing settings means rebuilding the
//! plugin state.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// How typed text is matched against candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
	/// Candidate must start with the query.
	#[default]
	Prefix,
	/// Candidate must contain the query anywhere.
	Substring,
}

/// Wildcard (`__path__`) source settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WildcardConfig {
	/// Root directory of wildcard files. Unset disables the source.
	pub dir: Option<PathBuf>,
	/// File extension of wildcard files under `dir`.
	pub extension: String,
	/// Whether accepted wildcard completions get the trailing separator.
	pub append_separator: bool,
}

impl Default for WildcardConfig {
	fn default() -> Self {
		Self {
			dir: None,
			extension: ".txt".into(),
			append_separator: false,
		}
	}
}

/// LoRA (`<lora:name:strength>`) source settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoraConfig {
	/// Root directory of model files. Unset disables the source.
	pub dir: Option<PathBuf>,
	/// File extension of model files under `dir`.
	pub extension: String,
	/// Strength written into freshly inserted tags, verbatim.
	pub default_strength: String,
	/// Whether accepted LoRA completions get the trailing separator.
	pub append_separator: bool,
}

impl Default for LoraConfig {
	fn default() -> Self {
		Self {
			dir: None,
			extension: ".safetensors".into(),
			default_strength: "1".into(),
			append_separator: false,
		}
	}
}

/// Static plugin configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
	/// File-name suffix of buffers the plugin activates for.
	pub target_suffix: String,
	/// Tag list file. Unset disables the tag source.
	pub tag_file: Option<PathBuf>,
	/// Minimum typed characters before suggestions are computed.
	pub min_chars: usize,
	/// Maximum number of suggestions shown at once.
	pub max_suggestions: usize,
	/// Replace `_` with a space when inserting a tag.
	pub underscore_to_space: bool,
	/// Characters escaped with a backslash when inserting a tag.
	pub escape_chars: String,
	/// Separator appended after an accepted completion.
	pub separator: String,
	/// Consume spaces left between the completion and what follows it.
	pub trim_spaces: bool,
	/// Prefix or substring matching.
	pub match_mode: MatchMode,
	/// Wildcard source settings.
	pub wildcard: WildcardConfig,
	/// LoRA source settings.
	pub lora: LoraConfig,
	/// Step applied by the weight increment/decrement commands.
	pub weight_step: f64,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			target_suffix: ".txt".into(),
			tag_file: None,
			min_chars: 2,
			max_suggestions: 7,
			underscore_to_space: true,
			escape_chars: "()".into(),
			separator: ", ".into(),
			trim_spaces: true,
			match_mode: MatchMode::Prefix,
			wildcard: WildcardConfig::default(),
			lora: LoraConfig::default(),
			weight_step: 0.1,
		}
	}
}

/// Errors from reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The file could not be read.
	#[error("failed to read config {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	/// The file is not valid TOML for [`Config`].
	#[error("failed to parse config {path}: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}

impl Config {
	/// Loads configuration from a TOML file.
	///
	/// Missing keys fall back to their defaults.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		toml::from_str(&raw).map_err(|source| ConfigError::Parse {
			path: path.to_path_buf(),
			source,
		})
	}
}
