use serde::Deserialize;
use std::path::PathBuf;

use crate::error::MigrateError;
use crate::rules::tables::REGEX_TIERS;

/// Default filename suffix identifying Go test files.
pub const DEFAULT_SUFFIX: &str = "_test.go";

/// Name of the config file looked up in the target directory.
pub const CONFIG_FILE_NAME: &str = ".testify-migrate.toml";

/// Top-level configuration from a `.testify-migrate.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Filename suffix selecting candidate files. Defaults to `_test.go`.
	#[serde(default)]
	pub suffix: Option<String>,

	/// Descend into subdirectories of the target directory.
	#[serde(default)]
	pub recursive: bool,

	/// Extra literal replacements, run after the built-in ones.
	#[serde(default, rename = "literal")]
	pub literals: Vec<LiteralRule>,

	/// Extra regex rules.
	#[serde(default)]
	pub rules: Vec<RegexRule>,
}

/// An exact substring replacement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiteralRule {
	pub from: String,

	#[serde(default)]
	pub to: String,
}

/// A regex replacement. `$1`, `$2`, ... in the replacement refer to capture groups.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegexRule {
	pub pattern: String,

	pub replacement: String,

	/// Built-in tier (1-based) to append this rule to.
	/// When absent the rule goes into an extra tier after the built-in ones.
	pub tier: Option<usize>,
}

/// A loaded configuration with its source path for display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl LiteralRule {
	pub fn validate(&self) -> Result<(), MigrateError> {
		if self.from.is_empty() {
			return Err(MigrateError::EmptyLiteral);
		}
		Ok(())
	}
}

impl RegexRule {
	/// Validate that the tier, if given, names a built-in tier.
	pub fn validate(&self) -> Result<(), MigrateError> {
		let max = REGEX_TIERS.len();
		match self.tier {
			Some(tier) if tier == 0 || tier > max => Err(MigrateError::InvalidTier {
				pattern: self.pattern.clone(),
				tier,
				max,
			}),
			_ => Ok(()),
		}
	}
}

impl Config {
	/// Validate all rules in this config.
	pub fn validate(&self) -> Result<(), MigrateError> {
		for literal in &self.literals {
			literal.validate()?;
		}
		for rule in &self.rules {
			rule.validate()?;
		}
		Ok(())
	}

	/// The effective filename suffix.
	pub fn suffix(&self) -> &str {
		self.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
	}
}
