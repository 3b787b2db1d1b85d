use std::path::PathBuf;

/// Library-level structured errors for testify-migrate.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
	#[error("Failed to read directory: {path}")]
	DirectoryRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid tier {tier} for rule {pattern} (expected 1..={max})")]
	InvalidTier {
		pattern: String,
		tier: usize,
		max: usize,
	},

	#[error("Literal rule has an empty `from` string")]
	EmptyLiteral,
}

/// Result type alias using MigrateError.
pub type Result<T> = std::result::Result<T, MigrateError>;
