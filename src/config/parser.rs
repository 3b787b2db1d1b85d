use crate::config::types::Config;
use crate::error::{MigrateError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| MigrateError::ConfigRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config = toml::from_str(content).map_err(|source| MigrateError::ConfigParse {
		path: path.to_path_buf(),
		source,
	})?;

	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(config.suffix.is_none());
		assert_eq!(config.suffix(), "_test.go");
		assert!(!config.recursive);
		assert!(config.literals.is_empty());
		assert!(config.rules.is_empty());
	}

	#[test]
	fn test_parse_basic_config() {
		let content = r#"
suffix = "_spec.go"
recursive = true
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.suffix(), "_spec.go");
		assert!(config.recursive);
	}

	#[test]
	fn test_parse_literals_and_rules() {
		let content = r#"
[[literal]]
from = "c.Check("
to = "c.Assert("

[[literal]]
from = "gocheck.TestingT(t)"

[[rules]]
pattern = 'c\.Assert\((.+), Matches, (.+)\)'
replacement = 's.Regexp($2, $1)'
tier = 1

[[rules]]
pattern = 'c\.Fatal\((.+)\)'
replacement = 's.FailNow($1)'
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert_eq!(config.literals.len(), 2);
		assert_eq!(config.literals[0].from, "c.Check(");
		assert_eq!(config.literals[0].to, "c.Assert(");
		assert_eq!(config.literals[1].to, "");

		assert_eq!(config.rules.len(), 2);
		assert_eq!(config.rules[0].replacement, "s.Regexp($2, $1)");
		assert_eq!(config.rules[0].tier, Some(1));
		assert!(config.rules[1].tier.is_none());
	}

	#[test]
	fn test_invalid_tier_rejected() {
		let content = r#"
[[rules]]
pattern = "foo"
replacement = "bar"
tier = 5
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(content, &path);

		match result.unwrap_err() {
			MigrateError::InvalidTier { pattern, tier, max } => {
				assert_eq!(pattern, "foo");
				assert_eq!(tier, 5);
				assert_eq!(max, 4);
			}
			other => panic!("Expected InvalidTier error, got {other:?}"),
		}
	}

	#[test]
	fn test_tier_zero_rejected() {
		let content = r#"
[[rules]]
pattern = "foo"
replacement = "bar"
tier = 0
"#;
		let path = PathBuf::from("test.toml");
		assert!(matches!(
			parse_config_str(content, &path),
			Err(MigrateError::InvalidTier { tier: 0, .. })
		));
	}

	#[test]
	fn test_empty_literal_rejected() {
		let content = r#"
[[literal]]
from = ""
to = "x"
"#;
		let path = PathBuf::from("test.toml");
		assert!(matches!(
			parse_config_str(content, &path),
			Err(MigrateError::EmptyLiteral)
		));
	}

	#[test]
	fn test_malformed_toml() {
		let path = PathBuf::from("broken.toml");
		match parse_config_str("invalid toml [[[", &path).unwrap_err() {
			MigrateError::ConfigParse { path, .. } => {
				assert_eq!(path, PathBuf::from("broken.toml"));
			}
			other => panic!("Expected ConfigParse error, got {other:?}"),
		}
	}

	#[test]
	fn test_parse_missing_file() {
		let result = parse_config_file(Path::new("/nonexistent/.testify-migrate.toml"));
		assert!(matches!(result, Err(MigrateError::ConfigRead { .. })));
	}
}
