//! Configuration loading and parsing for testify-migrate.
//!
//! This module handles:
//! - TOML config file parsing and validation
//! - Locating the config for a target directory

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{default_config_path, discover_config};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{
	CONFIG_FILE_NAME, Config, DEFAULT_SUFFIX, LiteralRule, LoadedConfig, RegexRule,
};
