use crate::config::parser::parse_config_file;
use crate::config::types::{CONFIG_FILE_NAME, LoadedConfig};
use crate::error::{MigrateError, Result};
use std::path::{Path, PathBuf};

/// Locate and load the config for a migration run.
///
/// Resolution order:
/// 1. An explicit path, which must exist
/// 2. `.testify-migrate.toml` inside `target_dir`
///
/// Returns `None` when no explicit path is given and the target directory has
/// no config file; callers then use the defaults.
pub fn discover_config(
	target_dir: &Path,
	explicit: Option<&Path>,
) -> Result<Option<LoadedConfig>> {
	if let Some(path) = explicit {
		if !path.exists() {
			return Err(MigrateError::ConfigNotFound {
				path: path.to_path_buf(),
			});
		}
		return load(path.to_path_buf()).map(Some);
	}

	let config_path = default_config_path(target_dir);
	if config_path.exists() {
		load(config_path).map(Some)
	} else {
		Ok(None)
	}
}

fn load(path: PathBuf) -> Result<LoadedConfig> {
	let config = parse_config_file(&path)?;
	Ok(LoadedConfig { config, path })
}

/// Path of the config file implicitly looked up for `target_dir`.
pub fn default_config_path(target_dir: &Path) -> PathBuf {
	target_dir.join(CONFIG_FILE_NAME)
}
