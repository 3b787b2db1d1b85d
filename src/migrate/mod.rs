//! File-level migration for testify-migrate.
//!
//! This module handles:
//! - Selecting candidate test files in a directory
//! - Reading, rewriting and writing each file in place

use crate::error::{MigrateError, Result};
use crate::rules::{RuleSet, transform_source};
use std::path::{Path, PathBuf};

/// Options controlling which files are migrated and how.
#[derive(Debug, Clone)]
pub struct MigrateOptions {
	/// Filename suffix selecting candidate files.
	pub suffix: String,

	/// Descend into subdirectories.
	pub recursive: bool,

	/// Compute the result without writing anything.
	pub dry_run: bool,
}

/// Result of migrating one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
	pub path: PathBuf,

	/// Whether the rewritten content differs from the original.
	pub changed: bool,

	/// Whether the file was written back.
	pub written: bool,
}

/// List the regular files under `dir` whose name ends with `suffix`, sorted by path.
pub fn candidate_files(dir: &Path, suffix: &str, recursive: bool) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	collect_files(dir, suffix, recursive, &mut files)?;
	files.sort();
	Ok(files)
}

fn collect_files(dir: &Path, suffix: &str, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
	let read_err = |source| MigrateError::DirectoryRead {
		path: dir.to_path_buf(),
		source,
	};

	for entry in std::fs::read_dir(dir).map_err(read_err)? {
		let entry = entry.map_err(read_err)?;
		let path = entry.path();
		let file_type = entry.file_type().map_err(read_err)?;

		if file_type.is_dir() {
			if recursive {
				collect_files(&path, suffix, recursive, out)?;
			}
		} else if entry.file_name().to_string_lossy().ends_with(suffix) {
			out.push(path);
		}
	}

	Ok(())
}

/// Read `path`, rewrite it with `rules`, and write it back unless `dry_run`.
///
/// The file is written even when nothing changed. Writing to the existing
/// file keeps its permissions.
pub fn migrate_file(path: &Path, rules: &RuleSet, dry_run: bool) -> Result<FileOutcome> {
	let content = read_file(path)?;
	let rewritten = transform_source(rules, &content);
	let changed = rewritten != content;

	if !dry_run {
		write_file(path, &rewritten)?;
	}

	Ok(FileOutcome {
		path: path.to_path_buf(),
		changed,
		written: !dry_run,
	})
}

/// Read a file for migration. The content is not required to be UTF-8.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
	std::fs::read(path).map_err(|source| MigrateError::FileRead {
		path: path.to_path_buf(),
		source,
	})
}

/// Overwrite a file with migrated content.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
	std::fs::write(path, content).map_err(|source| MigrateError::FileWrite {
		path: path.to_path_buf(),
		source,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_candidate_files_filters_and_sorts() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join("b_test.go"), "").unwrap();
		fs::write(root.join("a_test.go"), "").unwrap();
		fs::write(root.join("main.go"), "").unwrap();
		fs::write(root.join("notes_test.go.bak"), "").unwrap();
		fs::create_dir(root.join("sub")).unwrap();
		fs::write(root.join("sub").join("c_test.go"), "").unwrap();

		let files = candidate_files(root, "_test.go", false).unwrap();
		assert_eq!(files, vec![root.join("a_test.go"), root.join("b_test.go")]);
	}

	#[test]
	fn test_candidate_files_recursive() {
		let temp_dir = tempfile::tempdir().unwrap();
		let root = temp_dir.path();
		fs::write(root.join("a_test.go"), "").unwrap();
		fs::create_dir_all(root.join("pkg").join("inner")).unwrap();
		fs::write(root.join("pkg").join("inner").join("c_test.go"), "").unwrap();

		let files = candidate_files(root, "_test.go", true).unwrap();
		assert_eq!(
			files,
			vec![
				root.join("a_test.go"),
				root.join("pkg").join("inner").join("c_test.go"),
			]
		);
	}

	#[test]
	fn test_candidate_files_skips_matching_directories() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::create_dir(temp_dir.path().join("fixtures_test.go")).unwrap();

		let files = candidate_files(temp_dir.path(), "_test.go", false).unwrap();
		assert!(files.is_empty());
	}

	#[test]
	fn test_candidate_files_missing_dir() {
		let temp_dir = tempfile::tempdir().unwrap();
		let missing = temp_dir.path().join("missing");

		match candidate_files(&missing, "_test.go", false).unwrap_err() {
			MigrateError::DirectoryRead { path, .. } => assert_eq!(path, missing),
			other => panic!("Expected DirectoryRead error, got {other:?}"),
		}
	}

	#[test]
	fn test_migrate_file_rewrites_in_place() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("x_test.go");
		fs::write(&path, "func (s *XSuite) TestA(c *C) {\n\tc.Assert(err, IsNil)\n}\n").unwrap();

		let outcome = migrate_file(&path, RuleSet::builtin(), false).unwrap();
		assert!(outcome.changed);
		assert!(outcome.written);
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"func (s *XSuite) TestA() {\n\ts.NoError(err)\n}\n"
		);
	}

	#[test]
	fn test_migrate_file_dry_run_leaves_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("x_test.go");
		let original = "c.Assert(ok, Equals, true)\n";
		fs::write(&path, original).unwrap();

		let outcome = migrate_file(&path, RuleSet::builtin(), true).unwrap();
		assert!(outcome.changed);
		assert!(!outcome.written);
		assert_eq!(fs::read_to_string(&path).unwrap(), original);
	}

	#[test]
	fn test_migrate_file_unchanged() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("x_test.go");
		fs::write(&path, "package x\n").unwrap();

		let outcome = migrate_file(&path, RuleSet::builtin(), false).unwrap();
		assert!(!outcome.changed);
		assert!(outcome.written);
	}

	#[test]
	fn test_migrate_file_non_utf8() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("x_test.go");
		fs::write(&path, b"// caf\xe9\nc.Assert(err, IsNil)\n").unwrap();

		let outcome = migrate_file(&path, RuleSet::builtin(), false).unwrap();
		assert!(outcome.changed);
		assert_eq!(fs::read(&path).unwrap(), b"// caf\xe9\ns.NoError(err)\n");
	}

	#[test]
	fn test_migrate_file_missing() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("gone_test.go");

		assert!(matches!(
			migrate_file(&path, RuleSet::builtin(), false),
			Err(MigrateError::FileRead { .. })
		));
	}

	#[cfg(unix)]
	#[test]
	fn test_migrate_file_preserves_permissions() {
		use std::os::unix::fs::PermissionsExt;

		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("x_test.go");
		fs::write(&path, "c.Assert(err, IsNil)\n").unwrap();
		fs::set_permissions(&path, fs::Permissions::from_mode(0o600)).unwrap();

		migrate_file(&path, RuleSet::builtin(), false).unwrap();

		let mode = fs::metadata(&path).unwrap().permissions().mode();
		assert_eq!(mode & 0o777, 0o600);
	}
}
