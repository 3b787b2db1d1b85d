//! testify-migrate - rewrite gocheck test suites into testify suites.
//!
//! This library provides the core functionality for testify-migrate, including:
//! - The line-based rewrite engine and its built-in rule tables
//! - Configuration file parsing for extra rules
//! - Selecting, reading and rewriting test files in place
//!
//! # Example
//!
//! ```
//! use testify_migrate::rules::transform;
//!
//! let lines = ["c.Assert(result, DeepEquals, expected)"];
//! assert_eq!(transform(&lines), vec!["s.Equal(expected, result)"]);
//! ```

pub mod config;
pub mod error;
pub mod migrate;
pub mod rules;

pub use error::{MigrateError, Result};
