//! The gocheck → testify rewrite engine.
//!
//! This module handles:
//! - The built-in literal, regex and structural rule tables
//! - Compiling those tables, plus any configured extras, into a `RuleSet`
//! - Rewriting a file's lines with a `RuleSet`

pub mod rewriter;
pub mod ruleset;
pub mod tables;

pub use rewriter::{transform, transform_source};
pub use ruleset::{LiteralRule, RegexRule, RuleSet, StructuralPattern, Tier};
pub use tables::ExpansionLine;
