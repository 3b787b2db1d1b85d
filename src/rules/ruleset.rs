use crate::config::types::Config;
use crate::error::{MigrateError, Result};
use crate::rules::tables::{
	ExpansionLine, LITERAL_RULES, REGEX_TIERS, STRUCTURAL_PATTERNS, StructuralDef,
};
use regex::bytes::{NoExpand, Regex, RegexBuilder};
use std::sync::LazyLock;

static BUILTIN: LazyLock<RuleSet> = LazyLock::new(|| {
	RuleSet::compile_builtin().expect("built-in rule tables contain only valid patterns")
});

/// An exact substring replacement.
#[derive(Debug, Clone)]
pub struct LiteralRule {
	pub from: String,
	pub to: String,
	matcher: Regex,
}

/// A compiled regex replacement.
#[derive(Debug, Clone)]
pub struct RegexRule {
	/// Compiled pattern.
	pub pattern: Regex,

	/// Replacement template; `$1`, `$2`, ... refer to capture groups.
	pub replacement: String,
}

/// An ordered group of regex rules applied together.
#[derive(Debug, Clone)]
pub struct Tier {
	pub name: String,
	pub rules: Vec<RegexRule>,
}

/// A single-line pattern that expands into a fixed block of lines.
#[derive(Debug, Clone)]
pub struct StructuralPattern {
	pub name: &'static str,
	pub pattern: Regex,
	pub expansion: &'static [ExpansionLine],
}

/// The full set of rules the rewrite engine applies.
///
/// Literal rules run first, then each tier in order, then structural
/// detection. Built once and never mutated afterwards.
///
/// Rules match raw bytes, so lines that are not valid UTF-8 are rewritten
/// like any other line.
#[derive(Debug, Clone)]
pub struct RuleSet {
	pub literals: Vec<LiteralRule>,
	pub tiers: Vec<Tier>,
	pub structural: Vec<StructuralPattern>,
}

impl LiteralRule {
	pub fn new(from: &str, to: &str) -> Result<Self> {
		Ok(LiteralRule {
			from: from.to_string(),
			to: to.to_string(),
			matcher: compile_regex(&regex::escape(from))?,
		})
	}

	/// Replace every occurrence of `from` in `line`.
	pub fn apply(&self, line: &[u8]) -> Vec<u8> {
		self.matcher
			.replace_all(line, NoExpand(self.to.as_bytes()))
			.into_owned()
	}
}

impl RegexRule {
	pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
		Ok(RegexRule {
			pattern: compile_regex(pattern)?,
			replacement: replacement.to_string(),
		})
	}

	/// Replace every match in `line`.
	pub fn apply(&self, line: &[u8]) -> Vec<u8> {
		self.pattern
			.replace_all(line, self.replacement.as_bytes())
			.into_owned()
	}
}

impl StructuralPattern {
	fn from_def((name, pattern, expansion): &StructuralDef) -> Result<Self> {
		Ok(StructuralPattern {
			name: *name,
			pattern: compile_regex(pattern)?,
			expansion: *expansion,
		})
	}

	/// Expand `line` into its output block, or `None` if the pattern doesn't match.
	pub fn expand(&self, line: &[u8]) -> Option<Vec<Vec<u8>>> {
		if !self.pattern.is_match(line) {
			return None;
		}

		let block = self
			.expansion
			.iter()
			.map(|out| match out {
				ExpansionLine::Rewrite(template) => self
					.pattern
					.replace_all(line, template.as_bytes())
					.into_owned(),
				ExpansionLine::Literal(text) => text.as_bytes().to_vec(),
			})
			.collect();
		Some(block)
	}
}

impl RuleSet {
	/// The compiled built-in gocheck → testify rules.
	pub fn builtin() -> &'static RuleSet {
		&BUILTIN
	}

	fn compile_builtin() -> Result<Self> {
		let literals = LITERAL_RULES
			.iter()
			.map(|(from, to)| LiteralRule::new(from, to))
			.collect::<Result<Vec<_>>>()?;

		let tiers = REGEX_TIERS
			.iter()
			.map(|(name, rules)| -> Result<Tier> {
				let rules = rules
					.iter()
					.map(|(pattern, replacement)| RegexRule::new(pattern, replacement))
					.collect::<Result<Vec<_>>>()?;
				Ok(Tier {
					name: (*name).to_string(),
					rules,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let structural = STRUCTURAL_PATTERNS
			.iter()
			.map(StructuralPattern::from_def)
			.collect::<Result<Vec<_>>>()?;

		Ok(RuleSet {
			literals,
			tiers,
			structural,
		})
	}

	/// Build the built-in rules extended with the rules from a config.
	///
	/// Extra literals run after the built-in ones. Extra regex rules with a
	/// tier are appended to that tier; the rest form one extra tier that runs
	/// after the built-in tiers.
	pub fn from_config(config: &Config) -> Result<Self> {
		config.validate()?;

		let mut set = Self::builtin().clone();

		for literal in &config.literals {
			set.literals.push(LiteralRule::new(&literal.from, &literal.to)?);
		}

		let mut extra = Vec::new();
		for rule in &config.rules {
			let compiled = RegexRule::new(&rule.pattern, &rule.replacement)?;
			match rule.tier {
				Some(tier) => set.tiers[tier - 1].rules.push(compiled),
				None => extra.push(compiled),
			}
		}

		if !extra.is_empty() {
			set.tiers.push(Tier {
				name: "custom".to_string(),
				rules: extra,
			});
		}

		Ok(set)
	}
}

/// Compile a regex pattern string for matching raw line bytes.
///
/// Unicode mode is off so `.` matches any byte but `\n`.
fn compile_regex(pattern: &str) -> Result<Regex> {
	RegexBuilder::new(pattern)
		.unicode(false)
		.build()
		.map_err(|source| MigrateError::InvalidRegex {
			pattern: pattern.to_string(),
			source,
		})
}
