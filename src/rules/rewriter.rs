use crate::rules::ruleset::RuleSet;

impl RuleSet {
	/// Rewrite a single source line into one or more output lines.
	///
	/// Literal rules run first, then every tier in order; each tier sees the
	/// output of the previous one. The normalized line is then checked against
	/// the structural patterns, and the first match replaces it with its block.
	pub fn rewrite_bytes(&self, line: &[u8]) -> Vec<Vec<u8>> {
		let mut line = line.to_vec();

		for literal in &self.literals {
			line = literal.apply(&line);
		}

		for tier in &self.tiers {
			for rule in &tier.rules {
				line = rule.apply(&line);
			}
		}

		self.structural
			.iter()
			.find_map(|pattern| pattern.expand(&line))
			.unwrap_or_else(|| vec![line])
	}

	/// [`RuleSet::rewrite_bytes`] for a line already held as a string.
	pub fn rewrite_line(&self, line: &str) -> Vec<String> {
		self.rewrite_bytes(line.as_bytes())
			.into_iter()
			.map(|out| String::from_utf8_lossy(&out).into_owned())
			.collect()
	}

	/// Rewrite a file's lines. Each input line is handled independently and
	/// blank lines are kept, so only structural patterns change the line count.
	pub fn transform<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
		lines
			.iter()
			.flat_map(|line| self.rewrite_line(line.as_ref()))
			.collect()
	}

	/// Byte-level [`RuleSet::transform`].
	pub fn transform_bytes<L: AsRef<[u8]>>(&self, lines: &[L]) -> Vec<Vec<u8>> {
		lines
			.iter()
			.flat_map(|line| self.rewrite_bytes(line.as_ref()))
			.collect()
	}
}

/// Rewrite a file's lines with the built-in rules.
pub fn transform<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
	RuleSet::builtin().transform(lines)
}

/// Rewrite whole file content: split on `\n`, transform, and rejoin.
///
/// Content is handled as bytes; it does not need to be valid UTF-8.
pub fn transform_source(rules: &RuleSet, content: &[u8]) -> Vec<u8> {
	let lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
	rules.transform_bytes(&lines).join(&b'\n')
}
