//! Built-in gocheck → testify rule tables.
//!
//! Literal targets are disjoint, so the literal pass does not depend on
//! order. Regex tiers are applied strictly in order; inside a tier the
//! listed order is the order of application.

/// Exact substring replacements, applied before any regex tier.
pub const LITERAL_RULES: &[(&str, &str)] = &[
	("(c *C)", "()"),
	("c.Assert(err, IsNil)", "s.NoError(err)"),
	("c.Assert(err, Not(IsNil))", "s.Error(err)"),
	("c.Assert(err, Equals, nil)", "s.NoError(err)"),
	("func Test(t *testing.T) { TestingT(t) }", ""),
	("SetUpSuite(", "SetupSuite("),
	("SetUpTest(", "SetupTest("),
];

/// Tier 1: logging helpers, comments, error matching, length-by-call.
const TIER_DIAGNOSTICS: &[(&str, &str)] = &[
	(r"Commentf\((.+)\)", "fmt.Sprintf($1)"),
	(
		r"c\.Assert\(err, ErrorMatches, (.+)\)",
		"s.ErrorContains(err, $1)",
	),
	(r"c\.Log\((.+)\)", "s.T().Log($1)"),
	(r"c\.Logf\((.+)\)", "s.T().Logf($1)"),
	(r"c\.Errorf\((.+)\)", "s.T().Errorf($1)"),
	(r"c\.Skip\((.+)\)", "s.T().Skip($1)"),
	(r"c\.Assert\((.+), Equals, len\((.+)\)\)", "s.Len($2, $1)"),
];

/// Tier 2: assertions that carry a trailing message argument.
const TIER_WITH_MESSAGE: &[(&str, &str)] = &[
	(r"c\.Assert\(err, IsNil, (.+)\)", "s.NoError(err, $1)"),
	(r"c\.Assert\(len\(([^)]+)\), Equals, (.+)\)", "s.Len($1, $2)"),
	(r"c\.Assert\((.+), Equals, (.+), (.+)\)", "s.Equal($2, $1, $3)"),
];

/// Tier 3: error identity, booleans and nil checks.
const TIER_IDENTITY: &[(&str, &str)] = &[
	(r"c\.Assert\(err, Equals, (.+)\)", "s.ErrorIs(err, $1)"),
	(r"c\.Assert\(err, DeepEquals, (.+)\)", "s.ErrorIs(err, $1)"),
	(r"c\.Assert\((.+), Equals, true\)", "s.True($1)"),
	(r"c\.Assert\((.+), Equals, false\)", "s.False($1)"),
	(r"c\.Assert\((.+), IsNil\)", "s.Nil($1)"),
	(r"c\.Assert\((.+), Not\(IsNil\)\)", "s.NotNil($1)"),
	(r"c\.Assert\((.+), Not\(IsNil\), (.+)\)", "s.NotNil($1, $2)"),
	(r"c\.Assert\((.+), NotNil\)", "s.NotNil($1)"),
];

/// Tier 4: general equality, length and type assertions.
const TIER_GENERAL: &[(&str, &str)] = &[
	(r"c\.Assert\((.+), Equals, (.+)\)", "s.Equal($2, $1)"),
	(r"c\.Assert\((.+), Not\(Equals\), (.+)\)", "s.NotEqual($2, $1)"),
	(r"c\.Assert\((.+), DeepEquals, (.+)\)", "s.Equal($2, $1)"),
	(
		r"c\.Assert\((.+), Not\(DeepEquals\), (.+)\)",
		"s.NotEqual($2, $1)",
	),
	(r"c\.Assert\((.+), HasLen, (.+)\)", "s.Len($1, $2)"),
	(r"c\.Assert\((.+), FitsTypeOf, (.+)\)", "s.IsType($2, $1)"),
];

/// Regex tiers in application order.
pub const REGEX_TIERS: &[(&str, &[(&str, &str)])] = &[
	("diagnostics", TIER_DIAGNOSTICS),
	("with-message", TIER_WITH_MESSAGE),
	("identity", TIER_IDENTITY),
	("general", TIER_GENERAL),
];

/// One output line produced by a structural pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionLine {
	/// The input line with every pattern match replaced by the template.
	Rewrite(&'static str),
	/// A fixed line.
	Literal(&'static str),
}

/// A structural pattern definition: name, regex, and output block.
pub type StructuralDef = (&'static str, &'static str, &'static [ExpansionLine]);

/// Structural patterns in precedence order; the first match wins.
pub const STRUCTURAL_PATTERNS: &[StructuralDef] = &[
	(
		"empty-suite-type",
		r"type (.+Suite) struct\{\}",
		&[
			ExpansionLine::Rewrite("type $1 struct {"),
			ExpansionLine::Literal("\tsuite.Suite"),
			ExpansionLine::Literal("}"),
		],
	),
	(
		"suite-type",
		r"type (.+Suite) struct \{",
		&[
			ExpansionLine::Rewrite("type $1 struct {"),
			ExpansionLine::Literal("\tsuite.Suite"),
		],
	),
	(
		"suite-registration",
		r"var _ = Suite\(&(.+Suite)\{\}\)",
		&[
			ExpansionLine::Rewrite("func Test$1(t *testing.T) {"),
			ExpansionLine::Rewrite("\tsuite.Run(t, new($1))"),
			ExpansionLine::Literal("}"),
		],
	),
];
