use serde::Deserialize;

/// A set of rename directives applied to every file in a walk.
///
/// Every field is optional. A rule with nothing set is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct RenameRule {
	/// Text prepended to the whole file name.
	pub prefix: Option<String>,

	/// Text inserted between the stem and the extension.
	pub suffix: Option<String>,

	/// Extension to match (`ALL` matches every extension).
	/// Must be given together with `new_extension`.
	pub old_extension: Option<String>,

	/// Extension substituted in for matching files.
	pub new_extension: Option<String>,

	/// Regex applied to the full file name.
	/// Must be given together with `replacement`.
	pub pattern: Option<String>,

	/// Literal replacement for every match of `pattern`.
	pub replacement: Option<String>,
}

impl RenameRule {
	/// Whether this rule leaves every name untouched.
	pub fn is_noop(&self) -> bool {
		*self == RenameRule::default()
	}

	/// Overlay `overrides` on top of this rule, field by field.
	///
	/// Fields set in `overrides` win; unset fields fall back to `self`.
	pub fn merged_with(self, overrides: RenameRule) -> RenameRule {
		RenameRule {
			prefix: overrides.prefix.or(self.prefix),
			suffix: overrides.suffix.or(self.suffix),
			old_extension: overrides.old_extension.or(self.old_extension),
			new_extension: overrides.new_extension.or(self.new_extension),
			pattern: overrides.pattern.or(self.pattern),
			replacement: overrides.replacement.or(self.replacement),
		}
	}
}
