use crate::error::{RenameError, Result};
use crate::rules::types::RenameRule;
use regex::Regex;
use std::sync::LazyLock;

/// Characters that may never appear in a rule-supplied name fragment.
pub const FORBIDDEN_CHARACTERS: &str = r#"<>:"/\|?*"#;

/// `old_extension` sentinel that matches every extension.
pub const ALL: &str = "ALL";

impl RenameRule {
	/// Check the rule without touching the filesystem.
	///
	/// Name fragments are checked first, then the extension pair, then the
	/// regex pair. `pattern` is a regex and exempt from the character check.
	pub fn validate(&self) -> Result<()> {
		let fragments = [
			("prefix", &self.prefix),
			("suffix", &self.suffix),
			("old_extension", &self.old_extension),
			("new_extension", &self.new_extension),
			("replacement", &self.replacement),
		];

		for (field, value) in fragments {
			if let Some(value) = value {
				check_fragment(field, value)?;
			}
		}

		check_pair(
			("old_extension", self.old_extension.is_some()),
			("new_extension", self.new_extension.is_some()),
		)?;
		check_pair(
			("pattern", self.pattern.is_some()),
			("replacement", self.replacement.is_some()),
		)?;

		Ok(())
	}
}

fn check_fragment(field: &'static str, value: &str) -> Result<()> {
	let bad = !is_printable(value) || value.contains(|c: char| FORBIDDEN_CHARACTERS.contains(c));

	if bad {
		return Err(RenameError::InvalidArgument {
			field,
			value: value.to_string(),
			forbidden: FORBIDDEN_CHARACTERS,
		});
	}

	Ok(())
}

/// Both halves of a rule pair must be present or both absent.
fn check_pair(first: (&'static str, bool), second: (&'static str, bool)) -> Result<()> {
	match (first.1, second.1) {
		(true, false) => Err(RenameError::IncompleteRulePair {
			missing: second.0,
			provided: first.0,
		}),
		(false, true) => Err(RenameError::IncompleteRulePair {
			missing: first.0,
			provided: second.0,
		}),
		_ => Ok(()),
	}
}

/// Unicode "Other" and "Separator" categories, except the ASCII space.
///
/// Covers control, format, private-use, surrogate and unassigned code points
/// plus every separator but ' '.
static NON_PRINTABLE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"[\p{C}\p{Z}--\x20]").expect("Invalid non-printable regex"));

/// Printable means visible glyphs plus the ASCII space.
pub fn is_printable(value: &str) -> bool {
	!NON_PRINTABLE.is_match(value)
}
