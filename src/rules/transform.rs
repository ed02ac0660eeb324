use crate::error::{RenameError, Result};
use crate::rules::types::RenameRule;
use crate::rules::validate::ALL;
use regex::{NoExpand, Regex};
use std::path::Path;

/// Extension directive with both sides normalized (no leading dots).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRewrite {
	/// Extension to match, or `ALL`.
	pub from: String,

	/// Extension to substitute.
	pub to: String,
}

impl ExtensionRewrite {
	fn matches(&self, ext: Option<&str>) -> bool {
		self.from == ALL || ext == Some(self.from.as_str())
	}
}

/// Regex substitution over a whole file name.
#[derive(Debug)]
pub struct Substitution {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement string.
	pub replacement: String,
}

impl Substitution {
	/// Replace all non-overlapping matches. The replacement is literal text.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, NoExpand(&self.replacement))
			.into_owned()
	}
}

/// A validated rule ready to transform names.
///
/// Only constructed through [`RenameRule::compile`], so every field here
/// has passed validation.
#[derive(Debug)]
pub struct CompiledRule {
	/// Original rule.
	pub rule: RenameRule,

	pub prefix: Option<String>,

	pub suffix: Option<String>,

	/// Extension rewrite, if both extension fields were given and non-empty.
	pub extension: Option<ExtensionRewrite>,

	/// Compiled regex substitution.
	pub substitution: Option<Substitution>,
}

impl RenameRule {
	/// Validate this rule and compile it for use in a walk.
	pub fn compile(&self) -> Result<CompiledRule> {
		self.validate()?;

		let extension = match (&self.old_extension, &self.new_extension) {
			(Some(from), Some(to)) => {
				let from = from.trim_start_matches('.');
				let to = to.trim_start_matches('.');
				(!from.is_empty() && !to.is_empty()).then(|| ExtensionRewrite {
					from: from.to_string(),
					to: to.to_string(),
				})
			}
			_ => None,
		};

		let substitution = match (&self.pattern, &self.replacement) {
			(Some(pattern), Some(replacement)) => Some(Substitution {
				pattern: compile_regex(pattern)?,
				replacement: replacement.clone(),
			}),
			_ => None,
		};

		Ok(CompiledRule {
			rule: self.clone(),
			prefix: self.prefix.clone().filter(|p| !p.is_empty()),
			suffix: self.suffix.clone().filter(|s| !s.is_empty()),
			extension,
			substitution,
		})
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| RenameError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

impl CompiledRule {
	/// Compute the new file name for `name`.
	///
	/// Steps run in a fixed order, each on the previous step's output:
	/// extension replacement, regex substitution, prefix, suffix.
	pub fn transform(&self, name: &str) -> String {
		let mut current = name.to_string();

		if let Some(ref extension) = self.extension {
			let (stem, ext) = split_name(&current);
			if extension.matches(ext) {
				current = format!("{}.{}", stem, extension.to);
			}
		}

		if let Some(ref substitution) = self.substitution {
			current = substitution.apply(&current);
		}

		if let Some(ref prefix) = self.prefix {
			current = format!("{}{}", prefix, current);
		}

		if let Some(ref suffix) = self.suffix {
			let (stem, ext) = split_name(&current);
			current = match ext {
				Some(ext) => format!("{}{}.{}", stem, suffix, ext),
				None => format!("{}{}", stem, suffix),
			};
		}

		current
	}
}

/// Split a file name into stem and extension (without the dot).
///
/// `archive.tar.gz` is (`archive.tar`, `gz`). `.bashrc` has no extension,
/// and neither does `notes.`: a trailing dot stays part of the stem.
pub fn split_name(name: &str) -> (&str, Option<&str>) {
	let path = Path::new(name);
	let stem = path.file_stem().and_then(|s| s.to_str());
	let ext = path.extension().and_then(|e| e.to_str());

	match (stem, ext) {
		(Some(stem), Some(ext)) if !ext.is_empty() => (stem, Some(ext)),
		_ => (name, None),
	}
}
