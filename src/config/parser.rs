use crate::error::{RenameError, Result};
use crate::rules::RenameRule;
use std::path::Path;

/// Parse a rules file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<RenameRule> {
	let content = std::fs::read_to_string(path).map_err(|source| RenameError::RulesReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rules_str(&content, path)
}

/// Parse rules from a string (useful for testing).
///
/// Only the TOML shape is checked here. Field validation happens once the
/// file has been merged with the command-line values.
pub fn parse_rules_str(content: &str, path: &Path) -> Result<RenameRule> {
	toml::from_str(content).map_err(|source| RenameError::RulesParseError {
		path: path.to_path_buf(),
		source,
	})
}
