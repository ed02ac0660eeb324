use std::path::PathBuf;

/// Library-level structured errors for filename-manager.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
	#[error("path provided is not a directory: '{}'", .path.display())]
	NotADirectory { path: PathBuf },

	#[error("path provided is not a file: '{}'", .path.display())]
	NotAFile { path: PathBuf },

	#[error("no files found in path: '{}'", .path.display())]
	EmptyTree { path: PathBuf },

	#[error("{field} contains forbidden character: '{value}' (forbidden characters = {forbidden})")]
	InvalidArgument {
		field: &'static str,
		value: String,
		forbidden: &'static str,
	},

	#[error("missing 1 argument: \"{missing}\" (required together with \"{provided}\")")]
	IncompleteRulePair {
		missing: &'static str,
		provided: &'static str,
	},

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("rules produce an invalid file name '{name}' for {}", .path.display())]
	InvalidFileName { path: PathBuf, name: String },

	#[error("Failed to read rules file: {}", .path.display())]
	RulesReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rules file: {}", .path.display())]
	RulesParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("I/O error on {}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using RenameError.
pub type Result<T> = std::result::Result<T, RenameError>;
