use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use filename_manager::RenameError;
use filename_manager::config::parse_rules_file;
use filename_manager::logging::setup_logging;
use filename_manager::rename::rename_tree;
use filename_manager::rules::RenameRule;

#[derive(Parser)]
#[command(name = "filename-manager")]
#[command(
	author,
	version,
	about = "Edit a batch of given filenames following user-defined rules"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// The path to the directory of files to modify
	path: PathBuf,

	/// What to put before filenames
	#[arg(short, long)]
	prefix: Option<String>,

	/// What to put after filenames (but before the extension)
	#[arg(short, long)]
	suffix: Option<String>,

	/// Extension to be replaced (ALL matches every extension)
	#[arg(long, value_name = "EXT")]
	extold: Option<String>,

	/// Extension to replace with
	#[arg(long, value_name = "EXT")]
	extnew: Option<String>,

	/// Regular expression to look for in filenames
	#[arg(short, long)]
	regex: Option<String>,

	/// Literal text that replaces every regex match
	#[arg(long)]
	sub: Option<String>,

	/// TOML file with rule fields; command-line flags take precedence
	#[arg(long, value_name = "FILE")]
	rules: Option<PathBuf>,

	/// Increase logging verbosity (-v for INFO, -vv for DEBUG)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,

	/// File where logs are appended (records DEBUG and above)
	#[arg(long, value_name = "FILE")]
	log_file: Option<PathBuf>,
}

impl Cli {
	fn flag_rule(&self) -> RenameRule {
		RenameRule {
			prefix: self.prefix.clone(),
			suffix: self.suffix.clone(),
			old_extension: self.extold.clone(),
			new_extension: self.extnew.clone(),
			pattern: self.regex.clone(),
			replacement: self.sub.clone(),
		}
	}
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	setup_logging(cli.verbose, cli.log_file.as_deref());
	tracing::debug!("Detailed debug information enabled.");

	match run(&cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			if let Some(hint) = e.downcast_ref::<RenameError>().and_then(hint_for) {
				eprintln!("hint: {hint}");
			}
			ExitCode::FAILURE
		}
	}
}

fn run(cli: &Cli) -> Result<ExitCode> {
	let rule = match cli.rules {
		Some(ref rules_path) => parse_rules_file(rules_path)?.merged_with(cli.flag_rule()),
		None => cli.flag_rule(),
	};

	if rule.is_noop() {
		tracing::warn!("No rules given; filenames will be left unchanged.");
	}

	tracing::info!("Starting file processing...");
	rename_tree(&cli.path, &rule)
		.with_context(|| format!("Failed to rename files in {}", cli.path.display()))?;
	tracing::info!("File processing complete.");

	Ok(ExitCode::SUCCESS)
}

/// Follow-up advice for the error kinds a user can fix directly.
fn hint_for(error: &RenameError) -> Option<&'static str> {
	match error {
		RenameError::NotADirectory { .. } => {
			Some("Please ensure the directory exists and you have read permissions.")
		}
		RenameError::EmptyTree { .. } => {
			Some("The directory tree contains no files; nothing was renamed.")
		}
		RenameError::InvalidArgument { .. }
		| RenameError::IncompleteRulePair { .. }
		| RenameError::InvalidRegex { .. }
		| RenameError::InvalidFileName { .. } => {
			Some("Please check the contents of your rules file or command-line arguments.")
		}
		RenameError::Io { .. } => Some("Some files may already have been renamed."),
		_ => None,
	}
}
