#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn fm_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("filename-manager").unwrap()
}

/// Create a tree of files with a few extensions across nested directories.
fn make_tree(root: &Path) {
	let files = [
		"subdir1/alpha.txt",
		"subdir1/1. beta.md",
		"subdir1/gamma.rs",
		"subdir2/delta.txt",
		"subdir2/deeper/epsilon.json",
	];
	for file in files {
		let path = root.join(file);
		fs::create_dir_all(path.parent().unwrap()).unwrap();
		fs::write(&path, "").unwrap();
	}
	fs::create_dir_all(root.join("subdir3")).unwrap();
}

fn count_files(dir: &Path) -> usize {
	fs::read_dir(dir)
		.unwrap()
		.map(|entry| entry.unwrap().path())
		.map(|path| if path.is_dir() { count_files(&path) } else { 1 })
		.sum()
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	fm_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Edit a batch of given filenames"));
}

#[test]
fn test_version_flag() {
	fm_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("filename-manager"));
}

#[test]
fn test_no_args_shows_help() {
	fm_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// Rename tests
// ============================================================================

#[test]
fn test_prefix() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--prefix", "pre_"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/pre_alpha.txt").is_file());
	assert!(temp_dir.path().join("subdir2/deeper/pre_epsilon.json").is_file());
	assert_eq!(count_files(temp_dir.path()), 5);
}

#[test]
fn test_suffix_short_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-s", "_SUF"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/alpha_SUF.txt").is_file());
	assert!(temp_dir.path().join("subdir1/1. beta_SUF.md").is_file());
}

#[test]
fn test_all_extensions() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--extold", "ALL", "--extnew", "md"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/alpha.md").is_file());
	assert!(temp_dir.path().join("subdir1/gamma.md").is_file());
	assert!(temp_dir.path().join("subdir2/deeper/epsilon.md").is_file());
	assert_eq!(count_files(temp_dir.path()), 5);
}

#[test]
fn test_certain_extensions() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--extold", "txt", "--extnew", "md"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/alpha.md").is_file());
	assert!(temp_dir.path().join("subdir2/delta.md").is_file());
	assert!(temp_dir.path().join("subdir1/gamma.rs").is_file());
	assert!(temp_dir.path().join("subdir2/deeper/epsilon.json").is_file());
}

#[test]
fn test_prefix_suffix_all_extensions() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-p", "PREFIX", "-s", "SUFFIX", "--extold", "ALL", "--extnew", "EXT"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/PREFIXalphaSUFFIX.EXT").is_file());
	assert!(temp_dir.path().join("subdir1/PREFIX1. betaSUFFIX.EXT").is_file());
}

#[test]
fn test_regex_sub() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-r", r"^\d+\.? ?", "--sub", ""])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/beta.md").is_file());
	assert!(!temp_dir.path().join("subdir1/1. beta.md").exists());
}

#[test]
fn test_regex_sub_dollar_is_literal() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-r", "alpha", "--sub", "$x"])
		.assert()
		.success();

	assert!(temp_dir.path().join("subdir1/$x.txt").is_file());
	assert!(!temp_dir.path().join("subdir1/.txt").exists());
}

#[test]
fn test_single_file_path() {
	let temp_dir = tempfile::tempdir().unwrap();
	let file = temp_dir.path().join("one.txt");
	fs::write(&file, "").unwrap();

	fm_cmd().arg(&file).args(["-p", "x_"]).assert().success();

	assert!(temp_dir.path().join("x_one.txt").is_file());
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn test_bad_path() {
	let temp_dir = tempfile::tempdir().unwrap();

	fm_cmd()
		.arg(temp_dir.path().join("a"))
		.assert()
		.failure()
		.stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_empty_tree() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::create_dir_all(temp_dir.path().join("a/b")).unwrap();
	fs::create_dir_all(temp_dir.path().join("c")).unwrap();

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-p", "pre_"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("no files found"));
}

#[test]
fn test_bad_prefix() {
	for ch in ['<', '>', ':', '"', '/', '\\', '|', '?', '*'] {
		let temp_dir = tempfile::tempdir().unwrap();
		make_tree(temp_dir.path());

		fm_cmd()
			.arg(temp_dir.path())
			.args(["--prefix", &format!("pre{ch}")])
			.assert()
			.failure()
			.stderr(predicate::str::contains("forbidden character"));

		assert!(temp_dir.path().join("subdir1/alpha.txt").is_file());
	}
}

#[test]
fn test_bad_extension_with_good_prefix_and_suffix() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["-p", "PREFIX", "-s", "SUFFIX", "--extold", "ALL", "--extnew", "EXT*"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("new_extension"));

	assert!(temp_dir.path().join("subdir1/alpha.txt").is_file());
}

#[test]
fn test_oldext_no_newext() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--extold", "md"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("missing 1 argument"))
		.stderr(predicate::str::contains("new_extension"));
}

#[test]
fn test_regex_no_sub() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--regex", "a"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("replacement"));
}

#[test]
fn test_invalid_regex() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.arg(temp_dir.path())
		.args(["--regex", "[invalid", "--sub", "x"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid regex"));
}

// ============================================================================
// Rules file tests
// ============================================================================

#[test]
fn test_rules_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let tree = temp_dir.path().join("tree");
	make_tree(&tree);
	let rules_path = temp_dir.path().join("rules.toml");

	fs::write(
		&rules_path,
		r#"
suffix = "_v2"
old_extension = "txt"
new_extension = "md"
"#,
	)
	.unwrap();

	fm_cmd()
		.arg(&tree)
		.arg("--rules")
		.arg(&rules_path)
		.assert()
		.success();

	assert!(tree.join("subdir1/alpha_v2.md").is_file());
	assert!(tree.join("subdir1/gamma_v2.rs").is_file());
}

#[test]
fn test_flags_override_rules_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let tree = temp_dir.path().join("tree");
	make_tree(&tree);
	let rules_path = temp_dir.path().join("rules.toml");

	fs::write(&rules_path, "prefix = \"file_\"\nsuffix = \"_file\"\n").unwrap();

	fm_cmd()
		.arg(&tree)
		.arg("--rules")
		.arg(&rules_path)
		.args(["--prefix", "cli_"])
		.assert()
		.success();

	assert!(tree.join("subdir2/cli_delta_file.txt").is_file());
}

#[test]
fn test_invalid_rules_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let tree = temp_dir.path().join("tree");
	make_tree(&tree);
	let rules_path = temp_dir.path().join("rules.toml");

	fs::write(&rules_path, "invalid toml [[[").unwrap();

	fm_cmd()
		.arg(&tree)
		.arg("--rules")
		.arg(&rules_path)
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to parse rules file"));
}

// ============================================================================
// Logging tests
// ============================================================================

#[test]
fn test_verbose_logs_progress() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.env_remove("RUST_LOG")
		.arg(temp_dir.path())
		.args(["-v", "-p", "pre_"])
		.assert()
		.success()
		.stderr(predicate::str::contains("File processing complete"));
}

#[test]
fn test_quiet_by_default() {
	let temp_dir = tempfile::tempdir().unwrap();
	make_tree(temp_dir.path());

	fm_cmd()
		.env_remove("RUST_LOG")
		.arg(temp_dir.path())
		.args(["-p", "pre_"])
		.assert()
		.success()
		.stderr(predicate::str::is_empty());
}

#[test]
fn test_log_file_records_renames() {
	let temp_dir = tempfile::tempdir().unwrap();
	let tree = temp_dir.path().join("tree");
	make_tree(&tree);
	let log_path = temp_dir.path().join("fm.log");

	fm_cmd()
		.env_remove("RUST_LOG")
		.arg(&tree)
		.args(["-p", "pre_"])
		.arg("--log-file")
		.arg(&log_path)
		.assert()
		.success();

	let log = fs::read_to_string(&log_path).unwrap();
	assert!(log.contains("renamed file"));
	assert!(log.contains("pre_alpha.txt"));
}
