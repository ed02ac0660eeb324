use crate::error::{RenameError, Result};
use crate::rules::{CompiledRule, RenameRule};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters collected during a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
	/// Files encountered anywhere in the tree.
	pub files_seen: usize,

	/// Files whose name actually changed.
	pub files_renamed: usize,
}

/// Rename every file under `root` with `rule`.
///
/// Returns whether any file was found and processed. The root kind is
/// checked before the rule, so a missing root reports `NotADirectory` even
/// when the rule is also invalid. The rule is validated once, before the
/// first rename.
pub fn rename_tree(root: &Path, rule: &RenameRule) -> Result<bool> {
	if !root.is_file() && !root.is_dir() {
		return Err(RenameError::NotADirectory {
			path: absolute(root),
		});
	}

	let compiled = rule.compile()?;
	let stats = walk_and_rename(root, &compiled)?;

	Ok(stats.files_seen > 0)
}

/// Validate `rule` and apply it to the single file at `path`.
pub fn rename_one(path: &Path, rule: &RenameRule) -> Result<()> {
	let compiled = rule.compile()?;

	if !path.is_file() {
		return Err(RenameError::NotAFile {
			path: absolute(path),
		});
	}

	rename_file(path, &compiled)?;
	Ok(())
}

/// Walk `root` depth-first, renaming every file with an already compiled rule.
///
/// - A file root is renamed directly.
/// - Directories are never renamed, and symlinked directories are not followed.
/// - If the whole tree holds no files at all, `EmptyTree` names the root.
///   Empty subdirectories inside a non-empty tree are fine.
///
/// Files renamed before an error stay renamed.
pub fn walk_and_rename(root: &Path, rule: &CompiledRule) -> Result<WalkStats> {
	if root.is_file() {
		let renamed = rename_file(root, rule)?;
		return Ok(WalkStats {
			files_seen: 1,
			files_renamed: usize::from(renamed),
		});
	}

	if !root.is_dir() {
		return Err(RenameError::NotADirectory {
			path: absolute(root),
		});
	}

	info!(root = %root.display(), rule = ?rule.rule, "starting rename walk");

	let mut stats = WalkStats::default();
	walk_dir(root, rule, &mut stats)?;

	if stats.files_seen == 0 {
		return Err(RenameError::EmptyTree {
			path: absolute(root),
		});
	}

	info!(
		root = %root.display(),
		files_seen = stats.files_seen,
		files_renamed = stats.files_renamed,
		"rename walk complete"
	);

	Ok(stats)
}

fn walk_dir(dir: &Path, rule: &CompiledRule, stats: &mut WalkStats) -> Result<()> {
	// Collect the listing up front so renamed files are not seen twice.
	let entries = fs::read_dir(dir)
		.and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
		.map_err(|source| RenameError::Io {
			path: dir.to_path_buf(),
			source,
		})?;

	for entry in entries {
		let path = entry.path();
		let file_type = entry.file_type().map_err(|source| RenameError::Io {
			path: path.clone(),
			source,
		})?;

		if file_type.is_dir() {
			walk_dir(&path, rule, stats)?;
		} else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
			stats.files_seen += 1;
			if rename_file(&path, rule)? {
				stats.files_renamed += 1;
			}
		} else {
			debug!(path = %path.display(), "skipping entry that is not a regular file");
		}
	}

	Ok(())
}

/// Apply `rule` to one file. Returns whether the file was renamed.
fn rename_file(path: &Path, rule: &CompiledRule) -> Result<bool> {
	let Some(file_name) = path.file_name() else {
		return Err(RenameError::NotAFile {
			path: absolute(path),
		});
	};

	let Some(name) = file_name.to_str() else {
		warn!(path = %path.display(), "skipping file with a non UTF-8 name");
		return Ok(false);
	};

	let new_name = rule.transform(name);
	if new_name == name {
		return Ok(false);
	}

	if new_name.is_empty()
		|| new_name == "."
		|| new_name == ".."
		|| new_name.contains(std::path::is_separator)
	{
		return Err(RenameError::InvalidFileName {
			path: path.to_path_buf(),
			name: new_name,
		});
	}

	let new_path = path.with_file_name(&new_name);
	fs::rename(path, &new_path).map_err(|source| RenameError::Io {
		path: path.to_path_buf(),
		source,
	})?;

	debug!(from = %path.display(), to = %new_path.display(), "renamed file");
	Ok(true)
}

fn absolute(path: &Path) -> PathBuf {
	std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
