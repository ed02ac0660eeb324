//! Recursive rename engine for filename-manager.
//!
//! This module handles:
//! - Checking the root path and validating the rule before any rename
//! - Depth-first traversal that renames files and never directories
//! - Signalling a tree that contains no files at all

pub mod walker;

pub use walker::{WalkStats, rename_one, rename_tree, walk_and_rename};
