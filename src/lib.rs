//! Filename Manager - edit a batch of filenames following user-defined rules.
//!
//! This library provides the core functionality for filename-manager, including:
//! - Rename rules (prefix, suffix, extension replacement, regex substitution)
//! - Rule validation before any file is touched
//! - A recursive walk that renames every file in a directory tree
//! - Rules file parsing and logging setup for the CLI
//!
//! # Example
//!
//! ```no_run
//! use filename_manager::rename::rename_tree;
//! use filename_manager::rules::RenameRule;
//! use std::path::Path;
//!
//! let rule = RenameRule {
//!     prefix: Some("2024_".to_string()),
//!     old_extension: Some("jpeg".to_string()),
//!     new_extension: Some("jpg".to_string()),
//!     ..Default::default()
//! };
//!
//! rename_tree(Path::new("photos"), &rule).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod rename;
pub mod rules;

pub use error::{RenameError, Result};
pub use rename::{rename_one, rename_tree, walk_and_rename};
pub use rules::{CompiledRule, RenameRule};
