//! Rename rules for filename-manager.
//!
//! This module handles:
//! - The `RenameRule` value object and field-by-field merging
//! - Validation of name fragments and rule pairs
//! - Compiling a rule and applying it to a single file name

pub mod transform;
pub mod types;
pub mod validate;

pub use transform::{CompiledRule, ExtensionRewrite, Substitution, split_name};
pub use types::RenameRule;
pub use validate::{ALL, FORBIDDEN_CHARACTERS, is_printable};
