//! Rules file loading for filename-manager.
//!
//! A rules file is a flat TOML table with the same fields as the CLI flags.
//! Values given on the command line override the file field by field.

pub mod parser;

pub use parser::{parse_rules_file, parse_rules_str};
