//! CLI command wrappers
//!
//! Thin per-subcommand entry points; the add/rm business logic lives in the
//! pipeline module.

pub mod add;
pub mod completions;
pub mod rm;
pub mod version;
