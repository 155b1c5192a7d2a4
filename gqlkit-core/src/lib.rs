//! Core utilities and types for the gqlkit code generator.
//!
//! This crate provides the string helpers and file-writing primitives shared
//! by the generator crates and the CLI.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{is_identifier, sanitize_identifier, split_words, to_camel_case, to_pascal_case};
