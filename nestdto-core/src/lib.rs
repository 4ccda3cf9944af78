//! Core utilities and types for the NestJS DTO generator.
//!
//! This crate provides the file specification type shared by the
//! configuration, generation and materialization layers.

mod file;
mod utils;

// File operations
pub use file::{FileSpec, write_file};
// Value utilities
pub use utils::toml_scalar_to_string;
