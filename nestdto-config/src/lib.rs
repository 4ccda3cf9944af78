//! Generator option coercion and configuration resolution.
//!
//! Hosts hand over options as loosely-typed key/value pairs where each value
//! may be absent, a single string, or a sequence of strings. This crate turns
//! them into a strict [`ResolvedConfig`].
//!
//! ```
//! use nestdto_config::{RawConfig, RawOption, ResolvedConfig};
//!
//! let raw = RawConfig::new()
//!     .with("reExport", "true")
//!     .with("dtoSuffix", RawOption::from(vec!["Dto", "Ignored"]));
//! let config = ResolvedConfig::resolve(&raw).unwrap();
//! assert!(config.re_export);
//! assert_eq!(config.dto_suffix, "Dto");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod coerce;
mod error;
mod file;
mod naming_style;
mod raw;
mod resolve;

pub use coerce::{option_to_bool, option_to_file_naming_style, option_to_string};
pub use error::{Error, Result};
pub use file::{GeneratorToml, absolute, parse_env_value};
pub use naming_style::NamingStyle;
pub use raw::{RawConfig, RawOption};
pub use resolve::{ResolvedConfig, keys, unrecognized_keys};
