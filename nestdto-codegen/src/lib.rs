//! Generation pipeline for the NestJS DTO generator.
//!
//! # Module Organization
//!
//! - [`transform`] - Boundary to the external schema transformation
//! - [`reexport`] - Per-directory barrel synthesis
//! - [`materialize`] - Concurrent file writing
//! - [`manifest`] - Generator manifest
//! - [`testing`] - Test utilities (feature-gated)
//!
//! # Example
//!
//! ```ignore
//! use nestdto_codegen::{CommandTransform, GeneratorOptions, generate};
//!
//! let transform = CommandTransform::new("nestjs-dto-transform");
//! let report = generate(&options, &transform).await?;
//! println!("wrote {} files", report.written.len());
//! ```

mod error;
mod generate;
pub mod manifest;
pub mod materialize;
pub mod reexport;
pub mod transform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use generate::{GenerateReport, GeneratorOptions, Plan, generate, plan};
pub use manifest::GeneratorManifest;
pub use transform::{CommandError, CommandTransform, GenerateRequest, Transform, TransformError};
