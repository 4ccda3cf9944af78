//! Test utilities for generation runs.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::sync::Mutex;

use nestdto_config::ResolvedConfig;
use nestdto_core::FileSpec;

use crate::{GenerateRequest, Transform, TransformError};

/// Transformation returning a fixed list of files.
///
/// Remembers the config of the last request it served.
#[derive(Debug, Default)]
pub struct StaticTransform {
    files: Vec<FileSpec>,
    last_config: Mutex<Option<ResolvedConfig>>,
}

impl StaticTransform {
    pub fn new(files: impl IntoIterator<Item = FileSpec>) -> Self {
        Self {
            files: files.into_iter().collect(),
            last_config: Mutex::new(None),
        }
    }

    /// Config of the most recent request, if any.
    pub fn last_config(&self) -> Option<ResolvedConfig> {
        self.last_config
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Transform for StaticTransform {
    fn transform(&self, request: &GenerateRequest<'_>) -> Result<Vec<FileSpec>, TransformError> {
        if let Ok(mut last) = self.last_config.lock() {
            *last = Some(request.config.clone());
        }
        Ok(self.files.clone())
    }
}

/// Transformation that always fails with the given message.
#[derive(Debug)]
pub struct FailingTransform(pub &'static str);

impl Transform for FailingTransform {
    fn transform(&self, _request: &GenerateRequest<'_>) -> Result<Vec<FileSpec>, TransformError> {
        Err(self.0.into())
    }
}
