//! Boundary to the schema-to-source transformation.
//!
//! The transformation itself lives outside this crate. It receives a
//! [`GenerateRequest`] and answers with the files to write, in order.

use std::{
    ffi::OsString,
    io::{self, Write},
    path::Path,
    process::{Command, ExitStatus, Stdio},
    thread::{self, JoinHandle},
};

use nestdto_config::ResolvedConfig;
use nestdto_core::FileSpec;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Error type produced by transformations.
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

/// Input handed to a transformation: `{ output, dmmf, ...config }`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateRequest<'a> {
    /// Absolute output directory.
    pub output: &'a Path,
    /// The parsed schema model, passed through untouched.
    pub dmmf: &'a serde_json::Value,
    #[serde(flatten)]
    pub config: &'a ResolvedConfig,
}

/// A schema-to-source transformation.
pub trait Transform {
    /// Produce the generated files for a request.
    fn transform(&self, request: &GenerateRequest<'_>) -> Result<Vec<FileSpec>, TransformError>;
}

/// Transformation backed by an external program.
///
/// The request is written to the program's stdin as JSON. The program must
/// print a JSON array of `{ "fileName", "content" }` objects to stdout and
/// exit successfully.
#[derive(Debug, Clone)]
pub struct CommandTransform {
    program: OsString,
    args: Vec<OsString>,
}

/// Failure of an external transformation program.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to run '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to exchange data with '{program}'")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid output from '{program}'")]
    Output {
        program: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode generate request")]
    Request(#[source] serde_json::Error),
}

impl CommandTransform {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add arguments passed to the program.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn run(&self, request: &GenerateRequest<'_>) -> Result<Vec<FileSpec>, CommandError> {
        let program = self.program_name();
        let payload = serde_json::to_vec(request).map_err(CommandError::Request)?;

        debug!(program = %program, bytes = payload.len(), "invoking transformation");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CommandError::Spawn {
                program: program.clone(),
                source,
            })?;

        // The child may fill stdout before it drains stdin.
        let stdin = child.stdin.take();
        let writer = thread::spawn(move || match stdin {
            Some(mut stdin) => stdin.write_all(&payload),
            None => Ok(()),
        });

        let output = child.wait_with_output().map_err(|source| CommandError::Io {
            program: program.clone(),
            source,
        })?;

        // A child may exit without reading its input; its status wins.
        let write_result = join_writer(writer);

        if !output.status.success() {
            return Err(CommandError::Exit {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if let Err(source) = write_result
            && source.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(CommandError::Io { program, source });
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|source| CommandError::Output { program, source })
    }
}

fn join_writer(writer: JoinHandle<io::Result<()>>) -> io::Result<()> {
    writer
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")))
}

impl Transform for CommandTransform {
    fn transform(&self, request: &GenerateRequest<'_>) -> Result<Vec<FileSpec>, TransformError> {
        Ok(self.run(request)?)
    }
}
