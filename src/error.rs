//! Error types for the scalagen module commands.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown when the Java runtime cannot be launched.
pub const JAVA_NOT_FOUND_MESSAGE: &str = "Could not execute the java executable, please make sure the JAVA_HOME environment variable is set properly (the java executable should reside at JAVA_HOME/bin/java). ";

/// Errors raised while dispatching a module command
#[derive(Debug, Error)]
pub enum ScalagenError {
    /// Any failure to start the runtime, not only a missing executable
    #[error("{}", JAVA_NOT_FOUND_MESSAGE)]
    JavaNotFound {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Generator exited with status {code}")]
    GeneratorFailed { code: i32 },

    #[error("Generator was terminated before completing")]
    GeneratorTerminated,

    #[error("{0} not found in module resources")]
    AssetNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScalagenError {
    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScalagenError::JavaNotFound { .. } => -1,
            ScalagenError::GeneratorFailed { code } => *code,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScalagenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for ScalagenError {
    fn from(err: config::ConfigError) -> Self {
        ScalagenError::Config(err.to_string())
    }
}
