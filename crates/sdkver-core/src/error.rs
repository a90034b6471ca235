//! Error types for SDK version resolution.

use crate::source::VersionSource;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading SDK versions from project files.
///
/// Absent files are never errors; readers report them as "no contribution".
#[derive(Error, Debug)]
pub enum SdkError {
    /// A non-empty string is neither a semantic version nor a constraint.
    #[error(
        "invalid version ({version}): not a semantic version ({version_error}) nor a version constraint ({constraint_error})"
    )]
    InvalidVersion {
        version: String,
        version_error: String,
        constraint_error: String,
    },

    /// A present file could not be decoded in its expected format.
    #[error("Failed to parse {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any file access failure other than "does not exist".
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failure of one source, wrapped by the aggregator.
    #[error("Failed to read SDK versions from {} ({kind}): {error}", kind.relative_path())]
    Source {
        kind: VersionSource,
        #[source]
        error: Box<SdkError>,
    },
}

pub type Result<T> = std::result::Result<T, SdkError>;

impl SdkError {
    /// Creates a decode error for `file` with a plain message.
    pub fn decode(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            file: file.into(),
            source: Box::new(std::io::Error::other(message.into())),
        }
    }

    /// Wraps this error with the source it was raised by.
    pub fn in_source(self, kind: VersionSource) -> Self {
        Self::Source {
            kind,
            error: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping `Source` wrappers.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Source { error, .. } => error.root_cause(),
            other => other,
        }
    }

    /// Returns the source that failed, if the error was wrapped by the aggregator.
    pub fn failed_source(&self) -> Option<VersionSource> {
        match self {
            Self::Source { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
