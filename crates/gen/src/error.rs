//! Generator error definitions.
//!
//! Two error kinds exist: I/O failures on the output artifacts (fatal, the
//! path is carried for the diagnostic) and operand-list contract violations
//! caught when a table is built. There is no retry logic and no
//! partial-failure recovery; once a suite starts, every case is generated.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while generating test-vector artifacts.
#[derive(Debug, Error)]
pub enum GenError {
    /// The output directory could not be created.
    #[error("cannot create output directory `{path}`: {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An artifact file could not be opened for writing.
    #[error("cannot open `{path}` for writing: {source}")]
    OpenArtifact {
        /// Artifact path that could not be opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A write to an already-open artifact failed.
    #[error("cannot write to `{path}`: {source}")]
    WriteArtifact {
        /// Artifact path the write was addressed to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An operand list has no entries before the terminator.
    #[error("operand list has no entries before the 0x8000 terminator")]
    EmptyOperandList,

    /// An operand list is missing the terminator entirely.
    #[error("operand list is missing the 0x8000 terminator")]
    MissingTerminator,
}

impl GenError {
    /// Wraps an I/O error from creating the output directory.
    pub fn create_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Wraps an I/O error from opening an artifact.
    pub fn open_artifact(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenArtifact {
            path: path.into(),
            source,
        }
    }

    /// Wraps an I/O error from writing to an artifact.
    pub fn write_artifact(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteArtifact {
            path: path.into(),
            source,
        }
    }
}
