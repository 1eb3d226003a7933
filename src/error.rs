use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input catalog missing or unreadable.
    NotFound,
    /// Input is not well-formed JSON or not an array of objects.
    Parse,
    /// A record's `MAG` is missing or not numeric.
    Field,
    /// Output destination could not be written.
    Write,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Parse => "parse",
            ErrorKind::Field => "field",
            ErrorKind::Write => "write",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Every way a catalog filtering run can fail. None of them are recovered.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed catalog {path:?}: {detail}")]
    Parse { path: PathBuf, detail: String },

    #[error("record {index}: {source}")]
    Field {
        index: usize,
        #[source]
        source: MagnitudeError,
    },

    #[error("cannot write catalog {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            CatalogError::Parse { .. } => ErrorKind::Parse,
            CatalogError::Field { .. } => ErrorKind::Field,
            CatalogError::Write { .. } => ErrorKind::Write,
        }
    }
}

/// Why a single record's magnitude could not be read.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MagnitudeError {
    #[error("missing 'MAG' field")]
    Missing,

    #[error("'MAG' value {0:?} is not a number")]
    NotNumeric(String),

    #[error("'MAG' has unsupported JSON type {0}")]
    WrongType(&'static str),
}
