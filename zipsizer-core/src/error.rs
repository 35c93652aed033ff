use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Provided path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Why a single file could not be read for sampling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadCause {
    NotFound,
    PermissionDenied,
    IsDirectory,
    Other(ErrorKind),
}

impl ReadCause {
    pub fn from_io(e: &std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::NotFound => ReadCause::NotFound,
            ErrorKind::PermissionDenied => ReadCause::PermissionDenied,
            ErrorKind::IsADirectory => ReadCause::IsDirectory,
            other => ReadCause::Other(other),
        }
    }
}

impl std::fmt::Display for ReadCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadCause::NotFound => f.write_str("file does not exist"),
            ReadCause::PermissionDenied => f.write_str("insufficient permissions"),
            ReadCause::IsDirectory => f.write_str("is a directory, not a file"),
            ReadCause::Other(kind) => write!(f, "OS error ({kind})"),
        }
    }
}

/// A recoverable, per-file read failure. The sampler logs these and moves on.
#[derive(Error, Debug)]
#[error("unable to read '{}': {cause}", .path.display())]
pub struct ReadRangeError {
    pub path: PathBuf,
    pub cause: ReadCause,
    #[source]
    pub source: std::io::Error,
}

impl ReadRangeError {
    pub fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            cause: ReadCause::from_io(&source),
            source,
        }
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SizerError>;
