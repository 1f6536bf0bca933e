// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ListingError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ListingError>,
    },

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, ListingError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to list directory '{root}': {source}")]
    ListingFailed {
        root: PathBuf,
        #[source]
        source: Box<ListingError>,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// The root could not be opened: missing, not permitted or not a directory.
    #[error("Failed to read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read an entry of '{path}': {source}")]
    EntryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl InfrastructureError {
    /// Kind of the underlying io error, if any.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::DirectoryRead { source, .. } | Self::EntryRead { source, .. } => Some(source.kind()),
            Self::Output { source, .. } => source.as_ref().map(std::io::Error::kind),
        }
    }
}

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(err) }
    }
}

impl From<std::io::Error> for ListingError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ListingError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ListingError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }
}
