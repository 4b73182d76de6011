use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Failed to open file: {1}")]
    FailedOpenFile(#[source] Arc<std::io::Error>, String),

    #[error("Failed to read file: {1}")]
    FailedReadFile(#[source] Arc<std::io::Error>, String),

    #[error("Failed to create file: {1}")]
    FailedCreateFile(#[source] Arc<std::io::Error>, String),

    #[error("Failed to write file: {1}")]
    FailedWriteFile(#[source] Arc<std::io::Error>, String),

    #[error("Failed to write")]
    IO(#[source] Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IO(Arc::new(err))
    }
}

/// Errors of a revision query. These never abort a run, the revision falls back to the sentinel.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to launch {0}")]
    Launch(String, #[source] std::io::Error),
}

/// The result type used in this crate.
pub type Result<T> = std::result::Result<T, Error>;
