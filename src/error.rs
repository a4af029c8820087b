//! Error types for the mdreport library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mdreport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a document.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist.
    ///
    /// This is the only condition checked proactively, before any output
    /// is produced.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// I/O error when reading the input or writing the output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The font files required by the rendering engine could not be loaded.
    #[error("Font loading error: {0}")]
    Font(String),

    /// Error raised by the PDF layout engine.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<genpdf::error::Error> for Error {
    fn from(err: genpdf::error::Error) -> Self {
        Error::Render(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
