//! Error types for collidoscope operations.

use std::io;

use thiserror::Error;

/// The main error type for collidoscope operations.
#[derive(Debug, Error)]
pub enum CollidoscopeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown figure: {0}")]
    UnknownFigure(String),
}
