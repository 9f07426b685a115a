//! Error types for pilot.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PilotError {
    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Launch error: {0}")]
    Launch(String),

    #[error("Password error: {0}")]
    Password(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
