use thiserror::Error;

/// Failures the engine classifies before they are folded into an
/// [`ExecutionResult`](crate::ExecutionResult).
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to write source file: {0}")]
    Materialization(#[source] std::io::Error),

    #[error("Compilation error:\n{0}")]
    Compilation(String),

    #[error("Execution timed out")]
    Timeout,

    #[error("Failed to execute: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
