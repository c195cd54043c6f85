//! # Code Runner
//!
//! Runs practice snippets in JavaScript, TypeScript, Python, C++, Java, Go
//! and Rust as local child processes. Compiled languages go through a build
//! stage first; every run is bounded by a wall-clock timeout and leaves no
//! files behind.

mod config;
mod context;
mod error;
mod executor;
pub mod languages;
mod process;
mod service;
mod toolchain;
mod types;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use context::ExecutionContext;
pub use error::Error;
pub use executor::CodeExecutor;
pub use languages::{LanguageProfile, SourceLayout};
pub use process::CommandLine;
pub use service::CodeExecutionService;
pub use toolchain::Toolchain;
pub use types::{ExecutionRequest, ExecutionResult, Language, DEFAULT_TIMEOUT_MS};

/// Result type for code execution operations
pub type Result<T> = std::result::Result<T, Error>;
