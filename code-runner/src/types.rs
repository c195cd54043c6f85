use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// Run timeout applied when a request does not carry one.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Cpp,
    Java,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Cpp,
        Language::Java,
        Language::Go,
        Language::Rust,
    ];

    /// Identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Go => "go",
            Language::Rust => "rust",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

/// Code execution request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    /// Source code to execute
    pub code: String,
    /// Language identifier, resolved against the profile table at execution time
    pub language: String,
    /// Payload written to the program's stdin
    #[serde(default)]
    pub input: String,
    /// Wall-clock limit for the run stage
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ExecutionRequest {
    pub fn new(language: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: language.into(),
            input: String::new(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Execution result
///
/// `success == true` always carries `output`; `success == false` always
/// carries `error` and may still carry the stdout produced before failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    pub fn success(output: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
            execution_time_ms: Some(elapsed.as_millis() as u64),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
            execution_time_ms: None,
        }
    }

    /// A run that finished on its own but reported failure.
    pub fn runtime_failure(output: String, error: String, elapsed: Duration) -> Self {
        Self {
            success: false,
            output: Some(output),
            error: Some(error),
            execution_time_ms: Some(elapsed.as_millis() as u64),
        }
    }
}

impl From<Error> for ExecutionResult {
    fn from(err: Error) -> Self {
        ExecutionResult::failure(err.to_string())
    }
}
