use super::*;
use crate::tests::fixtures::{
    code_samples::RUST_HELLO, echo_samples::RUST_ECHO, syntax_errors::RUST_BROKEN,
    test_scenarios::RUST_SLEEP,
};

#[tokio::test]
async fn test_rust_basic() -> Result<()> {
    test_language_execution(Language::Rust, RUST_HELLO, "Hello from Rust!", default_timeout())
        .await
}

#[tokio::test]
async fn test_rust_input() -> Result<()> {
    test_language_echo(Language::Rust, RUST_ECHO).await
}

#[tokio::test]
async fn test_rust_compile_error() -> Result<()> {
    test_language_compile_error(Language::Rust, RUST_BROKEN).await
}

#[tokio::test]
async fn test_rust_timeout() -> Result<()> {
    test_language_timeout(Language::Rust, RUST_SLEEP).await
}
