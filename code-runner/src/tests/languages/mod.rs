use super::utils::{assertions::*, defaults::*};
use crate::{languages::profile, languages::skip_if_not_available, ExecutionRequest, Language, Result};
use tempfile::tempdir;
use tokio::time::Duration;

pub mod cpp;
pub mod javascript;
pub mod python;
pub mod rust;
pub mod typescript;

fn toolchain_missing(language: Language) -> bool {
    skip_if_not_available(&profile(language).required_tools())
}

// Common test utilities for language tests
pub(crate) async fn test_language_execution(
    language: Language,
    code: &str,
    expected: &str,
    timeout: Duration,
) -> Result<()> {
    if toolchain_missing(language) {
        return Ok(());
    }
    let root = tempdir()?;
    let executor = test_executor(root.path());

    let request = ExecutionRequest::new(language.as_str(), code).with_timeout(timeout);
    let result = executor.execute(&request).await;

    assert_output(&result, expected);
    assert_no_leftovers(root.path());
    Ok(())
}

pub(crate) async fn test_language_echo(language: Language, code: &str) -> Result<()> {
    if toolchain_missing(language) {
        return Ok(());
    }
    let root = tempdir()?;
    let executor = test_executor(root.path());

    let request = ExecutionRequest::new(language.as_str(), code)
        .with_input("first line\nsecond line\n")
        .with_timeout(default_timeout());
    let result = executor.execute(&request).await;

    assert_output(&result, "first line\nsecond line");
    assert_no_leftovers(root.path());
    Ok(())
}

pub(crate) async fn test_language_compile_error(language: Language, code: &str) -> Result<()> {
    if toolchain_missing(language) {
        return Ok(());
    }
    let root = tempdir()?;
    let executor = test_executor(root.path());

    let request = ExecutionRequest::new(language.as_str(), code);
    let result = executor.execute(&request).await;

    assert_compilation_error(&result);
    assert_no_leftovers(root.path());
    Ok(())
}

pub(crate) async fn test_language_timeout(language: Language, code: &str) -> Result<()> {
    if toolchain_missing(language) {
        return Ok(());
    }
    let root = tempdir()?;
    let executor = test_executor(root.path());

    let request = ExecutionRequest::new(language.as_str(), code).with_timeout(short_timeout());
    let result = executor.execute(&request).await;

    assert_timed_out(&result);
    assert_no_leftovers(root.path());
    Ok(())
}
