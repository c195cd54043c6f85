use super::*;
use crate::tests::fixtures::{
    code_samples::CPP_HELLO,
    echo_samples::CPP_ECHO,
    syntax_errors::CPP_BROKEN,
    test_scenarios::{CPP_EXIT_CODE, CPP_LOOP},
};

#[tokio::test]
async fn test_cpp_basic() -> Result<()> {
    test_language_execution(Language::Cpp, CPP_HELLO, "Hello from C++!", default_timeout()).await
}

#[tokio::test]
async fn test_cpp_input() -> Result<()> {
    test_language_echo(Language::Cpp, CPP_ECHO).await
}

#[tokio::test]
async fn test_cpp_compile_error() -> Result<()> {
    test_language_compile_error(Language::Cpp, CPP_BROKEN).await
}

#[tokio::test]
async fn test_cpp_timeout() -> Result<()> {
    test_language_timeout(Language::Cpp, CPP_LOOP).await
}

#[tokio::test]
async fn test_cpp_exit_code_without_stderr() -> Result<()> {
    if toolchain_missing(Language::Cpp) {
        return Ok(());
    }
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("cpp", CPP_EXIT_CODE))
        .await;

    assert!(!result.success);
    assert_eq!(result.output.as_deref(), Some("partial"));
    assert_eq!(result.error.as_deref(), Some("Process exited with code 2"));
    assert_no_leftovers(root.path());
    Ok(())
}
