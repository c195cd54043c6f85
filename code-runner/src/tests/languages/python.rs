use super::*;
use crate::tests::fixtures::{code_samples::PYTHON_HELLO, echo_samples::PYTHON_ECHO, test_scenarios::*};

#[tokio::test]
async fn test_python_basic() -> Result<()> {
    test_language_execution(Language::Python, PYTHON_HELLO, "Hello from Python!", default_timeout())
        .await
}

#[tokio::test]
async fn test_python_input() -> Result<()> {
    test_language_echo(Language::Python, PYTHON_ECHO).await
}

#[tokio::test]
async fn test_python_timeout() -> Result<()> {
    test_language_timeout(Language::Python, PYTHON_SLEEP).await
}

#[tokio::test]
async fn test_python_input_is_not_wrapped() -> Result<()> {
    let code = "def add(a, b):\n    return a + b\nprint(input())";
    if toolchain_missing(Language::Python) {
        return Ok(());
    }
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("python", code).with_input("a = 2, b = 3"))
        .await;

    assert_output(&result, "a = 2, b = 3");
    Ok(())
}

#[tokio::test]
async fn test_python_partial_output_on_failure() -> Result<()> {
    if toolchain_missing(Language::Python) {
        return Ok(());
    }
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("python", PYTHON_PARTIAL_OUTPUT))
        .await;

    assert!(!result.success);
    assert_eq!(result.output.as_deref(), Some("partial"));
    assert_eq!(result.error.as_deref(), Some("Process exited with code 3"));
    assert!(result.execution_time_ms.is_some());
    assert_no_leftovers(root.path());
    Ok(())
}

#[tokio::test]
async fn test_python_stderr_becomes_error() -> Result<()> {
    if toolchain_missing(Language::Python) {
        return Ok(());
    }
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("python", PYTHON_RAISES))
        .await;

    assert!(!result.success);
    assert_eq!(result.output.as_deref(), Some("before"));
    let error = result.error.unwrap_or_default();
    assert!(error.starts_with("Traceback"), "unexpected error: {}", error);
    assert!(error.ends_with("ValueError: boom"));
    Ok(())
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_python_timeout_leaves_no_process_behind() -> Result<()> {
    if toolchain_missing(Language::Python) {
        return Ok(());
    }
    let root = tempdir()?;
    let pid_file = root.path().join("pid.txt");
    let code = format!(
        "import os, time\nopen({:?}, 'w').write(str(os.getpid()))\ntime.sleep(30)\n",
        pid_file.display().to_string()
    );

    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("python", code).with_timeout(Duration::from_secs(2)))
        .await;
    assert_timed_out(&result);

    let pid = std::fs::read_to_string(&pid_file)?;
    assert!(!std::path::Path::new("/proc").join(pid.trim()).exists());
    Ok(())
}
