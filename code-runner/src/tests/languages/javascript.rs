use super::*;
use crate::tests::fixtures::{
    auto_wrap::*, code_samples::JS_HELLO, echo_samples::JS_ECHO, test_scenarios::JS_SLEEP,
};

#[tokio::test]
async fn test_javascript_basic() -> Result<()> {
    test_language_execution(
        Language::JavaScript,
        JS_HELLO,
        "Hello from JavaScript!",
        default_timeout(),
    )
    .await
}

#[tokio::test]
async fn test_javascript_input() -> Result<()> {
    test_language_echo(Language::JavaScript, JS_ECHO).await
}

#[tokio::test]
async fn test_javascript_timeout() -> Result<()> {
    test_language_timeout(Language::JavaScript, JS_SLEEP).await
}

async fn run_wrapped(code: &str, input: &str) -> Result<crate::ExecutionResult> {
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(&ExecutionRequest::new("javascript", code).with_input(input))
        .await;
    assert_no_leftovers(root.path());
    Ok(result)
}

#[tokio::test]
async fn test_javascript_auto_wrap() -> Result<()> {
    if toolchain_missing(Language::JavaScript) {
        return Ok(());
    }

    assert_output(&run_wrapped(JS_ADD, "a = 2, b = 3").await?, "5");
    assert_output(
        &run_wrapped(JS_TWO_SUM, "nums = [2,7,11,15], target = 9").await?,
        "[0,1]",
    );
    assert_output(&run_wrapped(JS_REVERSE, r#"s = "a, b""#).await?, "b ,a");
    Ok(())
}

#[tokio::test]
async fn test_javascript_literal_input_is_single_argument() -> Result<()> {
    if toolchain_missing(Language::JavaScript) {
        return Ok(());
    }

    let code = "function sum(nums) { return nums.reduce((a, b) => a + b, 0) }";
    assert_output(&run_wrapped(code, "[1, 2, 3, 4]").await?, "10");
    Ok(())
}

#[tokio::test]
async fn test_javascript_without_function_runs_unmodified() -> Result<()> {
    if toolchain_missing(Language::JavaScript) {
        return Ok(());
    }

    let code = "console.log('plain script')";
    assert_output(&run_wrapped(code, "a = 1").await?, "plain script");
    Ok(())
}
