use super::*;
use crate::tests::fixtures::{auto_wrap::TS_ADD, code_samples::TS_HELLO};

#[tokio::test]
async fn test_typescript_basic() -> Result<()> {
    test_language_execution(
        Language::TypeScript,
        TS_HELLO,
        "Hello from TypeScript!",
        default_timeout(),
    )
    .await
}

#[tokio::test]
async fn test_typescript_auto_wrap() -> Result<()> {
    if toolchain_missing(Language::TypeScript) {
        return Ok(());
    }
    let root = tempdir()?;
    let result = test_executor(root.path())
        .execute(
            &ExecutionRequest::new("typescript", TS_ADD)
                .with_input("a = 2, b = 3")
                .with_timeout(extended_timeout()),
        )
        .await;

    assert_output(&result, "5");
    assert_no_leftovers(root.path());
    Ok(())
}
