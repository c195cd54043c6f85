use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::{
    config::Config,
    context::ExecutionContext,
    error::Error,
    languages::{self, LanguageProfile},
    process::{self, CommandLine, ProcessOptions, ProcessOutcome},
    toolchain::Toolchain,
    types::{ExecutionRequest, ExecutionResult},
};

/// Runs one request through resolve, materialize, build, run and cleanup.
///
/// Holds only read-only state, so a single executor can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct CodeExecutor {
    temp_root: PathBuf,
    build_timeout: Duration,
    toolchain: &'static Toolchain,
}

impl CodeExecutor {
    /// Create a new code executor, resolving the native toolchain if this is
    /// the first executor in the process.
    pub fn new(config: &Config) -> Self {
        Self {
            temp_root: config.temp_root(),
            build_timeout: config.build_timeout(),
            toolchain: Toolchain::global(&config.native_compiler),
        }
    }

    pub fn temp_root(&self) -> &std::path::Path {
        &self.temp_root
    }

    /// Execute `request`. Every failure is reported inside the result.
    pub async fn execute(&self, request: &ExecutionRequest) -> ExecutionResult {
        match self.try_execute(request).await {
            Ok(result) => result,
            Err(e) => {
                debug!("Execution failed: {}", e);
                e.into()
            }
        }
    }

    async fn try_execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, Error> {
        let profile = languages::resolve(&request.language)?;

        let mut context = ExecutionContext::new(&self.temp_root, profile, &request.code);
        let source = profile.prepare_source(&request.code, &request.input);
        context.materialize(&source).await?;

        if let Some(compile) = profile.compile_command_line(&context) {
            self.build(&compile).await?;
        }

        // `context` drops on return and removes everything it wrote
        self.run(profile, &mut context, request).await
    }

    async fn build(&self, command: &CommandLine) -> Result<(), Error> {
        let outcome = process::run(
            command,
            ProcessOptions {
                input: None,
                timeout: self.build_timeout,
                path_env: self.path_env(),
                started: Instant::now(),
            },
        )
        .await
        .map_err(|e| {
            Error::Compilation(format!(
                "Failed to start {}: {}",
                command.program().to_string_lossy(),
                e
            ))
        })?;

        match outcome {
            ProcessOutcome::Exited { status, .. } if status.success() => Ok(()),
            ProcessOutcome::Exited {
                status,
                stdout,
                stderr,
                ..
            } => {
                let diagnostics = [stderr.trim(), stdout.trim()]
                    .into_iter()
                    .find(|text| !text.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| exit_message("Compiler", status));
                Err(Error::Compilation(diagnostics))
            }
            ProcessOutcome::TimedOut => Err(Error::Compilation(format!(
                "Compilation timed out after {}ms",
                self.build_timeout.as_millis()
            ))),
        }
    }

    async fn run(
        &self,
        profile: &LanguageProfile,
        context: &mut ExecutionContext,
        request: &ExecutionRequest,
    ) -> Result<ExecutionResult, Error> {
        let command = profile.run_command_line(context);
        let started = context.mark_started();

        let outcome = process::run(
            &command,
            ProcessOptions {
                input: Some(&request.input),
                timeout: request.timeout(),
                path_env: self.path_env(),
                started,
            },
        )
        .await
        .map_err(Error::Spawn)?;

        match outcome {
            ProcessOutcome::TimedOut => Err(Error::Timeout),
            ProcessOutcome::Exited {
                status,
                stdout,
                stderr,
                elapsed,
            } => {
                let output = stdout.trim().to_string();
                if status.success() {
                    info!(
                        "{} execution {} finished in {:?}",
                        profile.language,
                        context.id(),
                        elapsed
                    );
                    return Ok(ExecutionResult::success(output, elapsed));
                }

                let error = match stderr.trim() {
                    "" => exit_message("Process", status),
                    stderr => stderr.to_string(),
                };
                info!(
                    "{} execution {} failed: {}",
                    profile.language,
                    context.id(),
                    status
                );
                Ok(ExecutionResult::runtime_failure(output, error, elapsed))
            }
        }
    }

    fn path_env(&self) -> Option<&std::ffi::OsStr> {
        self.toolchain.path_env().map(|path| path.as_os_str())
    }
}

fn exit_message(who: &str, status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("{} exited with code {}", who, code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("{} terminated by signal {}", who, signal);
        }
    }

    format!("{} exited with {}", who, status)
}
