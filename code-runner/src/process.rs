//! Child-process driver shared by the build and run stages

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tokio::time;
use tracing::debug;

/// How long a terminated process gets before it is killed outright.
const TERM_GRACE: Duration = Duration::from_millis(10);
/// How long to wait for stdout/stderr to drain once the process has exited.
const OUTPUT_GRACE: Duration = Duration::from_secs(1);

/// A fully rendered command: program plus arguments, no shell involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    program: OsString,
    args: Vec<OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<OsString>, args: Vec<OsString>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions<'a> {
    /// Written to stdin, which is then closed. `None` connects stdin to null.
    pub input: Option<&'a str>,
    pub timeout: Duration,
    /// Replacement `PATH`; the inherited environment is used otherwise
    pub path_env: Option<&'a OsStr>,
    /// Elapsed time in the outcome is measured from here
    pub started: Instant,
}

/// Terminal state of a process that was successfully spawned.
#[derive(Debug)]
pub enum ProcessOutcome {
    Exited {
        status: ExitStatus,
        stdout: String,
        stderr: String,
        elapsed: Duration,
    },
    /// The timeout fired first; the process (group) has been killed and reaped
    TimedOut,
}

/// Spawn `command`, feed it `input`, and wait for it to exit or time out.
///
/// Errors are spawn failures only; every spawned process ends in a
/// [`ProcessOutcome`].
pub async fn run(
    command: &CommandLine,
    options: ProcessOptions<'_>,
) -> std::io::Result<ProcessOutcome> {
    debug!("Spawning: {}", command);

    let mut cmd = Command::new(command.program());
    cmd.args(command.args())
        .stdin(if options.input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(path) = options.path_env {
        cmd.env("PATH", path);
    }

    // Own process group, so a timeout also takes down anything the program forked
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd.spawn()?;

    if let (Some(mut stdin), Some(input)) = (child.stdin.take(), options.input) {
        let payload = input.to_owned();
        tokio::spawn(async move {
            // A program that never reads stdin closes the pipe early
            if let Err(e) = stdin.write_all(payload.as_bytes()).await {
                debug!("Failed to write stdin: {}", e);
            }
        });
    }

    let stdout = child.stdout.take().map(|out| tokio::spawn(drain(out)));
    let stderr = child.stderr.take().map(|err| tokio::spawn(drain(err)));

    let status = match time::timeout(options.timeout, child.wait()).await {
        Ok(status) => status?,
        Err(_) => {
            debug!("Timed out after {:?}: {}", options.timeout, command);
            terminate(&mut child).await;
            for handle in [stdout, stderr].into_iter().flatten() {
                handle.abort();
            }
            return Ok(ProcessOutcome::TimedOut);
        }
    };
    let elapsed = options.started.elapsed();

    Ok(ProcessOutcome::Exited {
        status,
        stdout: collect(stdout).await,
        stderr: collect(stderr).await,
        elapsed,
    })
}

async fn drain<R: AsyncRead + Unpin>(mut reader: R) -> String {
    let mut buf = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buf).await {
        debug!("Output stream closed with error: {}", e);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

async fn collect(handle: Option<JoinHandle<String>>) -> String {
    let Some(mut handle) = handle else {
        return String::new();
    };

    match time::timeout(OUTPUT_GRACE, &mut handle).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            debug!("Output reader failed: {}", e);
            String::new()
        }
        // A detached grandchild still holds the pipe open
        Err(_) => {
            handle.abort();
            String::new()
        }
    }
}

async fn terminate(child: &mut Child) {
    #[cfg(unix)]
    {
        use nix::sys::signal::Signal;

        if let Some(pid) = child.id() {
            signal_group(pid, Signal::SIGTERM);
            time::sleep(TERM_GRACE).await;
            signal_group(pid, Signal::SIGKILL);
        }
    }

    // Kills the direct child if it is still around and reaps it either way
    if let Err(e) = child.kill().await {
        debug!("Failed to kill child: {}", e);
    }
}

#[cfg(unix)]
fn signal_group(pid: u32, signal: nix::sys::signal::Signal) {
    use nix::{errno::Errno, sys::signal::killpg, unistd::Pid};

    match killpg(Pid::from_raw(pid as i32), signal) {
        Ok(()) | Err(Errno::ESRCH) => {}
        Err(e) => debug!("Failed to send {:?} to process group {}: {}", signal, pid, e),
    }
}
