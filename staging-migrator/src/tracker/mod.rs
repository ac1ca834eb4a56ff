//! The tracker CLI, the only channel through which the jobs touch the tracker.
//!
//! [`TrackerCli`] runs one invocation and hands back its exit code and output
//! without judging it. [`Tracker`] builds the invocations the jobs need and
//! applies pacing and retries on top.

mod dry_run;
mod error;
mod outcome;
mod session;

pub use dry_run::DryRunCli;
pub use error::InvokeError;
pub use outcome::{classify, CallOutcome};
pub use session::Tracker;

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one tracker invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub code: Option<i32>,
    /// Standard output.
    pub stdout: String,
    /// Standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with the given stdout.
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Returns true if the process exited with code zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Classifies this result.
    #[must_use]
    pub fn outcome(&self) -> CallOutcome {
        classify(self)
    }

    /// Trimmed stderr, cut to at most `max_chars` characters.
    #[must_use]
    pub fn stderr_excerpt(&self, max_chars: usize) -> String {
        self.stderr.trim().chars().take(max_chars).collect()
    }
}

/// Runs tracker CLI invocations.
///
/// Implementations must not treat a non-zero exit as an error; only failing
/// to run the program at all is an [`InvokeError`].
#[async_trait]
pub trait TrackerCli: Send + Sync {
    /// Runs the CLI with `args` and waits for it to finish.
    async fn run(&self, args: &[String]) -> Result<CommandOutput, InvokeError>;
}

/// The GitHub CLI (`gh`), or any program accepting the same arguments.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GhCli {
    /// Creates an invoker for `program`.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl TrackerCli for GhCli {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, InvokeError> {
        debug!(program = %self.program, args = ?args, "Invoking tracker CLI");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| InvokeError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn excerpt_trims_and_truncates() {
        let output = CommandOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: "  HTTP 401: Bad credentials  \n".to_string(),
        };

        assert_eq!(output.stderr_excerpt(8), "HTTP 401");
        assert_eq!(output.stderr_excerpt(100), "HTTP 401: Bad credentials");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_output_and_exit_code() {
        let cli = GhCli::new("sh");

        let ok = cli.run(&args(&["-c", "echo created"])).await.unwrap();
        assert!(ok.success());
        assert_eq!(ok.stdout.trim(), "created");

        let failed = cli
            .run(&args(&["-c", "echo nope >&2; exit 3"]))
            .await
            .unwrap();
        assert_eq!(failed.code, Some(3));
        assert_eq!(failed.stderr.trim(), "nope");
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let cli = GhCli::new("definitely-not-a-real-tracker-cli");

        let result = cli.run(&args(&["--version"])).await;
        assert!(matches!(result, Err(InvokeError::Spawn { .. })));
    }
}
