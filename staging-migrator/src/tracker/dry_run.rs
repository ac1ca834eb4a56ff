//! Preview invoker that never mutates the tracker.

use super::{CommandOutput, InvokeError, TrackerCli};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Logs mutating invocations instead of running them.
///
/// Read-only invocations (`issue list`) are passed to the wrapped invoker so a
/// preview sees the real state of the tracker. Everything else reports success
/// with a placeholder on stdout.
pub struct DryRunCli {
    inner: Arc<dyn TrackerCli>,
}

impl DryRunCli {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn TrackerCli>) -> Self {
        Self { inner }
    }
}

fn is_read_only(args: &[String]) -> bool {
    matches!(args, [group, verb, ..] if group == "issue" && verb == "list")
}

#[async_trait]
impl TrackerCli for DryRunCli {
    async fn run(&self, args: &[String]) -> Result<CommandOutput, InvokeError> {
        if is_read_only(args) {
            return self.inner.run(args).await;
        }

        info!(command = %args.join(" "), "[DRY RUN] Would run");
        Ok(CommandOutput::ok("(dry run)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingCli;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn mutating_calls_are_not_forwarded() {
        let inner = Arc::new(RecordingCli::succeeding());
        let cli = DryRunCli::new(inner.clone());

        let output = cli
            .run(&args(&["label", "create", "source:v1"]))
            .await
            .unwrap();

        assert!(output.success());
        assert!(!output.stdout.trim().is_empty());
        assert!(inner.calls().is_empty());
    }

    #[tokio::test]
    async fn issue_listing_is_forwarded() {
        let inner = Arc::new(RecordingCli::succeeding());
        let cli = DryRunCli::new(inner.clone());

        cli.run(&args(&["issue", "list", "--json", "title"]))
            .await
            .unwrap();

        assert_eq!(inner.calls().len(), 1);
    }
}
