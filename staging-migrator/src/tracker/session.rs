//! Tracker operations bound to one destination repository.

use super::{CallOutcome, CommandOutput, InvokeError, TrackerCli};
use crate::rate_limit::{wait_for_retry, RateLimiter, RetryPolicy};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Issues tracker commands against a single repository.
///
/// Every call is followed by the limiter's fixed pause. Calls classified as
/// [`CallOutcome::RateLimited`] are retried under the [`RetryPolicy`]; nothing
/// else is retried.
#[derive(Clone)]
pub struct Tracker {
    cli: Arc<dyn TrackerCli>,
    repo: String,
    limiter: RateLimiter,
    retry: RetryPolicy,
}

impl Tracker {
    /// Creates a tracker for `repo`.
    #[must_use]
    pub fn new(
        cli: Arc<dyn TrackerCli>,
        repo: impl Into<String>,
        limiter: RateLimiter,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            cli,
            repo: repo.into(),
            limiter,
            retry,
        }
    }

    /// The destination repository.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `label create NAME --repo R --color C [--description D] --force`
    pub async fn create_label(
        &self,
        name: &str,
        color: &str,
        description: Option<&str>,
    ) -> Result<CommandOutput, InvokeError> {
        let mut args = strings(&["label", "create", name, "--repo", &self.repo, "--color", color]);
        if let Some(description) = description {
            args.extend(strings(&["--description", description]));
        }
        args.push("--force".to_string());
        self.call(args).await
    }

    /// `api repos/R/milestones -X POST -f title=T -f state=open`
    pub async fn create_milestone(&self, title: &str) -> Result<CommandOutput, InvokeError> {
        let endpoint = format!("repos/{}/milestones", self.repo);
        let title_field = format!("title={title}");
        self.call(strings(&[
            "api",
            &endpoint,
            "-X",
            "POST",
            "-f",
            &title_field,
            "-f",
            "state=open",
        ]))
        .await
    }

    /// `issue create --repo R --title T --body-file F (--label L)* [--milestone M]`
    pub async fn create_issue(
        &self,
        title: &str,
        body_file: &Path,
        labels: &[String],
        milestone: Option<&str>,
    ) -> Result<CommandOutput, InvokeError> {
        let body_file = body_file.display().to_string();
        let mut args = strings(&[
            "issue",
            "create",
            "--repo",
            &self.repo,
            "--title",
            title,
            "--body-file",
            &body_file,
        ]);
        for label in labels {
            args.extend(strings(&["--label", label]));
        }
        if let Some(milestone) = milestone {
            args.extend(strings(&["--milestone", milestone]));
        }
        self.call(args).await
    }

    /// `issue edit N --repo R --add-label L`
    pub async fn add_label(
        &self,
        issue: &impl Display,
        label: &str,
    ) -> Result<CommandOutput, InvokeError> {
        let number = issue.to_string();
        self.call(strings(&[
            "issue",
            "edit",
            &number,
            "--repo",
            &self.repo,
            "--add-label",
            label,
        ]))
        .await
    }

    /// `issue list --repo R --state all --limit L --json title`
    pub async fn list_issue_titles(&self, limit: usize) -> Result<CommandOutput, InvokeError> {
        let limit = limit.to_string();
        self.call(strings(&[
            "issue", "list", "--repo", &self.repo, "--state", "all", "--limit", &limit, "--json",
            "title",
        ]))
        .await
    }

    async fn call(&self, args: Vec<String>) -> Result<CommandOutput, InvokeError> {
        let mut attempt = 1;
        loop {
            let result = self.cli.run(&args).await;
            self.limiter.pause().await;

            let output = result?;
            if output.outcome() == CallOutcome::RateLimited && self.retry.allows_retry_after(attempt)
            {
                warn!(
                    attempt,
                    command = %args.iter().take(2).cloned().collect::<Vec<_>>().join(" "),
                    "Tracker rate limited the call"
                );
                wait_for_retry(&self.retry, attempt).await;
                attempt += 1;
                continue;
            }
            return Ok(output);
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
