//! Tracker issue creation.
//!
//! Bodies are handed to the tracker through a temporary markdown file so long
//! multi-line content never hits argument length limits.

mod error;
mod status;

pub use error::IssueError;
pub use status::IssueStatus;

use crate::body::NormalizedIssue;
use crate::tracker::Tracker;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Write;
use tracing::debug;

/// Creates one issue.
///
/// A call counts as created only when it exits zero and prints something
/// (the new issue's URL). Any other result is [`IssueStatus::Failed`] with a
/// stderr excerpt of at most `excerpt_len` characters.
///
/// # Errors
///
/// Returns [`IssueError`] if the body file can't be written or the tracker CLI
/// can't be run.
pub async fn create_issue(
    tracker: &Tracker,
    issue: &NormalizedIssue,
    excerpt_len: usize,
) -> Result<IssueStatus, IssueError> {
    let mut body_file = tempfile::Builder::new()
        .prefix("staging-issue-")
        .suffix(".md")
        .tempfile()
        .map_err(IssueError::BodyFile)?;
    body_file
        .write_all(issue.body.as_bytes())
        .and_then(|()| body_file.flush())
        .map_err(IssueError::BodyFile)?;

    debug!(key = %issue.key, path = %body_file.path().display(), "Wrote issue body");

    let output = tracker
        .create_issue(
            &issue.title,
            body_file.path(),
            &issue.labels,
            issue.milestone.as_deref(),
        )
        .await?;

    let url = output.stdout.trim();
    if output.success() && !url.is_empty() {
        Ok(IssueStatus::Created {
            url: url.to_string(),
        })
    } else {
        Ok(IssueStatus::Failed {
            error: output.stderr_excerpt(excerpt_len),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ListedIssue {
    title: String,
}

/// Lists the titles of existing issues, open or closed.
///
/// # Errors
///
/// Returns [`IssueError`] if the listing fails or prints something other than
/// a JSON array of issues.
pub async fn list_existing_titles(
    tracker: &Tracker,
    limit: usize,
) -> Result<HashSet<String>, IssueError> {
    let output = tracker.list_issue_titles(limit).await?;
    if !output.success() {
        return Err(IssueError::ListFailed {
            message: output.stderr_excerpt(200),
        });
    }

    let issues: Vec<ListedIssue> =
        serde_json::from_str(output.stdout.trim()).map_err(|e| IssueError::ListFailed {
            message: format!("unexpected output: {e}"),
        })?;

    debug!(count = issues.len(), "Listed existing issues");
    Ok(issues.into_iter().map(|issue| issue.title).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packs::Pack;
    use crate::rate_limit::{RateLimiter, RetryPolicy};
    use crate::test_support::{flag_value, RecordingCli};
    use crate::tracker::CommandOutput;
    use std::sync::Arc;
    use std::time::Duration;

    fn tracker(cli: Arc<RecordingCli>) -> Tracker {
        Tracker::new(
            cli,
            "acme/staging",
            RateLimiter::new(Duration::ZERO),
            RetryPolicy::no_retry(),
        )
    }

    fn sample_issue() -> NormalizedIssue {
        NormalizedIssue {
            pack: Pack::V1,
            key: "STORY-1".to_string(),
            title: "[V1] STORY-1 First".to_string(),
            body: "## Problem\n\nMulti\nline `body`".to_string(),
            labels: vec!["area:core".to_string(), "source:v1".to_string()],
            milestone: Some("[V1] M0".to_string()),
        }
    }

    #[tokio::test]
    async fn creates_issue_from_body_file() {
        let cli = Arc::new(RecordingCli::succeeding());
        let tracker = tracker(cli.clone());

        let status = create_issue(&tracker, &sample_issue(), 100).await.unwrap();

        assert_eq!(
            status,
            IssueStatus::Created {
                url: "https://github.com/acme/staging/issues/1".to_string()
            }
        );
        let call = &cli.calls()[0];
        assert_eq!(flag_value(call, "--title"), Some("[V1] STORY-1 First"));
        assert_eq!(flag_value(call, "--milestone"), Some("[V1] M0"));
        assert!(flag_value(call, "--body-file").unwrap().ends_with(".md"));
        assert_eq!(cli.bodies(), vec![sample_issue().body]);
    }

    #[tokio::test]
    async fn body_file_is_removed_afterwards() {
        let cli = Arc::new(RecordingCli::succeeding());
        let tracker = tracker(cli.clone());

        create_issue(&tracker, &sample_issue(), 100).await.unwrap();

        let path = flag_value(&cli.calls()[0], "--body-file")
            .unwrap()
            .to_string();
        assert!(!std::path::Path::new(&path).exists());
    }

    #[tokio::test]
    async fn empty_stdout_is_a_failure() {
        let cli = Arc::new(RecordingCli::new(|_| CommandOutput::ok("")));
        let tracker = tracker(cli);

        let status = create_issue(&tracker, &sample_issue(), 100).await.unwrap();
        assert!(matches!(status, IssueStatus::Failed { .. }));
    }

    #[tokio::test]
    async fn failure_keeps_truncated_stderr() {
        let cli = Arc::new(RecordingCli::new(|_| CommandOutput {
            code: Some(1),
            stdout: String::new(),
            stderr: format!("could not add label: {}", "x".repeat(200)),
        }));
        let tracker = tracker(cli);

        let status = create_issue(&tracker, &sample_issue(), 100).await.unwrap();

        match status {
            IssueStatus::Failed { error } => {
                assert_eq!(error.chars().count(), 100);
                assert!(error.starts_with("could not add label"));
            }
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[tokio::test]
    async fn lists_existing_titles() {
        let cli = Arc::new(RecordingCli::new(|_| {
            CommandOutput::ok(r#"[{"title":"[V1] STORY-1 First"},{"title":"Other"}]"#)
        }));
        let tracker = tracker(cli.clone());

        let titles = list_existing_titles(&tracker, 500).await.unwrap();

        assert!(titles.contains("[V1] STORY-1 First"));
        assert_eq!(titles.len(), 2);
        assert_eq!(flag_value(&cli.calls()[0], "--limit"), Some("500"));
    }

    #[tokio::test]
    async fn listing_failure_is_an_error() {
        let cli = Arc::new(RecordingCli::new(|_| CommandOutput {
            code: Some(4),
            stdout: String::new(),
            stderr: "authentication required".to_string(),
        }));
        let tracker = tracker(cli);

        let result = list_existing_titles(&tracker, 500).await;
        assert!(matches!(result, Err(IssueError::ListFailed { .. })));
    }
}
