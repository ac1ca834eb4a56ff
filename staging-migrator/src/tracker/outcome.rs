//! Classification of tracker CLI results.

use super::CommandOutput;
use serde::Deserialize;

/// What a finished tracker call amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOutcome {
    /// Exit code zero.
    Success,
    /// The resource being created is already there.
    AlreadyExists,
    /// The tracker throttled the call.
    RateLimited,
    /// Any other failure.
    Failed,
}

/// Error document the tracker API prints on failed `api` calls.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    code: String,
}

/// Classifies a result from its exit code, stderr and any JSON error on stdout.
#[must_use]
pub fn classify(output: &CommandOutput) -> CallOutcome {
    if output.success() {
        return CallOutcome::Success;
    }

    let api_error: Option<ApiErrorBody> = serde_json::from_str(output.stdout.trim()).ok();
    let stderr = output.stderr.to_lowercase();

    let duplicate = api_error
        .as_ref()
        .is_some_and(|body| body.errors.iter().any(|e| e.code == "already_exists"));
    if duplicate || stderr.contains("already exists") {
        return CallOutcome::AlreadyExists;
    }

    let api_message = api_error
        .map(|body| body.message.to_lowercase())
        .unwrap_or_default();
    if is_throttled(&stderr) || api_message.contains("rate limit") {
        return CallOutcome::RateLimited;
    }

    CallOutcome::Failed
}

/// Matches the throttling signals `gh` prints, never free text that may echo
/// label names or titles back.
fn is_throttled(stderr: &str) -> bool {
    const PHRASES: [&str; 3] = [
        "api rate limit exceeded",
        "secondary rate limit",
        "(http 429)",
    ];
    PHRASES.iter().any(|phrase| stderr.contains(phrase))
        || (stderr.contains("(http 403)") && stderr.contains("rate limit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(stdout: &str, stderr: &str) -> CommandOutput {
        CommandOutput {
            code: Some(1),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn zero_exit_is_success() {
        let output = CommandOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: "warning: something".to_string(),
        };
        assert_eq!(classify(&output), CallOutcome::Success);
    }

    #[test]
    fn detects_duplicate_label_from_stderr() {
        let output = failed(
            "",
            "label with name \"source:v1\" already exists; use `--force` to update its color and description",
        );
        assert_eq!(classify(&output), CallOutcome::AlreadyExists);
    }

    #[test]
    fn detects_duplicate_milestone_from_api_json() {
        let output = failed(
            r#"{"message":"Validation Failed","errors":[{"resource":"Milestone","code":"already_exists","field":"title"}],"documentation_url":"https://docs.github.com/rest"}"#,
            "gh: Validation Failed (HTTP 422)",
        );
        assert_eq!(classify(&output), CallOutcome::AlreadyExists);
    }

    #[test]
    fn detects_rate_limits() {
        let secondary = failed(
            "",
            "GraphQL: You have exceeded a secondary rate limit. Please wait a few minutes before you try again.",
        );
        let too_many = failed("", "gh: Too Many Requests (HTTP 429)");

        assert_eq!(classify(&secondary), CallOutcome::RateLimited);
        assert_eq!(classify(&too_many), CallOutcome::RateLimited);
    }

    #[test]
    fn detects_primary_rate_limit() {
        let output = failed(
            "",
            "gh: API rate limit exceeded for user ID 1234. (HTTP 403)",
        );
        assert_eq!(classify(&output), CallOutcome::RateLimited);
    }

    #[test]
    fn detects_rate_limit_from_api_message() {
        let output = failed(
            r#"{"message":"You have exceeded a secondary rate limit and have been temporarily blocked from content creation."}"#,
            "gh: HTTP 403",
        );
        assert_eq!(classify(&output), CallOutcome::RateLimited);
    }

    #[test]
    fn label_names_mentioning_abuse_are_failures() {
        let output = failed("", "could not add label: 'abuse-report' not found");
        assert_eq!(classify(&output), CallOutcome::Failed);
    }

    #[test]
    fn forbidden_without_rate_limit_is_a_failure() {
        let output = failed("", "gh: Resource not accessible by integration (HTTP 403)");
        assert_eq!(classify(&output), CallOutcome::Failed);
    }

    #[test]
    fn other_validation_errors_are_failures() {
        let output = failed(
            r#"{"message":"Validation Failed","errors":[{"resource":"Milestone","code":"invalid","field":"title"}]}"#,
            "gh: Validation Failed (HTTP 422)",
        );
        assert_eq!(classify(&output), CallOutcome::Failed);
    }

    #[test]
    fn killed_process_is_a_failure() {
        let output = CommandOutput {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(classify(&output), CallOutcome::Failed);
    }
}
