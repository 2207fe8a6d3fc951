//! Stripped down shapes of the GitHub webhook payloads we format.
//! Only fields that end up in a message are modelled, everything else is ignored.

use serde::Deserialize;
use std::fmt::Display;

/// The `pull_request` webhook event.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PullRequestEvent {
    /// The action this event represents.
    pub action: PullRequestAction,
    /// The pull request this event corresponds to.
    pub pull_request: PullRequest,
    /// The repository this event corresponds to (absent in some hand-crafted deliveries)
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct PullRequest {
    pub title: String,
    pub html_url: String,
    #[serde(default)]
    pub state: Option<String>,
    pub user: User,
    #[serde(default)]
    pub merged: Option<bool>,
}

impl PullRequest {
    pub(crate) fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct User {
    pub login: String,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Repository {
    pub full_name: String,
}

/// The `workflow_run` webhook event.
///
/// GitHub nests the run under `workflow_run`. Some senders post a flat body
/// instead, with the run fields at the top level and the name in
/// `workflow.name`. Both end up as the same event.
#[derive(Deserialize, Debug, Clone)]
#[serde(try_from = "serde_json::Value")]
pub(crate) struct WorkflowRunEvent {
    pub workflow_run: WorkflowRun,
    pub repository: Repository,
}

impl TryFrom<serde_json::Value> for WorkflowRunEvent {
    type Error = serde_json::Error;

    fn try_from(body: serde_json::Value) -> Result<Self, Self::Error> {
        if body.get("workflow_run").is_some() {
            let NestedWorkflowRun {
                workflow_run,
                repository,
            } = serde_json::from_value(body)?;
            Ok(Self {
                workflow_run,
                repository,
            })
        } else {
            serde_json::from_value::<FlatWorkflowRun>(body).map(Self::from)
        }
    }
}

#[derive(Deserialize)]
struct NestedWorkflowRun {
    workflow_run: WorkflowRun,
    repository: Repository,
}

#[derive(Deserialize)]
struct FlatWorkflowRun {
    workflow: Workflow,
    status: RunStatus,
    #[serde(default)]
    conclusion: Option<Conclusion>,
    html_url: String,
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    head_branch: Option<String>,
    repository: Repository,
}

#[derive(Deserialize)]
struct Workflow {
    name: String,
}

impl From<FlatWorkflowRun> for WorkflowRunEvent {
    fn from(flat: FlatWorkflowRun) -> Self {
        Self {
            workflow_run: WorkflowRun {
                name: flat.workflow.name,
                status: flat.status,
                conclusion: flat.conclusion,
                html_url: flat.html_url,
                event: flat.event,
                head_branch: flat.head_branch,
            },
            repository: flat.repository,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct WorkflowRun {
    /// Name of the workflow this run belongs to
    pub name: String,
    pub status: RunStatus,
    /// `null` until the run completed
    #[serde(default)]
    pub conclusion: Option<Conclusion>,
    pub html_url: String,
    /// The event that triggered the run ("push", "pull_request", …)
    #[serde(default)]
    pub event: Option<String>,
    #[serde(default)]
    pub head_branch: Option<String>,
}

/// The `workflow_job` webhook event.
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct WorkflowJobEvent {
    pub action: String,
    pub workflow_job: WorkflowJob,
    pub repository: Repository,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct WorkflowJob {
    pub name: String,
    pub status: RunStatus,
    #[serde(default)]
    pub conclusion: Option<Conclusion>,
    pub html_url: String,
    // Timestamps are passed through as sent, never parsed.
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub(crate) enum PullRequestAction {
    Opened,
    Reopened,
    ReadyForReview,
    Closed,
    Synchronize,
    Other(String),
}

impl From<String> for PullRequestAction {
    fn from(action: String) -> Self {
        match action.as_str() {
            "opened" => Self::Opened,
            "reopened" => Self::Reopened,
            "ready_for_review" => Self::ReadyForReview,
            "closed" => Self::Closed,
            "synchronize" => Self::Synchronize,
            _ => Self::Other(action),
        }
    }
}

impl PullRequestAction {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Opened => "opened",
            Self::Reopened => "reopened",
            Self::ReadyForReview => "ready_for_review",
            Self::Closed => "closed",
            Self::Synchronize => "synchronize",
            Self::Other(action) => action,
        }
    }
}

/// Lifecycle stage of a workflow run or job.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub(crate) enum RunStatus {
    Queued,
    InProgress,
    Completed,
    Other(String),
}

impl From<String> for RunStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(status),
        }
    }
}

impl RunStatus {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Other(status) => status,
        }
    }
}

/// Terminal outcome of a workflow run or job.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub(crate) enum Conclusion {
    Success,
    Failure,
    Cancelled,
    Other(String),
}

impl From<String> for Conclusion {
    fn from(conclusion: String) -> Self {
        match conclusion.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "cancelled" => Self::Cancelled,
            _ => Self::Other(conclusion),
        }
    }
}

impl Conclusion {
    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Cancelled => "cancelled",
            Self::Other(conclusion) => conclusion,
        }
    }
}

impl Display for PullRequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
