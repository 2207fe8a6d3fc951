//! Turns decoded webhook events into Discord messages.
//!
//! Which events produce a message, on which channel and under which headline
//! is decided here; the wording itself lives in `templates/`.

use askama::Template;

use crate::event::{
    ActionReport, Channel, Conclusion, InboundEvent, OutboundMessage, PullRequestAction, PullRequestEvent,
    RunStatus, WorkflowJobEvent, WorkflowRunEvent,
};

/// Placeholder for optional values that are always shown.
const MISSING: &str = "-";

/// Format `event`, or return `None` if it is not worth a message.
pub(crate) fn format(event: &InboundEvent) -> Result<Option<OutboundMessage>, askama::Error> {
    match event {
        InboundEvent::PullRequest(e) => pull_request(e),
        InboundEvent::WorkflowRun(e) => workflow_run(e),
        InboundEvent::WorkflowJob(e) => workflow_job(e),
        InboundEvent::ActionReport(r) => action_report(r).map(Some),
        InboundEvent::Ping | InboundEvent::Unhandled(_) => Ok(None),
    }
}

/// Pull request state changes that are announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PullRequestTransition {
    Opened,
    Reopened,
    ReadyForReview,
    Merged,
    ClosedUnmerged,
    Updated,
}

struct Headline {
    emoji: &'static str,
    text: &'static str,
    with_author: bool,
}

impl PullRequestTransition {
    pub(crate) fn of(event: &PullRequestEvent) -> Option<Self> {
        Some(match event.action {
            PullRequestAction::Opened => Self::Opened,
            PullRequestAction::Reopened => Self::Reopened,
            PullRequestAction::ReadyForReview => Self::ReadyForReview,
            PullRequestAction::Closed if event.pull_request.is_merged() => Self::Merged,
            PullRequestAction::Closed => Self::ClosedUnmerged,
            PullRequestAction::Synchronize => Self::Updated,
            PullRequestAction::Other(_) => return None,
        })
    }

    /// Action as shown in the message. A merge is reported as `merged`, not `closed`.
    fn label(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::Reopened => "reopened",
            Self::ReadyForReview => "ready_for_review",
            Self::Merged => "merged",
            Self::ClosedUnmerged => "closed",
            Self::Updated => "synchronize",
        }
    }

    fn headline(self) -> Headline {
        let (emoji, text, with_author) = match self {
            Self::Opened => ("🆕", "New pull request", true),
            Self::Reopened => ("🔄", "Pull request reopened", true),
            Self::ReadyForReview => ("👀", "Pull request ready for review", false),
            Self::Merged => ("✅", "Pull request merged", false),
            Self::ClosedUnmerged => ("❌", "Pull request closed without merging", false),
            Self::Updated => ("🔄", "Pull request updated", false),
        };
        Headline {
            emoji,
            text,
            with_author,
        }
    }
}

#[derive(Template)]
#[template(path = "pull_request.md.j2", escape = "none")]
struct PullRequestMessage<'a> {
    headline: Headline,
    author: &'a str,
    title: &'a str,
    url: &'a str,
    action: &'static str,
    state: Option<&'a str>,
    repository: Option<&'a str>,
}

fn pull_request(event: &PullRequestEvent) -> Result<Option<OutboundMessage>, askama::Error> {
    let Some(transition) = PullRequestTransition::of(event) else {
        return Ok(None);
    };
    let pr = &event.pull_request;
    let content = PullRequestMessage {
        headline: transition.headline(),
        author: &pr.user.login,
        title: &pr.title,
        url: &pr.html_url,
        action: transition.label(),
        state: pr.state.as_deref(),
        repository: event.repository.as_ref().map(|r| r.full_name.as_str()),
    }
    .render()?;
    Ok(Some(OutboundMessage::new(Channel::Dev, content)))
}

/// Emoji and text summarising how a run ended.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Verdict<'a> {
    pub emoji: &'static str,
    pub text: &'a str,
}

impl<'a> Verdict<'a> {
    pub(crate) fn of(conclusion: Option<&'a Conclusion>) -> Self {
        let (emoji, text) = match conclusion {
            Some(Conclusion::Success) => ("✅", "Successful"),
            Some(Conclusion::Failure) => ("❌", "Failed"),
            Some(Conclusion::Cancelled) => ("⚠️", "Cancelled"),
            Some(Conclusion::Other(other)) => ("⚠️", other.as_str()),
            None => ("⚠️", "Unknown"),
        };
        Self { emoji, text }
    }
}

#[derive(Template)]
#[template(path = "workflow_run.md.j2", escape = "none")]
struct WorkflowRunMessage<'a> {
    verdict: Verdict<'a>,
    workflow: &'a str,
    repository: &'a str,
    status: &'a RunStatus,
    conclusion: &'a str,
    branch: Option<&'a str>,
    trigger: Option<&'a str>,
    url: &'a str,
}

#[derive(Template)]
#[template(path = "workflow_progress.md.j2", escape = "none")]
struct WorkflowProgressMessage<'a> {
    workflow: &'a str,
    repository: &'a str,
    status: &'a RunStatus,
    branch: Option<&'a str>,
    trigger: Option<&'a str>,
    url: &'a str,
}

fn workflow_run(event: &WorkflowRunEvent) -> Result<Option<OutboundMessage>, askama::Error> {
    let run = &event.workflow_run;
    match run.status {
        RunStatus::Completed => {
            let content = WorkflowRunMessage {
                verdict: Verdict::of(run.conclusion.as_ref()),
                workflow: &run.name,
                repository: &event.repository.full_name,
                status: &run.status,
                conclusion: run.conclusion.as_ref().map_or(MISSING, Conclusion::as_str),
                branch: run.head_branch.as_deref(),
                trigger: run.event.as_deref(),
                url: &run.html_url,
            }
            .render()?;
            Ok(Some(OutboundMessage::new(Channel::Test, content)))
        }
        RunStatus::Queued | RunStatus::InProgress => {
            let content = WorkflowProgressMessage {
                workflow: &run.name,
                repository: &event.repository.full_name,
                status: &run.status,
                branch: run.head_branch.as_deref(),
                trigger: run.event.as_deref(),
                url: &run.html_url,
            }
            .render()?;
            Ok(Some(OutboundMessage::progress(Channel::Test, content)))
        }
        RunStatus::Other(_) => Ok(None),
    }
}

#[derive(Template)]
#[template(path = "workflow_job.md.j2", escape = "none")]
struct WorkflowJobMessage<'a> {
    emoji: &'static str,
    repository: &'a str,
    job: &'a str,
    status: &'a RunStatus,
    conclusion: &'a str,
    url: &'a str,
    started_at: &'a str,
    completed_at: &'a str,
}

fn workflow_job(event: &WorkflowJobEvent) -> Result<Option<OutboundMessage>, askama::Error> {
    if event.action != "completed" {
        return Ok(None);
    }
    let job = &event.workflow_job;
    let emoji = if job.conclusion == Some(Conclusion::Success) {
        "✅"
    } else {
        "❌"
    };
    let content = WorkflowJobMessage {
        emoji,
        repository: &event.repository.full_name,
        job: &job.name,
        status: &job.status,
        conclusion: job.conclusion.as_ref().map_or(MISSING, Conclusion::as_str),
        url: &job.html_url,
        started_at: job.started_at.as_deref().unwrap_or(MISSING),
        completed_at: job.completed_at.as_deref().unwrap_or(MISSING),
    }
    .render()?;
    Ok(Some(OutboundMessage::new(Channel::Test, content)))
}

#[derive(Template)]
#[template(path = "action_report.md.j2", escape = "none")]
struct ActionReportMessage<'a> {
    event: &'a str,
    status: &'a str,
}

/// Action reports are always announced, whatever their status.
fn action_report(report: &ActionReport) -> Result<OutboundMessage, askama::Error> {
    let content = ActionReportMessage {
        event: &report.event,
        status: &report.status,
    }
    .render()?;
    Ok(OutboundMessage::new(Channel::Test, content))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use crate::event::MessageKind;
    use crate::fixtures::{PR, WORKFLOW_JOB, WORKFLOW_RUN};

    use super::*;

    fn pr_event(action: &str, merged: bool) -> InboundEvent {
        let state = if action == "closed" { "closed" } else { "open" };
        InboundEvent::PullRequest(
            serde_json::from_value(json!({
                "action": action,
                "pull_request": {
                    "title": "Fix bug",
                    "html_url": "http://x/1",
                    "state": state,
                    "user": {"login": "alice"},
                    "merged": merged,
                },
                "repository": {"full_name": "octo/repo"},
            }))
            .unwrap(),
        )
    }

    fn run_event(status: &str, conclusion: Option<&str>) -> InboundEvent {
        InboundEvent::WorkflowRun(
            serde_json::from_value(json!({
                "action": "whatever",
                "workflow_run": {
                    "name": "CI",
                    "status": status,
                    "conclusion": conclusion,
                    "html_url": "https://github.com/octo/repo/actions/runs/1",
                    "event": "pull_request",
                    "head_branch": "feature",
                },
                "repository": {"full_name": "octo/repo"},
            }))
            .unwrap(),
        )
    }

    fn job_event(action: &str, conclusion: Option<&str>) -> InboundEvent {
        let status = if action == "completed" { "completed" } else { "in_progress" };
        InboundEvent::WorkflowJob(
            serde_json::from_value(json!({
                "action": action,
                "workflow_job": {
                    "name": "lint",
                    "status": status,
                    "conclusion": conclusion,
                    "html_url": "https://github.com/octo/repo/runs/9",
                    "started_at": "2024-01-01T10:00:00Z",
                    "completed_at": "2024-01-01T10:05:00Z",
                },
                "repository": {"full_name": "octo/repo"},
            }))
            .unwrap(),
        )
    }

    fn message(event: &InboundEvent) -> OutboundMessage {
        format(event).unwrap().expect("expected a message")
    }

    #[rstest]
    #[case("opened", "🆕")]
    #[case("reopened", "🔄")]
    #[case("ready_for_review", "👀")]
    #[case("synchronize", "🔄")]
    fn pull_request_actions_go_to_dev(#[case] action: &str, #[case] emoji: &str) {
        let msg = message(&pr_event(action, false));
        assert_eq!(msg.channel, Channel::Dev);
        assert_eq!(msg.kind, MessageKind::Notification);
        assert!(msg.content.starts_with(emoji), "{}", msg.content);
        assert!(msg.content.contains("Fix bug"));
        assert!(msg.content.contains("http://x/1"));
        assert!(msg.content.contains(&format!("Action: {action}")));
    }

    #[rstest]
    #[case("opened", true)]
    #[case("reopened", true)]
    #[case("ready_for_review", false)]
    fn author_is_named_on_open(#[case] action: &str, #[case] named: bool) {
        let msg = message(&pr_event(action, false));
        assert_eq!(msg.content.contains("by alice"), named, "{}", msg.content);
    }

    #[test]
    fn merged_pull_request() {
        let msg = message(&pr_event("closed", true));
        assert_eq!(msg.channel, Channel::Dev);
        assert!(msg.content.starts_with("✅"));
        assert!(msg.content.contains("merged"));
        assert!(msg.content.contains("Action: merged"));
        assert!(!msg.content.contains("Action: closed"));
    }

    #[test]
    fn closed_without_merge_differs_from_merge() {
        let closed = message(&pr_event("closed", false));
        let merged = message(&pr_event("closed", true));
        assert_ne!(closed.content, merged.content);
        assert!(closed.content.starts_with("❌"));
        assert!(closed.content.contains("closed without merging"));
        assert!(closed.content.contains("Action: closed"));
    }

    #[rstest]
    #[case("labeled")]
    #[case("assigned")]
    #[case("edited")]
    #[case("Opened")]
    #[case("")]
    fn irrelevant_pull_request_actions_are_ignored(#[case] action: &str) {
        assert_eq!(format(&pr_event(action, false)).unwrap(), None);
    }

    #[test]
    fn pull_request_message_layout() {
        let event = InboundEvent::decode("pull_request", PR.as_bytes()).unwrap();
        assert_eq!(
            message(&event).content,
            "🆕 **New pull request** by Codertocat\n\
             **Update the README with new information.**\n\
             Repository: Codertocat/Hello-World\n\
             Action: opened\n\
             State: open\n\
             https://github.com/Codertocat/Hello-World/pull/2"
        );
    }

    #[test]
    fn minimal_pull_request_omits_optional_lines() {
        let body = r#"{"action":"opened","pull_request":{"title":"Fix bug","html_url":"http://x/1","user":{"login":"alice"}}}"#;
        let msg = message(&InboundEvent::decode("pull_request", body.as_bytes()).unwrap());
        assert!(!msg.content.contains("Repository:"));
        assert!(!msg.content.contains("State:"));
        for needle in ["alice", "Fix bug", "http://x/1"] {
            assert!(msg.content.contains(needle), "{needle} missing in {}", msg.content);
        }
    }

    #[rstest]
    #[case(Some("success"), "✅", "Successful")]
    #[case(Some("failure"), "❌", "Failed")]
    #[case(Some("cancelled"), "⚠️", "Cancelled")]
    #[case(Some("timed_out"), "⚠️", "timed_out")]
    #[case(Some("skipped"), "⚠️", "skipped")]
    #[case(None, "⚠️", "Unknown")]
    fn completed_run_verdict(
        #[case] conclusion: Option<&str>,
        #[case] emoji: &str,
        #[case] text: &str,
    ) {
        let msg = message(&run_event("completed", conclusion));
        assert_eq!(msg.channel, Channel::Test);
        assert_eq!(msg.kind, MessageKind::Notification);
        let headline = format!("{emoji} **Workflow CI: {text}**");
        assert!(msg.content.starts_with(&headline), "{}", msg.content);
        assert!(msg.content.contains("Status: completed"));
    }

    #[test]
    fn verdict_depends_only_on_conclusion() {
        let failure = Conclusion::Failure;
        assert_eq!(
            Verdict::of(Some(&failure)),
            Verdict {
                emoji: "❌",
                text: "Failed"
            }
        );
        let other = Conclusion::Other("neutral".to_owned());
        assert_eq!(Verdict::of(Some(&other)).text, "neutral");
    }

    #[rstest]
    #[case("queued")]
    #[case("in_progress")]
    fn running_workflow_is_a_progress_message(#[case] status: &str) {
        let msg = message(&run_event(status, None));
        assert_eq!(msg.channel, Channel::Test);
        assert_eq!(msg.kind, MessageKind::Progress);
        assert!(msg.content.contains("in progress"));
        assert!(msg.content.contains(&format!("Status: {status}")));
        assert!(!msg.content.contains("Conclusion"));
    }

    #[rstest]
    #[case("requested")]
    #[case("waiting")]
    #[case("pending")]
    fn other_run_statuses_are_ignored(#[case] status: &str) {
        assert_eq!(format(&run_event(status, None)).unwrap(), None);
    }

    #[test]
    fn workflow_run_message_layout() {
        let event = InboundEvent::decode("workflow_run", WORKFLOW_RUN.as_bytes()).unwrap();
        assert_eq!(
            message(&event).content,
            "✅ **Workflow Build: Successful**\n\
             Repository: Codertocat/Hello-World\n\
             Status: completed\n\
             Conclusion: success\n\
             Branch: main\n\
             Triggered by: push\n\
             https://github.com/Codertocat/Hello-World/actions/runs/30433642"
        );
    }

    #[rstest]
    #[case(Some("success"), "✅")]
    #[case(Some("failure"), "❌")]
    #[case(Some("cancelled"), "❌")]
    #[case(None, "❌")]
    fn job_emoji_is_check_only_on_success(#[case] conclusion: Option<&str>, #[case] emoji: &str) {
        let msg = message(&job_event("completed", conclusion));
        assert_eq!(msg.channel, Channel::Test);
        assert!(msg.content.starts_with(emoji), "{}", msg.content);
    }

    #[rstest]
    #[case("queued")]
    #[case("in_progress")]
    #[case("waiting")]
    fn unfinished_jobs_are_ignored(#[case] action: &str) {
        assert_eq!(format(&job_event(action, None)).unwrap(), None);
    }

    #[test]
    fn workflow_job_message_layout() {
        let event = InboundEvent::decode("workflow_job", WORKFLOW_JOB.as_bytes()).unwrap();
        assert_eq!(
            message(&event).content,
            "❌ **Workflow job completed**\n\
             Repository: Codertocat/Hello-World\n\
             Job: test\n\
             Status: completed\n\
             Conclusion: failure\n\
             Started: 2019-08-08T08:00:10Z\n\
             Completed: 2019-08-08T08:01:12Z\n\
             https://github.com/Codertocat/Hello-World/runs/2832853555"
        );
    }

    #[test]
    fn job_timestamps_are_passed_through() {
        let msg = message(&job_event("completed", Some("success")));
        assert!(msg.content.contains("Started: 2024-01-01T10:00:00Z"));
        assert!(msg.content.contains("Completed: 2024-01-01T10:05:00Z"));
    }

    #[rstest]
    #[case("success")]
    #[case("failure")]
    #[case("")]
    fn action_reports_go_to_test(#[case] status: &str) {
        let body = json!({"event": "workflow_dispatch", "status": status}).to_string();
        let msg = message(&InboundEvent::decode_action_report(body.as_bytes()).unwrap());
        assert_eq!(msg.channel, Channel::Test);
        assert_eq!(msg.kind, MessageKind::Notification);
        assert_eq!(
            msg.content,
            format!("🔄 **GitHub Action executed**\nEvent: workflow_dispatch\nStatus: {status}")
        );
    }

    #[test]
    fn ping_and_unhandled_produce_nothing() {
        assert_eq!(format(&InboundEvent::Ping).unwrap(), None);
        assert_eq!(
            format(&InboundEvent::Unhandled("issues".to_owned())).unwrap(),
            None
        );
    }
}
