use serde::de::DeserializeOwned;
use thiserror::Error;

mod action;
mod discord;
mod github;

pub(crate) use action::ActionReport;

pub(crate) use discord::{Channel, DiscordMessage, MessageKind, OutboundMessage};
pub(crate) use github::{
    Conclusion, PullRequestAction, PullRequestEvent, RunStatus, WorkflowJobEvent,
    WorkflowRunEvent,
};

pub(crate) const PING: &str = "ping";
pub(crate) const PULL_REQUEST: &str = "pull_request";
pub(crate) const WORKFLOW_RUN: &str = "workflow_run";
pub(crate) const WORKFLOW_JOB: &str = "workflow_job";
/// Not a GitHub event type. Names reports posted to the actions endpoint.
pub(crate) const ACTION_REPORT: &str = "action_report";

/// A webhook delivery, decoded according to its `X-GitHub-Event` header.
#[derive(Debug, Clone)]
pub(crate) enum InboundEvent {
    Ping,
    PullRequest(PullRequestEvent),
    WorkflowRun(WorkflowRunEvent),
    WorkflowJob(WorkflowJobEvent),
    ActionReport(ActionReport),
    /// Any event type this relay does not format. Its body is never decoded.
    Unhandled(String),
}

/// The body did not match the shape expected for its declared event type.
#[derive(Debug, Error)]
#[error("invalid {event} payload: {source}")]
pub(crate) struct DecodeError {
    pub(crate) event: &'static str,
    #[source]
    source: serde_json::Error,
}

impl InboundEvent {
    pub(crate) fn decode(event_type: &str, body: &[u8]) -> Result<Self, DecodeError> {
        match event_type {
            PING => Ok(Self::Ping),
            PULL_REQUEST => decode(PULL_REQUEST, body).map(Self::PullRequest),
            WORKFLOW_RUN => decode(WORKFLOW_RUN, body).map(Self::WorkflowRun),
            WORKFLOW_JOB => decode(WORKFLOW_JOB, body).map(Self::WorkflowJob),
            other => Ok(Self::Unhandled(other.to_owned())),
        }
    }

    /// Decode a body posted to the actions endpoint. There is no event header there.
    pub(crate) fn decode_action_report(body: &[u8]) -> Result<Self, DecodeError> {
        decode(ACTION_REPORT, body).map(Self::ActionReport)
    }

    /// The event type this was decoded as.
    pub(crate) fn kind(&self) -> &str {
        match self {
            Self::Ping => PING,
            Self::PullRequest(_) => PULL_REQUEST,
            Self::WorkflowRun(_) => WORKFLOW_RUN,
            Self::WorkflowJob(_) => WORKFLOW_JOB,
            Self::ActionReport(_) => ACTION_REPORT,
            Self::Unhandled(kind) => kind,
        }
    }

    /// The action or status that decides whether a message is produced.
    pub(crate) fn trigger(&self) -> Option<&str> {
        match self {
            Self::PullRequest(e) => Some(e.action.as_str()),
            Self::WorkflowRun(e) => Some(e.workflow_run.status.as_str()),
            Self::WorkflowJob(e) => Some(&e.action),
            Self::ActionReport(r) => Some(&r.status),
            Self::Ping | Self::Unhandled(_) => None,
        }
    }
}

fn decode<T: DeserializeOwned>(event: &'static str, body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|source| DecodeError { event, source })
}
