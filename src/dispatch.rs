//! Decode → format → deliver for a single webhook delivery or action report.

use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

use crate::delivery::DiscordClient;
use crate::event::{Channel, DecodeError, InboundEvent, MessageKind, ACTION_REPORT};
use crate::format::format;
use crate::observe::Observer;

/// How a delivery was handled. Every variant is acknowledged with a 200.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Ack {
    Pong,
    Unhandled(String),
    /// The action/status is not one we announce.
    Ignored { event: String, trigger: String },
    /// A progress message was produced but forwarding progress is disabled.
    InProgress,
    Delivered(Channel),
    /// Delivery was attempted and failed. Reported to the sender like success.
    DeliveryFailed(Channel),
}

impl Display for Ack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ack::Pong => write!(f, "pong"),
            Ack::Unhandled(event) => write!(f, "unhandled event type: {event}"),
            Ack::Ignored { event, trigger } => write!(f, "ignored {event} ({trigger})"),
            Ack::InProgress => write!(f, "workflow in progress, not forwarded"),
            Ack::Delivered(_) | Ack::DeliveryFailed(_) => write!(f, "event processed"),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum DispatchError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("failed to render message: {0}")]
    Render(#[from] askama::Error),
}

#[derive(Debug, Clone)]
pub(crate) struct Dispatcher {
    client: DiscordClient,
    observer: Arc<dyn Observer>,
    forward_progress: bool,
}

impl Dispatcher {
    pub(crate) fn new(client: DiscordClient, observer: Arc<dyn Observer>) -> Self {
        Self {
            client,
            observer,
            forward_progress: false,
        }
    }

    /// Also deliver messages about queued and running workflows.
    pub(crate) fn forward_progress(mut self, forward: bool) -> Self {
        self.forward_progress = forward;
        self
    }

    pub(crate) async fn dispatch(
        &self,
        event_type: &str,
        delivery_id: Option<&str>,
        body: &[u8],
    ) -> Result<Ack, DispatchError> {
        self.observer.received(event_type, delivery_id, body);
        let event = InboundEvent::decode(event_type, body).inspect_err(|error| {
            self.observer.rejected(event_type, error);
        })?;
        self.forward(event).await
    }

    /// Handle a report posted to the actions endpoint.
    pub(crate) async fn dispatch_action(
        &self,
        delivery_id: Option<&str>,
        body: &[u8],
    ) -> Result<Ack, DispatchError> {
        self.observer.received(ACTION_REPORT, delivery_id, body);
        let event = InboundEvent::decode_action_report(body).inspect_err(|error| {
            self.observer.rejected(ACTION_REPORT, error);
        })?;
        self.forward(event).await
    }

    async fn forward(&self, event: InboundEvent) -> Result<Ack, DispatchError> {
        self.observer.decoded(&event);

        let Some(message) = format(&event)? else {
            let ack = match &event {
                InboundEvent::Ping => Ack::Pong,
                InboundEvent::Unhandled(kind) => Ack::Unhandled(kind.clone()),
                _ => Ack::Ignored {
                    event: event.kind().to_owned(),
                    trigger: event.trigger().unwrap_or_default().to_owned(),
                },
            };
            self.observer.skipped(&event, &ack);
            return Ok(ack);
        };
        if message.kind == MessageKind::Progress && !self.forward_progress {
            self.observer.skipped(&event, &Ack::InProgress);
            return Ok(Ack::InProgress);
        }

        let outcome = self.client.deliver(message.channel, &message.content).await;
        self.observer.delivered(&message, &outcome);
        Ok(match outcome {
            Ok(()) => Ack::Delivered(message.channel),
            Err(_) => Ack::DeliveryFailed(message.channel),
        })
    }
}
