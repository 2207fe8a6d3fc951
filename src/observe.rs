//! Side channel for everything the dispatcher wants to report.
//!
//! The dispatcher never logs directly; it calls an [`Observer`], so tests can
//! swap in a recorder and production uses [`TracingObserver`].

use std::fmt::Debug;

use crate::delivery::DeliveryError;
use crate::dispatch::Ack;
use crate::event::{DecodeError, InboundEvent, OutboundMessage};

pub(crate) trait Observer: Debug + Send + Sync {
    fn received(&self, _event_type: &str, _delivery_id: Option<&str>, _body: &[u8]) {}
    fn decoded(&self, _event: &InboundEvent) {}
    fn rejected(&self, _event_type: &str, _error: &DecodeError) {}
    /// The event was handled without delivering anything.
    fn skipped(&self, _event: &InboundEvent, _ack: &Ack) {}
    fn delivered(&self, _message: &OutboundMessage, _outcome: &Result<(), DeliveryError>) {}
}

#[derive(Debug, Default)]
pub(crate) struct TracingObserver {
    log_payloads: bool,
}

impl TracingObserver {
    pub(crate) fn new(log_payloads: bool) -> Self {
        Self { log_payloads }
    }
}

impl Observer for TracingObserver {
    fn received(&self, event_type: &str, delivery_id: Option<&str>, body: &[u8]) {
        tracing::info!(event = event_type, delivery = delivery_id, "Received webhook");
        if self.log_payloads {
            tracing::debug!(
                event = event_type,
                delivery = delivery_id,
                "Payload: {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    fn decoded(&self, event: &InboundEvent) {
        tracing::debug!(
            event = event.kind(),
            trigger = event.trigger(),
            "Decoded webhook payload"
        );
    }

    fn rejected(&self, event_type: &str, error: &DecodeError) {
        tracing::warn!(event = event_type, "Rejecting webhook: {error}");
    }

    fn skipped(&self, event: &InboundEvent, ack: &Ack) {
        tracing::info!(event = event.kind(), trigger = event.trigger(), "{ack}");
    }

    fn delivered(&self, message: &OutboundMessage, outcome: &Result<(), DeliveryError>) {
        match outcome {
            Ok(()) => tracing::info!(channel = %message.channel, "Delivered message to Discord"),
            Err(error) => {
                tracing::error!(channel = %message.channel, "Failed to deliver message: {error}");
            }
        }
    }
}
