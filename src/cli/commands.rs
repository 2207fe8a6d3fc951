//! One-shot subcommands. `serve` lives in [`crate::server`].

use anyhow::{bail, Context, Result};
use std::time::Duration;

use super::parser::{NotifyArgs, PreviewArgs};
use crate::config::ChannelConfig;
use crate::delivery::DiscordClient;
use crate::event::{InboundEvent, ACTION_REPORT};
use crate::format::format;

/// Send `args.text` to a channel once. A failed delivery is an error.
pub(crate) async fn notify(args: NotifyArgs) -> Result<()> {
    let channels = ChannelConfig::from_args(args.channels);
    let client = DiscordClient::new(channels, Duration::from_secs(args.delivery_timeout))?;
    client
        .deliver(args.channel, &args.text)
        .await
        .with_context(|| format!("failed to notify the {} channel", args.channel))?;
    tracing::info!(channel = %args.channel, "Message delivered");
    Ok(())
}

pub(crate) async fn preview(args: &PreviewArgs) -> Result<String> {
    let body = tokio::fs::read(&args.payload)
        .await
        .with_context(|| format!("failed to read {}", args.payload.display()))?;
    render_preview(&args.event, &body)
}

/// What the relay would post for a payload of type `event_type`.
fn render_preview(event_type: &str, body: &[u8]) -> Result<String> {
    let event = if event_type == ACTION_REPORT {
        InboundEvent::decode_action_report(body)?
    } else {
        InboundEvent::decode(event_type, body)?
    };
    if let InboundEvent::Unhandled(kind) = &event {
        bail!("Event type {kind} is not handled");
    }
    Ok(match format(&event)? {
        Some(message) => format!(
            "# {} channel ({:?})\n{}",
            message.channel, message.kind, message.content
        ),
        None => format!(
            "No message for {} ({})",
            event.kind(),
            event.trigger().unwrap_or("-")
        ),
    })
}
