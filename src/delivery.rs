//! Posting messages to Discord webhooks.

use reqwest::StatusCode;
use std::{sync::Arc, time::Duration};
use thiserror::Error;

use crate::config::ChannelConfig;
use crate::constants::USER_AGENT;
use crate::event::{Channel, DiscordMessage};

#[derive(Debug, Error)]
pub(crate) enum DeliveryError {
    #[error("no webhook URL configured for the {0} channel")]
    ChannelNotConfigured(Channel),
    #[error("Discord responded with {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("failed to reach Discord: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Client for the two configured Discord webhooks. Cheap to clone.
#[derive(Debug, Clone)]
pub(crate) struct DiscordClient {
    http: reqwest::Client,
    channels: Arc<ChannelConfig>,
}

impl DiscordClient {
    pub(crate) fn new(channels: ChannelConfig, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            channels: Arc::new(channels),
        })
    }

    /// Post `content` to `channel`’s webhook. A single attempt, never retried.
    pub(crate) async fn deliver(&self, channel: Channel, content: &str) -> Result<(), DeliveryError> {
        let url = self
            .channels
            .url(channel)
            .ok_or(DeliveryError::ChannelNotConfigured(channel))?;
        let response = self
            .http
            .post(url)
            .json(&DiscordMessage { content })
            .send()
            .await
            // reqwest errors carry the URL, which contains the webhook token
            .map_err(|e| DeliveryError::Transport(e.without_url()))?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(DeliveryError::UnexpectedStatus {
                status,
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
