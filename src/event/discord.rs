use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

/// One of the two Discord destinations.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Channel {
    /// Development activity (pull requests)
    Dev,
    /// CI activity (workflow runs and jobs)
    Test,
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Channel::Dev => "dev",
            Channel::Test => "test",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MessageKind {
    Notification,
    /// Intermediate state of something that will notify again once finished.
    Progress,
}

/// A formatted message and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutboundMessage {
    pub channel: Channel,
    pub content: String,
    pub kind: MessageKind,
}

impl OutboundMessage {
    pub(crate) fn new(channel: Channel, content: String) -> Self {
        Self {
            channel,
            content,
            kind: MessageKind::Notification,
        }
    }

    pub(crate) fn progress(channel: Channel, content: String) -> Self {
        Self {
            kind: MessageKind::Progress,
            ..Self::new(channel, content)
        }
    }
}

/// Body of a Discord webhook execution.
#[derive(Serialize, Debug)]
pub(crate) struct DiscordMessage<'a> {
    pub content: &'a str,
}
