use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::event::Channel;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start web hook server
    Serve(ServeArgs),
    /// Send a single message to a Discord channel
    Notify(NotifyArgs),
    /// Print the message a webhook payload would produce, without sending it
    Preview(PreviewArgs),
}

/// Discord webhook URLs. Unset URLs are read from systemd credentials, if available.
#[derive(Args, Debug, Default)]
pub(crate) struct ChannelArgs {
    /// Webhook URL of the development channel (pull requests)
    #[arg(long, env = "DISCORD_DEV_WEBHOOK_URL", hide_env_values = true)]
    pub(crate) dev_webhook_url: Option<String>,
    /// Webhook URL of the test channel (workflow runs and jobs)
    #[arg(long, env = "DISCORD_TEST_WEBHOOK_URL", hide_env_values = true)]
    pub(crate) test_webhook_url: Option<String>,
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// IP to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub(crate) host: String,
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub(crate) port: u16,
    #[command(flatten)]
    pub(crate) channels: ChannelArgs,
    /// Timeout for a single Discord delivery
    #[arg(long, env = "DELIVERY_TIMEOUT", value_name = "SECONDS", default_value_t = 10)]
    pub(crate) delivery_timeout: u64,
    /// Also forward messages for queued and running workflows
    #[arg(long, env = "FORWARD_PROGRESS")]
    pub(crate) forward_progress: bool,
    /// Log full webhook payloads (at debug level)
    #[arg(long, env = "LOG_PAYLOADS")]
    pub(crate) log_payloads: bool,
}

#[derive(Args)]
pub(crate) struct NotifyArgs {
    /// Channel to post to
    #[arg(long, short, value_enum)]
    pub(crate) channel: Channel,
    /// Message content
    pub(crate) text: String,
    #[command(flatten)]
    pub(crate) channels: ChannelArgs,
    /// Timeout for the Discord delivery
    #[arg(long, env = "DELIVERY_TIMEOUT", value_name = "SECONDS", default_value_t = 10)]
    pub(crate) delivery_timeout: u64,
}

#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// GitHub event type, as sent in the X-GitHub-Event header
    #[arg(long, short)]
    pub(crate) event: String,
    /// File containing the webhook payload
    pub(crate) payload: PathBuf,
}
