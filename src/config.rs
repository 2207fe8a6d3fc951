use secrecy::{ExposeSecret, SecretString};

use crate::cli::ChannelArgs;
use crate::constants::{DEV_WEBHOOK_CREDENTIAL, TEST_WEBHOOK_CREDENTIAL};
use crate::event::Channel;
use crate::utils::get_credential;

/// Discord webhook URLs per channel. An empty URL disables its channel.
///
/// The URLs embed the webhook token, so they stay wrapped and are never logged.
#[derive(Debug, Clone)]
pub(crate) struct ChannelConfig {
    dev: SecretString,
    test: SecretString,
}

impl ChannelConfig {
    #[cfg(test)]
    pub(crate) fn new(dev: impl Into<String>, test: impl Into<String>) -> Self {
        Self {
            dev: SecretString::new(dev.into()),
            test: SecretString::new(test.into()),
        }
    }

    /// Resolve URLs from CLI/env, falling back to systemd credentials.
    /// Channels without any source end up disabled.
    pub(crate) fn from_args(args: ChannelArgs) -> Self {
        let config = Self {
            dev: resolve(args.dev_webhook_url, Channel::Dev, DEV_WEBHOOK_CREDENTIAL),
            test: resolve(args.test_webhook_url, Channel::Test, TEST_WEBHOOK_CREDENTIAL),
        };
        for channel in [Channel::Dev, Channel::Test] {
            if config.url(channel).is_none() {
                tracing::warn!(%channel, "No webhook URL configured, channel is disabled");
            }
        }
        config
    }

    /// The webhook URL for `channel`, or `None` if the channel is disabled.
    pub(crate) fn url(&self, channel: Channel) -> Option<&str> {
        let url = match channel {
            Channel::Dev => &self.dev,
            Channel::Test => &self.test,
        }
        .expose_secret();
        (!url.is_empty()).then_some(url.as_str())
    }
}

fn resolve(url: Option<String>, channel: Channel, credential: &str) -> SecretString {
    if let Some(url) = url {
        return SecretString::new(url);
    }
    get_credential(credential).unwrap_or_else(|error| {
        tracing::debug!(%channel, "No {credential} credential: {error}");
        SecretString::new(String::new())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_disables_channel() {
        let config = ChannelConfig::new("https://discord.test/api/webhooks/1/a", "");
        assert_eq!(
            config.url(Channel::Dev),
            Some("https://discord.test/api/webhooks/1/a")
        );
        assert_eq!(config.url(Channel::Test), None);
    }

    #[test]
    fn debug_output_hides_urls() {
        let config = ChannelConfig::new("https://discord.test/api/webhooks/1/token", "");
        assert!(!format!("{config:?}").contains("token"));
    }

    #[test]
    fn from_args_prefers_explicit_urls() {
        let args = ChannelArgs {
            dev_webhook_url: Some("https://discord.test/dev".to_owned()),
            test_webhook_url: Some(String::new()),
        };
        let config = ChannelConfig::from_args(args);
        assert_eq!(config.url(Channel::Dev), Some("https://discord.test/dev"));
        assert_eq!(config.url(Channel::Test), None);
    }

    #[test]
    fn from_args_without_sources_disables_channels() {
        temp_env::with_var_unset("CREDENTIALS_DIRECTORY", || {
            let config = ChannelConfig::from_args(ChannelArgs::default());
            assert_eq!(config.url(Channel::Dev), None);
            assert_eq!(config.url(Channel::Test), None);
        });
    }
}
