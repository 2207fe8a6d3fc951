pub(crate) const WEBHOOK_PATH: &str = "/webhook/github";
/// Reports posted by workflow steps themselves, not by GitHub.
pub(crate) const ACTIONS_PATH: &str = "/webhook/actions";
pub(crate) const SMOKE_TEST_PATH: &str = "/test";

pub(crate) const EVENT_HEADER: &str = "x-github-event";
pub(crate) const DELIVERY_HEADER: &str = "x-github-delivery";

pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// systemd credentials consulted when a webhook URL is not passed via CLI or env.
pub(crate) const DEV_WEBHOOK_CREDENTIAL: &str = "discord_dev_webhook_url";
pub(crate) const TEST_WEBHOOK_CREDENTIAL: &str = "discord_test_webhook_url";
