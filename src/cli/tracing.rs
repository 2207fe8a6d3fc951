use tracing::Level;
use tracing_subscriber::{filter::Targets, prelude::*};

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Which log lines are kept. The relay's own target is at INFO, except for
/// payload dumps from the observer, which are DEBUG and only emitted with
/// `--log-payloads`.
fn filter() -> Targets {
    Targets::new()
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("tower_http::trace::on_request", Level::DEBUG)
        .with_target("tower_http::trace::on_response", Level::DEBUG)
        .with_target(CRATE_TARGET, Level::INFO)
        .with_target(format!("{CRATE_TARGET}::observe"), Level::DEBUG)
        // connection churn towards Discord
        .with_target("hyper_util", Level::WARN)
        .with_target("reqwest", Level::WARN)
        .with_default(Level::INFO)
}

pub(crate) fn init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter())
        .init();
}
