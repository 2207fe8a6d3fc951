use anyhow::Result;
use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;

use crate::cli::ServeArgs;
use crate::config::ChannelConfig;
use crate::delivery::DiscordClient;
use crate::dispatch::Dispatcher;
use crate::observe::TracingObserver;

mod listener;

pub(crate) async fn serve(args: ServeArgs) -> Result<()> {
    let channels = ChannelConfig::from_args(args.channels);
    let client = DiscordClient::new(channels, Duration::from_secs(args.delivery_timeout))?;
    let dispatcher = Dispatcher::new(client, Arc::new(TracingObserver::new(args.log_payloads)))
        .forward_progress(args.forward_progress);

    let service = listener::listen(dispatcher);
    let addr = format!("{}:{}", args.host, args.port);
    let tcp_listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(tcp_listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {error}");
            std::future::pending::<()>().await;
        }
    };
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutting down, draining open requests");
}
