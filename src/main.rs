#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod constants;
mod delivery;
mod dispatch;
mod event;
#[cfg(test)]
mod fixtures;
mod format;
mod observe;
mod server;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    cli::init_tracing();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Serve(args) => {
            server::serve(args).await?;
        }
        cli::Commands::Notify(args) => {
            cli::notify(args).await?;
        }
        cli::Commands::Preview(args) => {
            println!("{}", cli::preview(&args).await?);
        }
    }
    Ok(())
}
