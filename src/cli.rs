mod commands;
mod parser;
mod tracing;

pub(crate) use commands::{notify, preview};
pub(crate) use parser::{ChannelArgs, Cli, Commands, ServeArgs};
pub(crate) use tracing::init as init_tracing;
