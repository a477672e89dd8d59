//! Command-line flags.

use clap::Parser;

use crate::config::schema::DEFAULT_LISTEN_ADDRESS;

#[derive(Debug, Clone, Parser)]
#[command(name = "feed-relay")]
#[command(version, about = "Relay your unread Pocket feed over local HTTP", long_about = None)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_LISTEN_ADDRESS)]
    pub listen: String,
}
