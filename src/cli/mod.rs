pub mod entries;
pub mod light;
pub mod output;
pub mod setup;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ohmled",
    version,
    about = "Ohm-made LED stripe CLI - set up, control and poll stripes over HTTP"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (show HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a device by URL
    Setup {
        /// Base URL of the device (prompted for when omitted)
        #[arg(long, env = "OHMLED_URL")]
        url: Option<String>,
    },

    /// Manage configured devices
    #[command(subcommand)]
    Entries(entries::EntriesCommand),

    /// Raw device information
    Info {
        /// Device title, entry ID or URL
        device: Option<String>,
    },

    /// Current light state
    State {
        /// Device title, entry ID or URL
        device: Option<String>,
    },

    /// Turn the light on
    On(light::OnArgs),

    /// Turn the light off
    Off {
        /// Device title, entry ID or URL
        device: Option<String>,
    },

    /// Poll the light periodically
    Watch(light::WatchArgs),
}
