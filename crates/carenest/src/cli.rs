use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carenest")]
#[command(version)]
#[command(about = "Wound recovery tracking: observations, trends, alerts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory
    Init,

    /// Submit a raw analysis payload for a wound
    Submit {
        /// Wound identifier
        #[arg(short, long)]
        wound: String,

        /// Path to the payload JSON (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Show the observation series for a wound
    Series {
        /// Wound identifier
        wound: String,
    },

    /// Show derived trend metrics for a wound
    Trends {
        /// Wound identifier
        wound: String,
    },

    /// Show current alerts for a wound
    Alerts {
        /// Wound identifier
        wound: String,
    },

    /// Record a free-text patient log message
    Log {
        /// Message text
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Generate a progress report across wounds and patient logs
    Report,

    /// Show data directory and store status
    Status,

    /// Print version information
    Version,
}
