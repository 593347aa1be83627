use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oox")]
#[command(about = "Cognitive Function Hierarchy Calculator")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full calculation: hierarchy order plus health summary
    Calculate {
        /// Request JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Pretty-print the response JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the hierarchy derived from the matches
    Order {
        /// Request JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Emit JSON instead of the numbered listing
        #[arg(long)]
        json: bool,
    },

    /// Show the tier assignment derived from the hierarchy
    Tiers {
        /// Request JSON file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Override a tier, e.g. --set Fe=High (repeatable)
        #[arg(long = "set", value_name = "CODE=TIER")]
        set: Vec<String>,
    },
}
