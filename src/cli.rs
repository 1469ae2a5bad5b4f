use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "halmi", version, about = "Busan caregiver catalog browser")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dataset directory holding items.json and address.json"
    )]
    pub data: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the visible subset for one-off filter criteria.
    Browse {
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        headcount: Option<u8>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// List district codes with display names and listing counts.
    Districts,
    /// Show one listing by id.
    Show {
        listing: String,
    },
    /// Check dataset integrity.
    Validate,
    /// Run an interactive catalog session (stdin or --script).
    Session {
        #[arg(long)]
        script: Option<PathBuf>,
    },
}
