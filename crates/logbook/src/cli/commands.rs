//! CLI command definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

/// Flight lookup arguments.
#[derive(Debug, Args)]
pub struct FlightsCommand {
    /// Flight number to look up
    #[arg(short, long, default_value = "ABC123")]
    pub number: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// License lookup arguments.
#[derive(Debug, Args)]
pub struct LicensesCommand {
    /// License id to look up
    #[arg(short, long, default_value_t = 1)]
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Task listing arguments.
#[derive(Debug, Args)]
pub struct TasksCommand {
    /// Day to treat as today (e.g. "2022-01-15"); defaults to the current date
    #[arg(short, long, value_name = "DATE")]
    pub today: Option<NaiveDate>,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Itinerary arguments.
#[derive(Debug, Args)]
pub struct TravelCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
