//! Command-line interface for logbook.
//!
//! This module provides the CLI structure for the `logbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{ConfigCommand, FlightsCommand, LicensesCommand, TasksCommand, TravelCommand};

use crate::logging::Verbosity;

/// logbook - Small record books for flights, licenses, tasks and trips
///
/// Each command loads a fixed sample book and runs the queries it supports.
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up a flight by number and show its duration
    Flights(FlightsCommand),

    /// Look up a license by id and check whether it is still valid
    Licenses(LicensesCommand),

    /// List all tasks and those due today
    Tasks(TasksCommand),

    /// Show the total duration of the itinerary
    Travel(TravelCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The file `config validate` should check, if that is the command.
    ///
    /// Prefers `--file`, then the global `--config`, then the default path.
    /// Validation must not depend on the configuration loading cleanly first.
    #[must_use]
    pub fn validate_target(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Config(ConfigCommand::Validate { file }) => Some(
                file.clone()
                    .or_else(|| self.config.clone())
                    .unwrap_or_else(crate::Config::default_config_path),
            ),
            _ => None,
        }
    }
}
