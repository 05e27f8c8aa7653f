//! `logbook` - CLI for the logbook record stores
//!
//! Each subcommand builds one of the sample record books and runs the
//! queries that book supports.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use serde_json::json;
use tracing::debug;

use logbook::cli::{
    Cli, Command, ConfigCommand, FlightsCommand, LicensesCommand, TasksCommand, TravelCommand,
};
use logbook::report::{format_duration, to_json};
use logbook::record::local_day;
use logbook::{demo, init_logging, Config, Task, Timed};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    // Validation loads its own file and reports failures instead of exiting
    if let Some(path) = cli.validate_target() {
        validate_config(path);
        return Ok(());
    }

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Flights(cmd) => handle_flights(&config, &cmd),
        Command::Licenses(cmd) => handle_licenses(&config, &cmd, Utc::now()),
        Command::Tasks(cmd) => handle_tasks(&config, &cmd, Utc::now()),
        Command::Travel(cmd) => handle_travel(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_flights(config: &Config, cmd: &FlightsCommand) -> anyhow::Result<()> {
    let flights = demo::flights();

    match flights.find(cmd.number.as_str()) {
        Ok(flight) => {
            if cmd.json || config.output.json {
                let view = json!({
                    "found": true,
                    "flight": flight,
                    "duration": format_duration(flight.duration()),
                });
                println!("{}", to_json(&view)?);
            } else {
                println!("Flight {} found", flight.number());
                println!("Duration: {}", format_duration(flight.duration()));
            }
        }
        Err(err) if err.is_not_found() => {
            if cmd.json || config.output.json {
                println!("{}", to_json(&json!({ "found": false, "number": cmd.number }))?);
            } else {
                println!("{err}");
            }
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_licenses(
    config: &Config,
    cmd: &LicensesCommand,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let licenses = demo::licenses(now);

    match licenses.find(&cmd.id) {
        Ok(license) => {
            let valid = license.is_valid_at(now);
            if cmd.json || config.output.json {
                let view = json!({ "found": true, "license": license, "valid": valid });
                println!("{}", to_json(&view)?);
            } else {
                println!("License: {}", license.name());
                println!(
                    "Expires: {}",
                    license.expires_at().format(&config.output.date_format)
                );
                println!("Is license valid? {valid}");
            }
        }
        Err(err) if err.is_not_found() => {
            if cmd.json || config.output.json {
                println!("{}", to_json(&json!({ "found": false, "id": cmd.id }))?);
            } else {
                println!("Error: {err}");
            }
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn handle_tasks(config: &Config, cmd: &TasksCommand, now: DateTime<Utc>) -> anyhow::Result<()> {
    let tasks = demo::tasks();
    let offset = config.utc_offset();
    let (today, due) = match cmd.today {
        Some(day) => (Some(day), tasks.due_on(day, offset)),
        None => (local_day(now, offset), tasks.due_today(now, offset)),
    };

    if cmd.json || config.output.json {
        let view = json!({ "today": today, "all": tasks.all(), "due_today": due });
        println!("{}", to_json(&view)?);
        return Ok(());
    }

    let print_task = |task: &Task| {
        println!(
            "Task ID: {}, Description: {}, Due Date: {}",
            task.id(),
            task.description(),
            task.due()
                .with_timezone(&offset)
                .format(&config.output.date_format)
        );
    };

    println!("All tasks:");
    tasks.iter().for_each(print_task);

    println!();
    match today {
        Some(day) => println!("Tasks due today ({}):", day.format(&config.output.date_format)),
        None => println!("Tasks due today:"),
    }
    due.into_iter().for_each(print_task);
    Ok(())
}

fn handle_travel(config: &Config, cmd: &TravelCommand) -> anyhow::Result<()> {
    let travels = demo::travels();
    let total = travels.total_duration();

    if cmd.json || config.output.json {
        let view = json!({ "legs": travels.all(), "total_duration": format_duration(total) });
        println!("{}", to_json(&view)?);
    } else {
        for travel in &travels {
            println!(
                "{} -> {}: {}",
                travel.source(),
                travel.destination(),
                format_duration(travel.duration())
            );
        }
        println!("Total duration of all travels: {}", format_duration(total));
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", to_json(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Clock]");
                println!("  UTC offset (min):   {}", config.clock.utc_offset_minutes);
                println!();
                println!("[Output]");
                println!("  JSON:               {}", config.output.json);
                println!("  Date format:        {}", config.output.date_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            validate_config(file.unwrap_or_else(Config::default_config_path));
        }
    }
    Ok(())
}

fn validate_config(path: PathBuf) {
    println!("Validating configuration: {}", path.display());
    match Config::load_from(Some(path)) {
        Ok(_) => println!("Configuration is valid."),
        Err(e) => println!("Configuration error: {e}"),
    }
}
