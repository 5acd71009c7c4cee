//! Desk Assistant CLI - command-line interface for the ESP32 Smart Desktop Assistant.
//!
//! Saves the device address, probes the device and pushes clock, alarm,
//! timer and reminder settings over its local HTTP API.

mod cli;
mod commands;
mod device;
mod error;
mod output;

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{}", hint);
            }
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "desk_assistant_core=debug,desk_assistant_cli=debug"
    } else {
        "error"
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = device::open_client(cli.data_dir, cli.timeout).await?;

    match cli.command {
        Commands::Connect(args) => commands::run_connect(&client, args, cli.json).await,
        Commands::Address => commands::run_address(&client, cli.json),
        Commands::Probe => commands::run_probe(&client, cli.json).await,
        Commands::Status(args) => commands::run_status(&client, args, cli.json).await,
        Commands::Time(args) => commands::run_time(&client, args, cli.json).await,
        Commands::Alarm(args) => commands::run_alarm(&client, args, cli.json).await,
        Commands::Timer(args) => commands::run_timer(&client, args, cli.json).await,
        Commands::Reminder(args) => commands::run_reminder(&client, args, cli.json).await,
    }
}
