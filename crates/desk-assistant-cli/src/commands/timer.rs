//! Countdown timer commands.

use std::future::Future;
use std::time::Duration;

use desk_assistant_core::types::{TimerAction, TimerConfig};

use crate::cli::{StatusSection, TimerArgs, TimerCommands, TimerDurationArgs, TimerWatchArgs};
use crate::commands::status::show_status;
use crate::device::{ensure_connected, Client};
use crate::error::CliError;
use crate::output::{get_formatter, OutputFormatter};

/// Run the timer command
pub async fn run_timer(client: &Client, args: TimerArgs, json: bool) -> Result<(), CliError> {
    match args.command {
        TimerCommands::Show => show_status(client, StatusSection::Timer, json).await,
        TimerCommands::Start(args) => send_action(client, TimerAction::Start, args, json).await,
        TimerCommands::Stop(args) => send_action(client, TimerAction::Stop, args, json).await,
        TimerCommands::Reset(args) => send_action(client, TimerAction::Reset, args, json).await,
        TimerCommands::Watch(args) => {
            let formatter = get_formatter(json);
            run_watch(client, args, formatter.as_ref()).await
        }
    }
}

async fn send_action(
    client: &Client,
    action: TimerAction,
    duration: TimerDurationArgs,
    json: bool,
) -> Result<(), CliError> {
    let formatter = get_formatter(json);
    let timer = TimerConfig::new(duration.hours, duration.minutes, duration.seconds, action)?;

    let address = ensure_connected(client).await?;
    let response = client.set_timer(&timer).await?;

    let operation = format!(
        "timer {} {:02}:{:02}:{:02}",
        action.as_str(),
        timer.hours,
        timer.minutes,
        timer.seconds
    );
    println!("{}", formatter.format_ack(&address, &operation, &response));

    Ok(())
}

/// Poll the status until the countdown stops or Ctrl+C is pressed.
async fn run_watch(
    client: &Client,
    args: TimerWatchArgs,
    formatter: &dyn OutputFormatter,
) -> Result<(), CliError> {
    watch_until(client, args.interval, formatter, tokio::signal::ctrl_c()).await
}

/// Poll every `interval_secs` until the timer stops running.
///
/// `shutdown` is raced against the probe, the wait between ticks and every
/// status request.
async fn watch_until<F: Future>(
    client: &Client,
    interval_secs: u64,
    formatter: &dyn OutputFormatter,
    shutdown: F,
) -> Result<(), CliError> {
    if interval_secs == 0 {
        return Err(CliError::InvalidArgument(
            "Polling interval must be at least 1 second".to_string(),
        ));
    }

    tokio::pin!(shutdown);

    tokio::select! {
        _ = &mut shutdown => return Ok(()),
        res = ensure_connected(client) => { res?; }
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));

    loop {
        let poll = async {
            ticker.tick().await;
            client.get_status().await
        };

        let status = tokio::select! {
            _ = &mut shutdown => {
                tracing::debug!("Timer watch interrupted");
                return Ok(());
            }
            res = poll => res?,
        };

        println!("{}", formatter.format_timer_tick(&status.timer));

        if !status.timer.running {
            return Ok(());
        }
    }
}
