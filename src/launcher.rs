use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::sim::module;
use crate::sim::store::EntityKind;
use crate::{Action, Session};

/// Timer period used until the module load reports the configured one.
const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Parser, Debug)]
#[command(name = "driftcraft", about = "Entity drift demo")]
struct Args {
    /// Path to a JSON settings file; defaults are used when omitted.
    #[arg(long)]
    settings: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .thread_name("driftcraft")
        .enable_all()
        .build()
        .context("building the tokio runtime")?;

    runtime.block_on(event_loop(args))
}

/// Single-threaded event loop: one actor dispatching the module load, stdin
/// commands and the recurring advance-all timer. The timer runs for the life
/// of the process; the load future completes at most once.
async fn event_loop(args: Args) -> Result<()> {
    let mut session = Session::new();
    println!("{}", session.status());

    let load = module::load(args.settings.as_deref());
    tokio::pin!(load);
    let mut loading = true;

    let mut ticker = arm_ticker(DEFAULT_TICK_PERIOD);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            result = &mut load, if loading => {
                loading = false;
                session.complete_load(result);
                println!("{}", session.status());
                if let Some(period) = session.tick_period() {
                    ticker = arm_ticker(period);
                }
                print_entities(&session);
            }
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let command = line.trim();
                if command.is_empty() {
                    continue;
                }
                match parse_command(command) {
                    Some(Command::Action(action)) => {
                        session.handle_action(action);
                        print_entities(&session);
                    }
                    Some(Command::Quit) => break,
                    None => warn!("unknown command: {command:?}"),
                }
            }
            _ = ticker.tick() => {
                debug!("advance-all timer fired");
                session.handle_action(Action::AdvanceAll);
                print_entities(&session);
            }
        }
    }

    Ok(())
}

/// Arm the advance-all timer so its first tick lands one full period from
/// now rather than immediately.
fn arm_ticker(period: Duration) -> tokio::time::Interval {
    tokio::time::interval_at(tokio::time::Instant::now() + period, period)
}

enum Command {
    Action(Action),
    Quit,
}

fn parse_command(command: &str) -> Option<Command> {
    match command {
        "add" => Some(Command::Action(Action::AddEntity(None))),
        "add unit" => Some(Command::Action(Action::AddEntity(Some(EntityKind::Unit)))),
        "add vehicle" => Some(Command::Action(Action::AddEntity(Some(EntityKind::Vehicle)))),
        "move" => Some(Command::Action(Action::AdvanceAll)),
        "quit" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

/// Print the rendered entity list. Nothing is printed while the module is
/// still loading, rendering is skipped rather than failed.
fn print_entities(session: &Session) {
    if let Some(text) = session.render() {
        print!("{text}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_actions() {
        assert!(matches!(
            parse_command("add"),
            Some(Command::Action(Action::AddEntity(None)))
        ));
        assert!(matches!(
            parse_command("add unit"),
            Some(Command::Action(Action::AddEntity(Some(EntityKind::Unit))))
        ));
        assert!(matches!(
            parse_command("add vehicle"),
            Some(Command::Action(Action::AddEntity(Some(EntityKind::Vehicle))))
        ));
        assert!(matches!(
            parse_command("move"),
            Some(Command::Action(Action::AdvanceAll))
        ));
        assert!(matches!(parse_command("quit"), Some(Command::Quit)));
        assert!(parse_command("launch missiles").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_waits_a_full_period_before_first_tick() {
        let period = Duration::from_secs(1);
        let mut ticker = arm_ticker(period);

        // not ready at arm time
        assert!(
            tokio::time::timeout(Duration::ZERO, ticker.tick())
                .await
                .is_err()
        );

        tokio::time::advance(period).await;
        ticker.tick().await;
    }
}
