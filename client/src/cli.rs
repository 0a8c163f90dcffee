use std::{io, process::exit, sync::Arc};

use anyhow::{Context, bail};
use colored::Colorize;
use liblife::Position;
use tracing::warn;

use crate::{intent::Intent, state::State};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Intent(Intent),
    Show,
    Exit,
}

pub fn run_cli(state_arc: Arc<State>) {
    for line_res in io::stdin().lines() {
        let line = match line_res {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "console input closed");
                return;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Err(e) = handle_cmd(&state_arc, line.split_whitespace()) {
            warn!(command = %line, "command failed");
            eprintln!("{} {e:#}", "!".red());
        }
    }
}

fn handle_cmd<'a, I>(state: &State, args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match parse_cmd(args)? {
        Command::Intent(intent) => {
            let run_state = intent.apply(state)?;

            if matches!(intent, Intent::Start | Intent::Stop | Intent::ToggleRunning) {
                // Mirrors the button label: the action available next.
                println!("[{}]", run_state.label().bold());
            }
        }

        Command::Show => {
            let store = state.store();
            println!("generation {}", store.generation());
            println!("{}", store.grid());
        }

        Command::Exit => {
            state.scheduler().stop();
            exit(0);
        }
    }

    println!("{}", "OK".green());
    Ok(())
}

fn parse_cmd<'a, I>(mut args: I) -> anyhow::Result<Command>
where
    I: Iterator<Item = &'a str>,
{
    let command = match args.next().context("No command")? {
        "start" => Command::Intent(Intent::Start),
        "stop" => Command::Intent(Intent::Stop),
        "run" => Command::Intent(Intent::ToggleRunning),
        "random" => Command::Intent(Intent::Randomize),
        "clear" => Command::Intent(Intent::Clear),

        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;
            Command::Intent(Intent::Step(times))
        }

        "toggle" => {
            let row = args.next().context("missing row")?.parse::<usize>()?;
            let col = args.next().context("missing col")?.parse::<usize>()?;
            Command::Intent(Intent::ToggleCell(Position::new(row, col)))
        }

        "show" => Command::Show,
        "exit" => Command::Exit,

        _ => bail!("Unknown command"),
    };

    Ok(command)
}
