use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::holder_for;
use crate::render::format_state_text;

#[derive(Debug, clap::Args, Clone)]
pub struct WatchOptions {
    /// Print items in published order as a table instead of grouped by list
    #[arg(long)]
    pub flat: bool,
}

/// What a line typed on stdin asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Refresh,
    Quit,
}

fn parse_input(line: &str) -> Input {
    match line.trim() {
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Refresh,
    }
}

fn prompt() -> String {
    f!("{}\n", "[enter] refresh  [q] quit".bright_black())
}

pub async fn run(options: WatchOptions, global: crate::Global) -> Result<()> {
    let holder = holder_for(&global)?;
    let mut rx = holder.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let initial = rx.borrow_and_update().clone();
    print!("{}{}", format_state_text(&initial, options.flat), prompt());

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                print!("{}{}", format_state_text(&state, options.flat), prompt());
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    break;
                };
                match parse_input(&line) {
                    Input::Quit => break,
                    Input::Refresh => {
                        if global.verbose {
                            eprintln!("Refreshing...");
                        }
                        holder.refresh();
                    }
                }
            }
        }
    }

    log::debug!("watch finished, tearing down holder");
    drop(rx);
    drop(holder);

    Ok(())
}
