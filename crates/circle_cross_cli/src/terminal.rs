//! Interactive terminal game.
//!
//! Reads commands line by line from stdin and prints every snapshot the
//! session publishes. The computer's reply waits out the configured delay,
//! racing stdin so that a reset typed in the meantime cancels it.

use anyhow::{Context, Result, anyhow, bail};
use circle_cross::{
    ComputerTurn, Difficulty, GameSession, InvalidMove, SessionConfig, SessionEvent,
};
use std::str::FromStr;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tokio::time::{Duration, Instant, sleep_until};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9        place your mark (cells numbered left to right, top to bottom)
  r          reset the game
  m          toggle between human-vs-human and human-vs-computer
  d <level>  set difficulty (easy, normal, hard)
  h          show this help
  q          quit";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Zero-based cell index.
    Cell(usize),
    /// Start over.
    Reset,
    /// Switch mode.
    ToggleMode,
    /// Change computer strength.
    SetDifficulty(Difficulty),
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl FromStr for Input {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| anyhow!("Empty input"))?;
        let input = match command.to_ascii_lowercase().as_str() {
            "r" | "reset" => Input::Reset,
            "m" | "mode" => Input::ToggleMode,
            "h" | "help" | "?" => Input::Help,
            "q" | "quit" => Input::Quit,
            "d" | "difficulty" => {
                let level = words.next().context("Usage: d <easy|normal|hard>")?;
                let difficulty = Difficulty::from_str(level)
                    .map_err(|_| anyhow!("Unknown difficulty '{level}'"))?;
                Input::SetDifficulty(difficulty)
            }
            cell => match cell.parse::<usize>() {
                Ok(n @ 1..=9) => Input::Cell(n - 1),
                Ok(n) => bail!("Cell {n} is out of range (1-9)"),
                Err(_) => bail!("Unknown command '{cell}' (h for help)"),
            },
        };
        if words.next().is_some() {
            bail!("Unexpected trailing input in '{}'", line.trim());
        }
        Ok(input)
    }
}

/// Computer move waiting for its delay to pass.
#[derive(Debug, Clone, Copy)]
struct Scheduled {
    ticket: ComputerTurn,
    deadline: Instant,
}

/// Runs the interactive game until `q` or end of input.
#[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
pub async fn play(config: SessionConfig) -> Result<()> {
    let mut session = GameSession::from_config(&config);
    let (tx, mut events) = unbounded_channel();
    session.subscribe(tx);

    let delay = Duration::from_millis(*config.computer_delay_ms());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut scheduled: Option<Scheduled> = None;

    println!("{HELP}\n");
    print_status(&session);
    println!("{}", session.snapshot().render());

    loop {
        let line = match scheduled {
            Some(pending) => {
                tokio::select! {
                    _ = sleep_until(pending.deadline) => {
                        scheduled = None;
                        session.play_computer_turn(pending.ticket);
                        drain(&mut events);
                        continue;
                    }
                    line = lines.next_line() => line?,
                }
            }
            None => lines.next_line().await?,
        };

        let Some(line) = line else {
            debug!("End of input");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match input {
            Input::Cell(index) => match session.submit_move(index) {
                Ok(Some(ticket)) => {
                    scheduled = Some(Scheduled {
                        ticket,
                        deadline: Instant::now() + delay,
                    });
                }
                Ok(None) => {}
                Err(InvalidMove::NotYourTurn) => println!("Wait for the computer to move."),
                Err(e) => println!("{e}"),
            },
            Input::Reset => {
                scheduled = None;
                session.reset();
            }
            Input::ToggleMode => {
                scheduled = None;
                session.set_mode(session.mode().toggled());
                print_status(&session);
            }
            Input::SetDifficulty(difficulty) => {
                scheduled = None;
                session.set_difficulty(difficulty);
                print_status(&session);
            }
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }
        drain(&mut events);
    }

    info!("Leaving game");
    Ok(())
}

fn print_status(session: &GameSession) {
    println!(
        "Mode: {}, difficulty: {} ({})",
        session.mode(),
        session.difficulty(),
        session.policy_name()
    );
}

fn drain(events: &mut UnboundedReceiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        if matches!(event, SessionEvent::Reset(_)) {
            println!("\nNew game");
        }
        println!("\n{}", event.snapshot().render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!("1".parse::<Input>().unwrap(), Input::Cell(0));
        assert_eq!(" 9 ".parse::<Input>().unwrap(), Input::Cell(8));
    }

    #[test]
    fn test_out_of_range_cells_rejected() {
        assert!("0".parse::<Input>().is_err());
        assert!("10".parse::<Input>().is_err());
    }

    #[test]
    fn test_commands() {
        assert_eq!("r".parse::<Input>().unwrap(), Input::Reset);
        assert_eq!("M".parse::<Input>().unwrap(), Input::ToggleMode);
        assert_eq!("q".parse::<Input>().unwrap(), Input::Quit);
        assert_eq!(
            "d hard".parse::<Input>().unwrap(),
            Input::SetDifficulty(Difficulty::Hard)
        );
    }

    #[test]
    fn test_bad_difficulty_and_garbage() {
        assert!("d".parse::<Input>().is_err());
        assert!("d impossible".parse::<Input>().is_err());
        assert!("hello".parse::<Input>().is_err());
        assert!("5 6".parse::<Input>().is_err());
    }
}
