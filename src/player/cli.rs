use std::io::{self, BufRead, Write};
use std::time::Instant;

use rand::rngs::SmallRng;

use crate::core::{Action, Cell, RematchChoice, BOARD_SIZE};
use crate::protocol::Message;
use crate::replica::Replica;
use crate::ui::{print_replica_view, AlertBanner};

use super::Player;

/// A human at the terminal.
pub struct CliPlayer {
    alert: AlertBanner,
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl CliPlayer {
    pub fn new() -> Self {
        Self {
            alert: AlertBanner::new(),
        }
    }
}

/// `A5` style label for a cell: column letter is `x`, row number is `z + 1`.
pub fn cell_label(cell: Cell) -> String {
    format!("{}{}", (b'A' + cell.x()) as char, cell.z() + 1)
}

/// Parse `A5`-style input into a cell.
pub fn parse_cell(input: &str) -> Result<Cell, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let x = (col_ch as u8).wrapping_sub(b'A');
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: u8 = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Cell::new(x, row - 1).map_err(|e| e.to_string())
}

/// What a line typed at the move prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
}

/// Parse a move prompt line: `A5` places a stone, `t A5` or `trap A5` hides a trap.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(first) = parts.next() else {
        return Err("Empty input".to_string());
    };
    let command = match first.to_ascii_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        "t" | "trap" => {
            let target = parts.next().ok_or("Missing trap coordinates (e.g., t A5)")?;
            Command::Act(Action::trap(parse_cell(target)?))
        }
        _ => Command::Act(Action::piece(parse_cell(first)?)),
    };
    if parts.next().is_some() {
        return Err("Unexpected extra input".to_string());
    }
    Ok(command)
}

fn read_line() -> Option<String> {
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  A5       place a stone at column A, row 5");
    println!("  t A5     hide a trap at A5 (invisible to your opponent)");
    println!("  help     show this text");
    println!("  quit     leave the session");
    println!("Five in a row (any direction) wins. Stepping on a public or an");
    println!("opponent trap removes some of your own stones.\n");
}

impl Player for CliPlayer {
    fn choose_action(&mut self, _rng: &mut SmallRng, view: &Replica) -> Option<Action> {
        print_replica_view(view);
        if let Some(text) = self.alert.current(Instant::now()) {
            println!("  !! {}", text);
        }
        loop {
            print!("\nYour move (e.g. A5, t A5, help): ");
            let line = read_line()?;
            match parse_command(&line) {
                Ok(Command::Act(action)) => return Some(action),
                Ok(Command::Help) => print_help(),
                Ok(Command::Quit) => return None,
                Err(e) => println!("✗ {}", e),
            }
        }
    }

    fn choose_rematch(&mut self, _view: &Replica) -> Option<RematchChoice> {
        loop {
            print!("\nPlay again? [k]eep colours / [s]wap colours / [q]uit: ");
            let line = read_line()?;
            match line.trim().to_ascii_lowercase().as_str() {
                "k" | "keep" => return Some(RematchChoice::Keep),
                "s" | "swap" => return Some(RematchChoice::Swap),
                "q" | "quit" => return None,
                other => println!("✗ Unknown choice '{}'", other),
            }
        }
    }

    fn handle_message(&mut self, view: &Replica, msg: &Message) {
        match msg {
            Message::MatchStarted { .. } => {
                println!(
                    "\n=== Match {} begins, you play {} ===",
                    view.matches_seen(),
                    view.color().map_or_else(|| "?".to_string(), |c| c.to_string())
                );
            }
            Message::TrapAlert { message } => {
                self.alert.display(message.clone(), Instant::now());
                println!("\n  !! {}", message);
            }
            Message::PieceSpawned { cell, color } => {
                println!("{} plays {}", color, cell_label(*cell));
            }
            Message::WinnerSet { color } => {
                print_replica_view(view);
                if view.color() == Some(*color) {
                    println!("\n*** VICTORY! {} wins ***", color);
                } else {
                    println!("\n*** DEFEAT - {} wins ***", color);
                }
                if !view.is_host() {
                    println!("Waiting for the host to decide on a rematch...");
                }
            }
            Message::TurnChanged { color } if view.color() != Some(*color) => {
                println!("Waiting for {}...", color);
            }
            _ => {}
        }
    }

    fn handle_invalid_action(&mut self, view: &Replica, action: Action) {
        if !view.board().is_empty(action.cell) {
            println!("✗ {} is already taken", cell_label(action.cell));
        } else if view.traps_remaining() == 0 {
            println!("✗ You have no traps left");
        } else {
            println!("✗ You already have a trap at {}", cell_label(action.cell));
        }
    }
}
