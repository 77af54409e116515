#![cfg(feature = "std")]

//! Terminal presentation: board rendering and the alert banner.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::core::{Cell, Color, ALERT_DURATION_SECS, BOARD_SIZE};
use crate::replica::Replica;

/// Ephemeral alert line. Showing a new alert replaces the old text and
/// restarts the countdown.
#[derive(Debug, Clone)]
pub struct AlertBanner {
    message: Option<String>,
    expires_at: Option<Instant>,
    duration: Duration,
}

impl Default for AlertBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertBanner {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_secs(ALERT_DURATION_SECS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            message: None,
            expires_at: None,
            duration,
        }
    }

    /// Show `message` from `now` on, cancelling any running countdown.
    pub fn display(&mut self, message: impl Into<String>, now: Instant) {
        self.message = Some(message.into());
        self.expires_at = Some(now + self.duration);
    }

    /// Text visible at `now`; clears it once the countdown has run out.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if matches!(self.expires_at, Some(deadline) if now >= deadline) {
            self.message = None;
            self.expires_at = None;
        }
        self.message.as_deref()
    }
}

fn stone(color: Color) -> char {
    match color {
        Color::Black => 'X',
        Color::White => 'O',
    }
}

/// Render the replica's board: stones, plus the viewer's own traps.
pub fn render_board(view: &Replica) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x) as char);
    }
    out.push('\n');
    for z in 0..BOARD_SIZE {
        let _ = write!(out, "  {:2}", z + 1);
        for x in 0..BOARD_SIZE {
            let ch = match Cell::new(x, z) {
                Ok(cell) => match view.board().get(cell) {
                    Some(color) => stone(color),
                    None if view.my_traps().contains(cell) => '^',
                    None => '.',
                },
                Err(_) => '?',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out.push_str("    Legend: X=Black  O=White  ^=your trap  .=empty\n");
    out
}

/// One-line status: own colour, turn, traps left.
pub fn render_status(view: &Replica) -> String {
    let me = view
        .color()
        .map_or_else(|| "?".to_string(), |c| c.to_string());
    let role = if view.is_host() { "host" } else { "guest" };
    format!(
        "You ({}) play {} | turn: {} | traps left: {}",
        role,
        me,
        view.turn(),
        view.traps_remaining()
    )
}

pub fn print_replica_view(view: &Replica) {
    println!("\n{}", render_status(view));
    print!("{}", render_board(view));
}
