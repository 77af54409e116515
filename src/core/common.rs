//! Common types: colours, cells, requested actions and rejection reasons.

use core::fmt;

use thiserror::Error;

use crate::core::config::{BOARD_SIZE, CELL_COUNT};

/// Stone colour of a player. Black is colour 1 and always opens a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Color {
    Black = 1,
    White = 2,
}

impl Color {
    /// Colour that holds the turn when a match begins.
    pub const FIRST: Color = Color::Black;

    /// The other colour.
    pub const fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Zero-based slot used for per-player tables.
    pub const fn index(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// Raised when coordinates fall outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({x}, {z}) is outside the {size}x{size} board", size = BOARD_SIZE)]
pub struct CellError {
    pub x: u8,
    pub z: u8,
}

/// A board coordinate, guaranteed to lie on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Cell {
    x: u8,
    z: u8,
}

impl Cell {
    /// Validate raw coordinates.
    pub const fn new(x: u8, z: u8) -> Result<Cell, CellError> {
        if x < BOARD_SIZE && z < BOARD_SIZE {
            Ok(Cell { x, z })
        } else {
            Err(CellError { x, z })
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn z(self) -> u8 {
        self.z
    }

    /// Row-major bit index (`z * BOARD_SIZE + x`).
    pub const fn index(self) -> usize {
        self.z as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub const fn from_index(idx: usize) -> Option<Cell> {
        if idx < CELL_COUNT {
            Some(Cell {
                x: (idx % BOARD_SIZE as usize) as u8,
                z: (idx / BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    /// Neighbouring cell one step along `(dx, dz)`, or `None` past the edge.
    pub fn step(self, dx: i8, dz: i8) -> Option<Cell> {
        let x = self.x as i16 + dx as i16;
        let z = self.z as i16 + dz as i16;
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&z) {
            Some(Cell {
                x: x as u8,
                z: z as u8,
            })
        } else {
            None
        }
    }

    /// Every cell on the board in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }
}

impl TryFrom<(u8, u8)> for Cell {
    type Error = CellError;

    fn try_from((x, z): (u8, u8)) -> Result<Self, Self::Error> {
        Cell::new(x, z)
    }
}

impl From<Cell> for (u8, u8) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// What a participant asks the authority to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    PlaceTrap,
    PlacePiece,
}

/// A requested action at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub kind: ActionKind,
    pub cell: Cell,
}

impl Action {
    pub const fn piece(cell: Cell) -> Self {
        Self {
            kind: ActionKind::PlacePiece,
            cell,
        }
    }

    pub const fn trap(cell: Cell) -> Self {
        Self {
            kind: ActionKind::PlaceTrap,
            cell,
        }
    }
}

/// Why the authority dropped a request. Never sent back to the requester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("it is {turn}'s turn, not {requester}'s")]
    OutOfTurn { requester: Color, turn: Color },
    #[error("the match is already won by {0}")]
    MatchOver(Color),
    #[error("cell {0} is already occupied")]
    CellOccupied(Cell),
    #[error("{0} has no traps left")]
    TrapBudgetExhausted(Color),
    #[error("{color} already has a trap at {cell}")]
    TrapAlreadyPlaced { color: Color, cell: Cell },
}
