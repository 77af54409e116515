//! Board ownership and the two trap layers.

use crate::core::bitboard::CellSet;
use crate::core::common::{Cell, Color};

/// Stone ownership per cell, one [`CellSet`] per colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    stones: [CellSet; 2],
}

impl Board {
    /// Empty board.
    pub const fn new() -> Self {
        Self {
            stones: [CellSet::new(); 2],
        }
    }

    /// Owner of `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<Color> {
        if self.stones[Color::Black.index()].contains(cell) {
            Some(Color::Black)
        } else if self.stones[Color::White.index()].contains(cell) {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn is_empty(&self, cell: Cell) -> bool {
        !self.occupied().contains(cell)
    }

    /// Put a `color` stone on `cell`, replacing whatever was there.
    pub fn set(&mut self, cell: Cell, color: Color) {
        self.stones[color.opponent().index()].remove(cell);
        self.stones[color.index()].insert(cell);
    }

    /// Empty `cell`, returning the colour that stood there.
    pub fn clear(&mut self, cell: Cell) -> Option<Color> {
        let owner = self.get(cell)?;
        self.stones[owner.index()].remove(cell);
        Some(owner)
    }

    /// Cells holding a `color` stone.
    pub fn stones(&self, color: Color) -> CellSet {
        self.stones[color.index()]
    }

    pub fn count(&self, color: Color) -> usize {
        self.stones[color.index()].len()
    }

    /// Cells holding any stone.
    pub fn occupied(&self) -> CellSet {
        self.stones[0] | self.stones[1]
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CellSet::full()
    }
}

/// Hidden traps: an independent bit per player per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HiddenTraps {
    owners: [CellSet; 2],
}

impl HiddenTraps {
    pub const fn new() -> Self {
        Self {
            owners: [CellSet::new(); 2],
        }
    }

    pub fn has(&self, owner: Color, cell: Cell) -> bool {
        self.owners[owner.index()].contains(cell)
    }

    /// Arm a trap; returns `false` when `owner` already had one there.
    pub fn arm(&mut self, owner: Color, cell: Cell) -> bool {
        self.owners[owner.index()].insert(cell)
    }

    /// Disarm a trap; returns `false` when there was none.
    pub fn disarm(&mut self, owner: Color, cell: Cell) -> bool {
        self.owners[owner.index()].remove(cell)
    }

    /// Every trap `owner` has armed.
    pub fn of(&self, owner: Color) -> CellSet {
        self.owners[owner.index()]
    }
}

/// Authority-seeded public traps. Triggering one does not clear it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PublicTraps {
    cells: CellSet,
}

impl PublicTraps {
    pub const fn new() -> Self {
        Self {
            cells: CellSet::new(),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(cell)
    }

    pub fn cells(&self) -> CellSet {
        self.cells
    }
}

impl FromIterator<Cell> for PublicTraps {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
