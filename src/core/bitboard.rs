//! A fixed 10×10 cell set packed into a single `u128`.
//!
//! Every board layer (stones per colour, hidden traps per colour, public
//! traps) is one `CellSet`. Indexing goes through [`Cell`], which is always on
//! the board, so none of the operations here can fail.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::core::common::Cell;
use crate::core::config::{BOARD_SIZE, CELL_COUNT};

const MASK: u128 = (1u128 << CELL_COUNT) - 1;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet {
    bits: u128,
}

impl CellSet {
    /// Empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Set holding every cell of the board.
    pub const fn full() -> Self {
        Self { bits: MASK }
    }

    /// Build from raw bits, discarding anything past the last cell.
    pub const fn from_raw(raw: u128) -> Self {
        Self { bits: raw & MASK }
    }

    pub const fn into_raw(self) -> u128 {
        self.bits
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        (self.bits >> cell.index()) & 1 == 1
    }

    /// Add `cell`; returns `false` if it was already present.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let was = self.contains(cell);
        self.bits |= 1u128 << cell.index();
        !was
    }

    /// Remove `cell`; returns `false` if it was not present.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let was = self.contains(cell);
        self.bits &= !(1u128 << cell.index());
        was
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Cells in the set, in index order.
    pub fn iter(&self) -> Cells {
        Cells { bits: self.bits }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.iter()
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy, Debug)]
pub struct Cells {
    bits: u128,
}

impl Iterator for Cells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Cell::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl BitAnd for CellSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::from_raw(self.bits & rhs.bits)
    }
}

impl BitOr for CellSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::from_raw(self.bits | rhs.bits)
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

/// Complement within the board.
impl Not for CellSet {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet ({} cells):", self.len())?;
        fmt::Display::fmt(self, f)?;
        writeln!(f)
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let bit = match Cell::new(x, z) {
                    Ok(cell) if self.contains(cell) => '■',
                    _ => '□',
                };
                write!(f, "{} ", bit)?;
            }
            if z + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
