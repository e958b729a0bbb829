//! Clues: ordered runs of cells holding one answer each.

use crate::{CellId, Grid};

/// The axis a clue runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Left to right along a row.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom along a column.
    #[display("vertical")]
    Vertical,
}

impl Direction {
    /// Returns the other axis, the one crossing clues run along.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::Direction;
    ///
    /// assert_eq!(Direction::Horizontal.orthogonal(), Direction::Vertical);
    /// assert_eq!(Direction::Vertical.orthogonal(), Direction::Horizontal);
    /// ```
    #[must_use]
    pub const fn orthogonal(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Slot of this axis in per-cell `[horizontal, vertical]` tables.
    pub(crate) const fn axis(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }
}

/// Identity of one clue within its puzzle.
///
/// Ids are assigned in carving order, which is also the solver's top-level
/// sweep order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("clue#{index}")]
pub struct ClueId {
    index: usize,
}

impl ClueId {
    pub(crate) const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Returns the creation-order index of this clue.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// One answer slot: an ordered run of cells in one direction, with an
/// optional hint.
///
/// Clues are carved through [`Puzzle::carve`](crate::Puzzle::carve) and
/// never removed; the only thing that changes over a clue's life is whether
/// its cells are still blank.
#[derive(Debug, Clone)]
pub struct Clue {
    direction: Direction,
    cells: Vec<CellId>,
    hint: Option<String>,
}

impl Clue {
    pub(crate) fn new(direction: Direction, cells: Vec<CellId>, hint: Option<String>) -> Self {
        Self {
            direction,
            cells,
            hint,
        }
    }

    /// Returns the axis this clue runs along.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the clue's cells in traversal order.
    #[must_use]
    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// Returns the required answer length in letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the clue covers no cells.
    ///
    /// Carving rejects zero-length clues, so this is always `false` for
    /// clues obtained from a puzzle.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the hint text, if the clue has one.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// Returns the position of a cell within this clue's run.
    #[must_use]
    pub fn position_of(&self, cell: CellId) -> Option<usize> {
        self.cells.iter().position(|&c| c == cell)
    }

    /// Returns `true` iff no cell of this clue is still blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::{Direction, Puzzle};
    ///
    /// let mut puzzle = Puzzle::new(1, 3);
    /// let id = puzzle.carve(0, 0, Direction::Horizontal, 3, Some("X"))?;
    /// assert!(!puzzle.clue(id).is_solved(puzzle.grid()));
    /// # Ok::<(), krizovka_core::CarveError>(())
    /// ```
    #[must_use]
    pub fn is_solved(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&cell| !grid.token(cell).is_blank())
    }
}
