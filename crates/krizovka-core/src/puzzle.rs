//! Puzzle assembly: the grid plus its clues.

use crate::{CellId, Clue, ClueId, Direction, Grid, Position, Token};

/// Error returned when clue geometry does not fit the grid.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CarveError {
    /// The requested length was zero.
    #[display("clue length must be at least 1")]
    EmptyClue,
    /// The run starts outside the grid or runs off its edge.
    #[display(
        "{direction} clue of length {length} at ({row}, {col}) does not fit a {rows}x{cols} grid"
    )]
    OutOfBounds {
        /// Start row of the rejected run.
        row: usize,
        /// Start column of the rejected run.
        col: usize,
        /// Axis of the rejected run.
        direction: Direction,
        /// Requested length.
        length: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },
    /// A covered cell already belongs to a clue of the same direction.
    #[display("cell ({row}, {col}) already belongs to a {direction} clue")]
    Overlap {
        /// Row of the doubly-claimed cell.
        row: usize,
        /// Column of the doubly-claimed cell.
        col: usize,
        /// Axis claimed twice.
        direction: Direction,
    },
}

/// A grid together with the clues carved out of it.
///
/// Clues are kept in creation order; that order defines the solver's
/// top-level sweep. Each cell belongs to at most one clue per direction,
/// and the puzzle maintains a cell-to-clue crossing index so
/// [`crossing`](Self::crossing) is a constant-time lookup.
///
/// # Examples
///
/// ```
/// use krizovka_core::{Direction, Puzzle, Token};
///
/// let mut puzzle = Puzzle::new(2, 2);
/// let across = puzzle.carve(0, 0, Direction::Horizontal, 2, Some("H1"))?;
/// let down = puzzle.carve(0, 0, Direction::Vertical, 2, Some("V1"))?;
///
/// let shared = puzzle.clue(across).cells()[0];
/// assert_eq!(puzzle.crossing(shared, Direction::Vertical), Some(down));
/// assert_eq!(puzzle.crossing(shared, Direction::Horizontal), Some(across));
/// # Ok::<(), krizovka_core::CarveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    clues: Vec<Clue>,
    /// Per cell, the clue covering it on each axis: `[horizontal, vertical]`.
    crossings: Vec<[Option<ClueId>; 2]>,
}

impl Puzzle {
    /// Creates a puzzle over a fully blocked grid.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let grid = Grid::new(rows, cols);
        let crossings = vec![[None; 2]; rows * cols];
        Self {
            grid,
            clues: Vec::new(),
            crossings,
        }
    }

    /// Returns the grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid mutably.
    ///
    /// The grid is the raw storage surface; writers are expected to gate
    /// letter writes on [`Token::fits`].
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the number of clues carved so far.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// Returns all clue ids in creation order.
    #[must_use]
    pub fn clue_ids(&self) -> Vec<ClueId> {
        (0..self.clues.len()).map(ClueId::new).collect()
    }

    /// Returns a clue by id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this puzzle.
    #[must_use]
    pub fn clue(&self, id: ClueId) -> &Clue {
        &self.clues[id.index()]
    }

    /// Carves a new clue out of the grid.
    ///
    /// A `Horizontal` clue covers `length` consecutive columns starting at
    /// `col` in row `row`; a `Vertical` clue covers `length` consecutive
    /// rows starting at `row` in column `col`. Covered cells transition
    /// from blocked to blank (cells already carved by a crossing clue are
    /// left as they are), and the crossing index is extended so that
    /// [`crossing`](Self::crossing) finds the new clue.
    ///
    /// # Errors
    ///
    /// Returns [`CarveError`] if the length is zero, the run does not fit
    /// the grid, or a covered cell already belongs to a clue of the same
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use krizovka_core::{Direction, Puzzle};
    ///
    /// let mut puzzle = Puzzle::new(5, 10);
    /// puzzle.carve(1, 2, Direction::Vertical, 3, Some("latinský pozdrav"))?;
    /// assert!(puzzle.carve(0, 8, Direction::Horizontal, 3, None).is_err());
    /// # Ok::<(), krizovka_core::CarveError>(())
    /// ```
    pub fn carve(
        &mut self,
        row: usize,
        col: usize,
        direction: Direction,
        length: usize,
        hint: Option<&str>,
    ) -> Result<ClueId, CarveError> {
        if length == 0 {
            return Err(CarveError::EmptyClue);
        }

        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        let fits = match direction {
            Direction::Horizontal => row < rows && col + length <= cols,
            Direction::Vertical => col < cols && row + length <= rows,
        };
        if !fits {
            return Err(CarveError::OutOfBounds {
                row,
                col,
                direction,
                length,
                rows,
                cols,
            });
        }

        let positions: Vec<Position> = (0..length)
            .map(|i| match direction {
                Direction::Horizontal => Position::new(row, col + i),
                Direction::Vertical => Position::new(row + i, col),
            })
            .collect();

        // Validate the whole run before mutating anything.
        for pos in &positions {
            let id = self.grid.cell_id(*pos);
            if self.crossings[id.index()][direction.axis()].is_some() {
                return Err(CarveError::Overlap {
                    row: pos.row(),
                    col: pos.col(),
                    direction,
                });
            }
        }

        let clue_id = ClueId::new(self.clues.len());
        let mut cells = Vec::with_capacity(length);
        for pos in positions {
            let id = self.grid.cell_id(pos);
            if self.grid.token(id).is_blocked() {
                self.grid.set_token(id, Token::Blank);
            }
            self.crossings[id.index()][direction.axis()] = Some(clue_id);
            cells.push(id);
        }

        self.clues
            .push(Clue::new(direction, cells, hint.map(str::to_owned)));
        Ok(clue_id)
    }

    /// Returns the clue of the given direction covering a cell, if any.
    ///
    /// At most one such clue exists per direction per cell; the lookup is
    /// a constant-time read of the crossing index.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this puzzle's grid.
    #[must_use]
    pub fn crossing(&self, cell: CellId, direction: Direction) -> Option<ClueId> {
        self.crossings[cell.index()][direction.axis()]
    }

    /// Returns `true` iff every clue is solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.clues.iter().all(|clue| clue.is_solved(&self.grid))
    }
}
