//! Core data structures for crossword filling.
//!
//! This crate provides the data model consumed by the `krizovka-solver`
//! crate: the token alphabet, the grid, and clue/puzzle assembly.
//!
//! # Overview
//!
//! The crate is organized around a few small concepts:
//!
//! 1. **Tokens** - The closed letter alphabet plus the two sentinel markers
//!    - [`token`]: [`Letter`], [`Token`], and [`tokenize`]
//! 2. **The grid** - A fixed-size rectangle of token cells
//!    - [`position`]: 2-D [`Position`] addressing
//!    - [`grid`]: the flat [`Grid`] and its stable [`CellId`] cell identities
//! 3. **Clues and the puzzle** - Answer slots carved out of the grid
//!    - [`clue`]: [`Direction`], [`Clue`], [`ClueId`]
//!    - [`puzzle`]: [`Puzzle`] assembly and crossing lookup
//!
//! # Examples
//!
//! ```
//! use krizovka_core::{Direction, Puzzle, Token};
//!
//! // A 2x2 grid with two crossing two-letter clues.
//! let mut puzzle = Puzzle::new(2, 2);
//! let across = puzzle.carve(0, 0, Direction::Horizontal, 2, Some("H1"))?;
//! let down = puzzle.carve(0, 0, Direction::Vertical, 2, Some("V1"))?;
//!
//! // Carved cells are blank, the rest of the grid stays blocked.
//! let shared = puzzle.clue(across).cells()[0];
//! assert_eq!(puzzle.grid().token(shared), Token::Blank);
//! assert_eq!(puzzle.crossing(shared, Direction::Vertical), Some(down));
//! # Ok::<(), krizovka_core::CarveError>(())
//! ```

pub mod clue;
pub mod grid;
pub mod position;
pub mod puzzle;
pub mod token;

// Re-export commonly used types
pub use self::{
    clue::{Clue, ClueId, Direction},
    grid::{CellId, Grid},
    position::Position,
    puzzle::{CarveError, Puzzle},
    token::{InvalidToken, Letter, Token, tokenize},
};
