//! The crossword fill algorithm.
//!
//! This crate consumes the data model from `krizovka-core` and fills a
//! [`Puzzle`](krizovka_core::Puzzle) from an answer dictionary reached
//! through the [`AnswerProvider`] trait.
//!
//! The algorithm is a single sweep with cascades, not a constraint solver:
//! each clue is attempted once in creation order; the candidate best
//! supported by the crossing clues is committed; every crossing of a
//! just-committed answer is attempted in turn. Committed letters are never
//! retracted, and clues no cascade reaches stay unresolved.
//!
//! # Examples
//!
//! ```
//! use krizovka_core::{Direction, Puzzle};
//! use krizovka_solver::{Solver, testing::StubProvider};
//!
//! let provider = StubProvider::new()
//!     .with("H1", &["AB"])
//!     .with("V1", &["AC"]);
//!
//! let mut puzzle = Puzzle::new(2, 2);
//! puzzle.carve(0, 0, Direction::Horizontal, 2, Some("H1"))?;
//! puzzle.carve(0, 0, Direction::Vertical, 2, Some("V1"))?;
//!
//! let stats = Solver::new(provider).solve(&mut puzzle);
//! assert!(stats.is_complete());
//! # Ok::<(), krizovka_core::CarveError>(())
//! ```

pub mod provider;
pub mod solver;
pub mod testing;

// Re-export commonly used types
pub use self::{
    provider::{AnswerProvider, CachedProvider},
    solver::{FillStats, Solver, cohere},
};
