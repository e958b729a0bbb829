//! The scoring, cascading fill algorithm.

use krizovka_core::{CellId, ClueId, Grid, Letter, Puzzle, Token, tokenize};
use log::{debug, trace};

use crate::provider::AnswerProvider;

/// Checks a tokenized candidate against a clue's current cells.
///
/// A candidate coheres iff it has exactly one letter per cell and every
/// letter [`fits`](Token::fits) the cell it would land in. Length is part
/// of the check because tokenization can shorten malformed candidates
/// below their character count.
///
/// # Examples
///
/// ```
/// use krizovka_core::{Direction, Puzzle, tokenize};
/// use krizovka_solver::cohere;
///
/// let mut puzzle = Puzzle::new(1, 3);
/// let id = puzzle.carve(0, 0, Direction::Horizontal, 3, None)?;
/// let cells = puzzle.clue(id).cells();
///
/// assert!(cohere(puzzle.grid(), cells, &tokenize("AVE")));
/// assert!(!cohere(puzzle.grid(), cells, &tokenize("AHOJ")));
/// # Ok::<(), krizovka_core::CarveError>(())
/// ```
#[must_use]
pub fn cohere(grid: &Grid, cells: &[CellId], answer: &[Letter]) -> bool {
    cells.len() == answer.len()
        && cells
            .iter()
            .zip(answer)
            .all(|(&cell, &letter)| grid.token(cell).fits(letter))
}

/// Outcome of one [`Solver::solve`] sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("{solved} solved, {unresolved} unresolved")]
pub struct FillStats {
    solved: usize,
    unresolved: usize,
}

impl FillStats {
    /// Returns the number of clues solved after the sweep.
    #[must_use]
    pub const fn solved(self) -> usize {
        self.solved
    }

    /// Returns the number of clues still unresolved after the sweep.
    #[must_use]
    pub const fn unresolved(self) -> usize {
        self.unresolved
    }

    /// Returns `true` if every clue ended up solved.
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.unresolved == 0
    }
}

/// The best-effort crossword filler.
///
/// Each clue is a one-way `Unresolved → Solved` state machine, driven
/// either by its own turn in the top-level sweep or transitively by a
/// cascade from a crossing clue. A solved clue is terminal: re-attempting
/// it is a guaranteed no-op, which is also what keeps the cascade recursion
/// from cycling through shared cells.
///
/// # Examples
///
/// ```
/// use krizovka_core::{Direction, Position, Puzzle, Token};
/// use krizovka_solver::{Solver, testing::StubProvider};
///
/// let provider = StubProvider::new()
///     .with("H1", &["AB"])
///     .with("V1", &["AC"]);
///
/// let mut puzzle = Puzzle::new(2, 2);
/// puzzle.carve(0, 0, Direction::Horizontal, 2, Some("H1"))?;
/// puzzle.carve(0, 0, Direction::Vertical, 2, Some("V1"))?;
///
/// let stats = Solver::new(provider).solve(&mut puzzle);
/// assert_eq!(stats.solved(), 2);
/// // The never-carved corner stays blocked.
/// assert_eq!(puzzle.grid().token_at(Position::new(1, 1)), Token::Blocked);
/// # Ok::<(), krizovka_core::CarveError>(())
/// ```
#[derive(Debug)]
pub struct Solver<P> {
    provider: P,
}

impl<P> Solver<P>
where
    P: AnswerProvider,
{
    /// Creates a solver over an answer provider.
    ///
    /// Wrap the provider in a
    /// [`CachedProvider`](crate::CachedProvider) when lookups are
    /// expensive; the probe loop repeats them heavily.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Attempts every clue once, in creation order.
    ///
    /// This is a single sweep, not a fixed-point loop: a clue that fails
    /// when its own turn arrives is revisited only if a later cascade
    /// happens to reach it. Leaving such clues unresolved is the intended
    /// best-effort behavior; the returned [`FillStats`] makes the outcome
    /// observable.
    pub fn solve(&self, puzzle: &mut Puzzle) -> FillStats {
        for id in puzzle.clue_ids() {
            if !self.attempt(puzzle, id) {
                debug!("{id} left unresolved by its top-level turn");
            }
        }

        let mut stats = FillStats::default();
        for id in puzzle.clue_ids() {
            if puzzle.clue(id).is_solved(puzzle.grid()) {
                stats.solved += 1;
            } else {
                stats.unresolved += 1;
            }
        }
        debug!("sweep finished: {stats}");
        stats
    }

    /// Attempts to fill one clue, cascading into its crossings on success.
    ///
    /// Queries the provider, discards candidates that do not
    /// [`cohere`] with the current cells, scores the rest by how many of
    /// their letters some coherent candidate of the crossing clue supports
    /// ([`probe`](Self::probe)), and commits the first candidate with the
    /// strictly greatest score. Later ties never displace an earlier
    /// winner, so provider order is meaningful. Every crossing of a
    /// committed answer is then attempted in turn.
    ///
    /// Returns `true` if the clue is solved when the call returns. An
    /// already-solved clue returns `true` immediately with no side effect;
    /// a clue with no coherent candidate stays untouched and returns
    /// `false`.
    pub fn attempt(&self, puzzle: &mut Puzzle, id: ClueId) -> bool {
        if puzzle.clue(id).is_solved(puzzle.grid()) {
            return true;
        }

        let clue = puzzle.clue(id);
        let cross_dir = clue.direction().orthogonal();
        let length = clue.len();
        let hint = clue.hint().unwrap_or_default().to_owned();
        let cells = clue.cells().to_vec();

        let candidates = self.provider.lookup(&hint, length);
        trace!("{id} ({hint:?}, {length}): {} candidates", candidates.len());

        let mut best: Option<(u32, Vec<Letter>)> = None;
        for raw in &candidates {
            let answer = tokenize(raw);
            if !cohere(puzzle.grid(), &cells, &answer) {
                continue;
            }

            let mut score = 0;
            for (i, &letter) in answer.iter().enumerate() {
                if let Some(crossing) = puzzle.crossing(cells[i], cross_dir) {
                    let index = puzzle
                        .clue(crossing)
                        .position_of(cells[i])
                        .expect("crossing index only maps cells to clues containing them");
                    score += u32::from(self.probe(puzzle, crossing, index, letter));
                }
            }

            match &best {
                Some((top, _)) if score <= *top => {}
                _ => best = Some((score, answer)),
            }
        }

        let Some((score, answer)) = best else {
            debug!(
                "{id} has no coherent candidate ({} offered)",
                candidates.len()
            );
            return false;
        };

        debug!("{id} commits a {length}-letter answer with support {score}");
        for (&cell, &letter) in cells.iter().zip(&answer) {
            puzzle.grid_mut().set_token(cell, Token::Letter(letter));
        }

        for &cell in &cells {
            if let Some(crossing) = puzzle.crossing(cell, cross_dir) {
                trace!("{id} cascades into {crossing}");
                self.attempt(puzzle, crossing);
            }
        }

        true
    }

    /// Read-only check whether a clue can support a letter at a position.
    ///
    /// Returns `true` iff some candidate of `clue` that coheres with the
    /// clue's current cells carries `letter` at `index`. Never mutates the
    /// puzzle; repeated provider queries from here are what the
    /// [`CachedProvider`](crate::CachedProvider) adapter is for.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid position within the clue and a
    /// coherent candidate exists.
    #[must_use]
    pub fn probe(&self, puzzle: &Puzzle, id: ClueId, index: usize, letter: Letter) -> bool {
        let clue = puzzle.clue(id);
        let hint = clue.hint().unwrap_or_default();

        self.provider
            .lookup(hint, clue.len())
            .iter()
            .any(|raw| {
                let answer = tokenize(raw);
                cohere(puzzle.grid(), clue.cells(), &answer) && answer[index] == letter
            })
    }
}

#[cfg(test)]
mod tests {
    use krizovka_core::{Direction, Position, Puzzle};

    use super::*;
    use crate::testing::StubProvider;

    fn letter_at(puzzle: &Puzzle, row: usize, col: usize) -> Option<Letter> {
        puzzle.grid().token_at(Position::new(row, col)).letter()
    }

    #[test]
    fn solve_fills_crossing_clues() {
        let provider = StubProvider::new().with("H1", &["AB"]).with("V1", &["AC"]);
        let mut puzzle = Puzzle::new(2, 2);
        let across = puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("H1"))
            .unwrap();
        let down = puzzle
            .carve(0, 0, Direction::Vertical, 2, Some("V1"))
            .unwrap();

        let stats = Solver::new(provider).solve(&mut puzzle);

        assert_eq!(letter_at(&puzzle, 0, 0), Some(Letter::A));
        assert_eq!(letter_at(&puzzle, 0, 1), Some(Letter::B));
        assert_eq!(letter_at(&puzzle, 1, 0), Some(Letter::C));
        assert!(puzzle.grid().token_at(Position::new(1, 1)).is_blocked());
        assert!(puzzle.clue(across).is_solved(puzzle.grid()));
        assert!(puzzle.clue(down).is_solved(puzzle.grid()));
        assert_eq!(stats.solved(), 2);
        assert!(stats.is_complete());
    }

    #[test]
    fn clue_without_candidates_stays_blank() {
        let provider = StubProvider::new();
        let mut puzzle = Puzzle::new(1, 3);
        let id = puzzle
            .carve(0, 0, Direction::Horizontal, 3, Some("X"))
            .unwrap();

        let solver = Solver::new(provider);
        let stats = solver.solve(&mut puzzle);

        assert!(!puzzle.clue(id).is_solved(puzzle.grid()));
        for col in 0..3 {
            assert!(puzzle.grid().token_at(Position::new(0, col)).is_blank());
        }
        assert_eq!(stats.unresolved(), 1);
        // Single sweep: no repeat pass re-queried the provider.
        assert_eq!(solver.provider().calls_for("X"), 1);
    }

    #[test]
    fn incoherent_candidates_are_discarded() {
        let provider = StubProvider::new().with("animal", &["CAT"]);
        let mut puzzle = Puzzle::new(1, 3);
        let id = puzzle
            .carve(0, 0, Direction::Horizontal, 3, Some("animal"))
            .unwrap();

        // Pre-commit a conflicting letter into the first cell.
        let first = puzzle.clue(id).cells()[0];
        puzzle.grid_mut().set_token(first, Token::Letter(Letter::B));

        let solver = Solver::new(provider);
        assert!(!solver.attempt(&mut puzzle, id));

        assert_eq!(letter_at(&puzzle, 0, 0), Some(Letter::B));
        assert!(puzzle.grid().token_at(Position::new(0, 1)).is_blank());
        assert!(puzzle.grid().token_at(Position::new(0, 2)).is_blank());
    }

    #[test]
    fn committed_letters_survive_further_sweeps() {
        let provider = StubProvider::new()
            .with("H1", &["AB"])
            .with("V1", &["AC", "AD"]);
        let mut puzzle = Puzzle::new(2, 2);
        puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("H1"))
            .unwrap();
        puzzle
            .carve(0, 0, Direction::Vertical, 2, Some("V1"))
            .unwrap();

        let solver = Solver::new(provider);
        solver.solve(&mut puzzle);
        let snapshot = puzzle.grid().clone();

        // An extra sweep over an already-filled puzzle changes nothing.
        solver.solve(&mut puzzle);
        assert_eq!(*puzzle.grid(), snapshot);
    }

    #[test]
    fn first_candidate_wins_score_ties() {
        let provider = StubProvider::new().with("free", &["AB", "CD"]);
        let mut puzzle = Puzzle::new(1, 2);
        let id = puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("free"))
            .unwrap();

        Solver::new(provider).solve(&mut puzzle);

        assert!(puzzle.clue(id).is_solved(puzzle.grid()));
        assert_eq!(letter_at(&puzzle, 0, 0), Some(Letter::A));
        assert_eq!(letter_at(&puzzle, 0, 1), Some(Letter::B));
    }

    #[test]
    fn higher_crossing_support_beats_provider_order() {
        // The vertical clue only offers "BZ", so "BX" gets one point of
        // support at the shared cell while the earlier "AX" gets none.
        let provider = StubProvider::new()
            .with("H", &["AX", "BX"])
            .with("V", &["BZ"]);
        let mut puzzle = Puzzle::new(2, 2);
        puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("H"))
            .unwrap();
        puzzle.carve(0, 0, Direction::Vertical, 2, Some("V")).unwrap();

        let stats = Solver::new(provider).solve(&mut puzzle);

        assert_eq!(letter_at(&puzzle, 0, 0), Some(Letter::B));
        assert_eq!(letter_at(&puzzle, 0, 1), Some(Letter::X));
        assert_eq!(letter_at(&puzzle, 1, 0), Some(Letter::Z));
        assert!(stats.is_complete());
    }

    #[test]
    fn attempt_on_solved_clue_is_a_no_op() {
        let provider = StubProvider::new().with("word", &["OK"]);
        let mut puzzle = Puzzle::new(1, 2);
        let id = puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("word"))
            .unwrap();

        let solver = Solver::new(provider);
        assert!(solver.attempt(&mut puzzle, id));
        let calls = solver.provider().calls_for("word");

        assert!(solver.attempt(&mut puzzle, id));
        assert_eq!(solver.provider().calls_for("word"), calls);
    }

    #[test]
    fn hintless_clue_queries_with_empty_hint() {
        let provider = StubProvider::new();
        let mut puzzle = Puzzle::new(1, 2);
        puzzle.carve(0, 0, Direction::Horizontal, 2, None).unwrap();

        let solver = Solver::new(provider);
        let stats = solver.solve(&mut puzzle);

        assert_eq!(stats.unresolved(), 1);
        assert_eq!(solver.provider().calls_for(""), 1);
    }

    #[test]
    fn probe_is_read_only() {
        let provider = StubProvider::new().with("V", &["AB"]);
        let mut puzzle = Puzzle::new(2, 1);
        let id = puzzle.carve(0, 0, Direction::Vertical, 2, Some("V")).unwrap();

        let solver = Solver::new(provider);
        let snapshot = puzzle.grid().clone();

        assert!(solver.probe(&puzzle, id, 0, Letter::A));
        assert!(!solver.probe(&puzzle, id, 0, Letter::B));
        assert!(solver.probe(&puzzle, id, 1, Letter::B));
        assert_eq!(*puzzle.grid(), snapshot);
    }

    #[test]
    fn probe_respects_current_cells() {
        let provider = StubProvider::new().with("V", &["AB", "CB"]);
        let mut puzzle = Puzzle::new(2, 1);
        let id = puzzle.carve(0, 0, Direction::Vertical, 2, Some("V")).unwrap();

        // Once the first cell holds C, only "CB" coheres.
        let first = puzzle.clue(id).cells()[0];
        puzzle.grid_mut().set_token(first, Token::Letter(Letter::C));

        let solver = Solver::new(provider);
        assert!(!solver.probe(&puzzle, id, 0, Letter::A));
        assert!(solver.probe(&puzzle, id, 0, Letter::C));
    }

    #[test]
    fn cascade_solves_clues_before_their_turn() {
        // V2 is carved last but solved by the cascade out of H1, before its
        // own top-level turn arrives.
        let provider = StubProvider::new()
            .with("H1", &["AB"])
            .with("V2", &["BC"]);
        let mut puzzle = Puzzle::new(2, 2);
        puzzle
            .carve(0, 0, Direction::Horizontal, 2, Some("H1"))
            .unwrap();
        let down = puzzle
            .carve(0, 1, Direction::Vertical, 2, Some("V2"))
            .unwrap();

        let solver = Solver::new(provider);
        let first = puzzle.clue_ids()[0];
        assert!(solver.attempt(&mut puzzle, first));

        assert!(puzzle.clue(down).is_solved(puzzle.grid()));
        assert_eq!(letter_at(&puzzle, 1, 1), Some(Letter::C));
    }
}
