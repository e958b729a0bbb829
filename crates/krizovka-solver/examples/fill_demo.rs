//! Example filling a small Czech crossword from a stub dictionary.
//!
//! This example shows how to:
//! - Assemble a `Puzzle` by carving clues out of a blocked grid
//! - Plug a dictionary into the solver through `AnswerProvider`
//! - Run the sweep and render the filled grid
//!
//! # Usage
//!
//! ```sh
//! cargo run -p krizovka-solver --example fill_demo
//! ```
//!
//! Enable solver logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p krizovka-solver --example fill_demo
//! ```

use krizovka_core::{CarveError, Direction, Puzzle};
use krizovka_solver::{CachedProvider, Solver, testing::StubProvider};

fn main() -> Result<(), CarveError> {
    env_logger::init();

    let mut puzzle = Puzzle::new(5, 10);
    puzzle.carve(1, 2, Direction::Vertical, 3, Some("latinský pozdrav"))?;
    puzzle.carve(1, 2, Direction::Horizontal, 5, Some("den mayského kalendáře"))?;
    puzzle.carve(3, 2, Direction::Horizontal, 6, Some("záhada zastarale"))?;

    // A canned dictionary standing in for a real crossword-helper site.
    // "MULUC" is the better-known Mayan day, but only "AKBAL" coheres with
    // the A that the vertical AVE commits into the shared cell.
    let provider = CachedProvider::new(
        StubProvider::new()
            .with("latinský pozdrav", &["AVE"])
            .with("den mayského kalendáře", &["MULUC", "AKBAL"])
            .with("záhada zastarale", &["ENIGMA"]),
    );

    let solver = Solver::new(provider);
    let stats = solver.solve(&mut puzzle);

    print!("{}", puzzle.grid());
    println!("{stats}");
    Ok(())
}
