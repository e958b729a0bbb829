//! Test utilities for exercising the solver without a real dictionary.
//!
//! # Example
//!
//! ```
//! use krizovka_solver::{AnswerProvider, testing::StubProvider};
//!
//! let provider = StubProvider::new().with("greeting", &["AVE", "AHOJ"]);
//!
//! // Lookups are length-filtered by tokenized letter count.
//! assert_eq!(provider.lookup("greeting", 3), vec!["AVE".to_owned()]);
//! assert_eq!(provider.calls_for("greeting"), 1);
//! ```

use std::{cell::RefCell, collections::HashMap};

use krizovka_core::tokenize;

use crate::provider::AnswerProvider;

/// A map-backed answer provider for tests, examples, and doctests.
///
/// Answers are registered per hint; lookups filter them by tokenized letter
/// count (honoring the provider contract that a `length > 0` query returns
/// only matching candidates) and keep registration order. Every served
/// lookup is counted, so tests can assert how often the solver queried a
/// hint.
#[derive(Debug, Clone, Default)]
pub struct StubProvider {
    answers: HashMap<String, Vec<String>>,
    calls: RefCell<HashMap<String, usize>>,
}

impl StubProvider {
    /// Creates an empty provider: every lookup returns no candidates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers candidate answers for a hint, keeping order.
    #[must_use]
    pub fn with(mut self, hint: &str, answers: &[&str]) -> Self {
        self.answers
            .entry(hint.to_owned())
            .or_default()
            .extend(answers.iter().map(|answer| (*answer).to_owned()));
        self
    }

    /// Returns the total number of lookups served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.borrow().values().sum()
    }

    /// Returns the number of lookups served for one hint.
    #[must_use]
    pub fn calls_for(&self, hint: &str) -> usize {
        self.calls.borrow().get(hint).copied().unwrap_or(0)
    }
}

impl AnswerProvider for StubProvider {
    fn lookup(&self, hint: &str, length: usize) -> Vec<String> {
        *self.calls.borrow_mut().entry(hint.to_owned()).or_insert(0) += 1;

        let Some(answers) = self.answers.get(hint) else {
            return Vec::new();
        };
        answers
            .iter()
            .filter(|raw| length == 0 || tokenize(raw).len() == length)
            .cloned()
            .collect()
    }
}
