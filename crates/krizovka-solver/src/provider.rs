//! The answer dictionary boundary.
//!
//! Candidate production (network access, page scraping, rate limits) lives
//! entirely behind the [`AnswerProvider`] trait; the solver only ever sees
//! an ordered list of literal answer strings per `(hint, length)` query.

use std::{cell::RefCell, collections::HashMap};

/// An external dictionary mapping a hint to candidate answer strings.
///
/// # Contract
///
/// `lookup` is total: "nothing found" is an empty vector, never an error or
/// a panic. When `length > 0`, the result must already be filtered to
/// strings whose tokenized letter count equals `length`; the solver does
/// not re-filter by raw character count, only by per-cell coherence. The
/// returned order is preserved and meaningful: the solver breaks score ties
/// in favor of earlier candidates.
///
/// The call blocks until the full result is available. Implementations that
/// fetch concurrently or remotely must still present this synchronous
/// interface, or the ordering and tie-break guarantees are lost.
pub trait AnswerProvider {
    /// Returns all candidate answers for `hint`, in relevance order.
    fn lookup(&self, hint: &str, length: usize) -> Vec<String>;
}

/// A memoizing adapter over another provider.
///
/// The solver's probe loop re-queries the same `(hint, length)` pair once
/// per scored candidate per crossing position; this adapter collapses the
/// repeats into a single upstream call. Interior-mutable and
/// single-threaded, like the solver itself.
///
/// # Examples
///
/// ```
/// use krizovka_solver::{AnswerProvider, CachedProvider, testing::StubProvider};
///
/// let cached = CachedProvider::new(StubProvider::new().with("hint", &["AVE"]));
/// assert_eq!(cached.lookup("hint", 3), vec!["AVE".to_owned()]);
/// assert_eq!(cached.lookup("hint", 3), vec!["AVE".to_owned()]);
/// assert_eq!(cached.inner().calls_for("hint"), 1);
/// ```
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    cache: RefCell<HashMap<(String, usize), Vec<String>>>,
}

impl<P> CachedProvider<P> {
    /// Wraps a provider in a cache.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps the adapter, discarding the cache.
    #[must_use]
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P> AnswerProvider for CachedProvider<P>
where
    P: AnswerProvider,
{
    fn lookup(&self, hint: &str, length: usize) -> Vec<String> {
        let key = (hint.to_owned(), length);
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let answers = self.inner.lookup(hint, length);
        self.cache.borrow_mut().insert(key, answers.clone());
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubProvider;

    #[test]
    fn cache_collapses_repeated_lookups() {
        let cached = CachedProvider::new(StubProvider::new().with("greeting", &["AVE", "AHOJ"]));

        let first = cached.lookup("greeting", 3);
        let second = cached.lookup("greeting", 3);
        assert_eq!(first, second);
        assert_eq!(cached.inner().calls_for("greeting"), 1);
    }

    #[test]
    fn cache_keys_include_length() {
        let cached = CachedProvider::new(StubProvider::new().with("greeting", &["AVE", "AHOJ"]));

        assert_eq!(cached.lookup("greeting", 3), vec!["AVE".to_owned()]);
        assert_eq!(cached.lookup("greeting", 4), vec!["AHOJ".to_owned()]);
        assert_eq!(cached.inner().calls_for("greeting"), 2);
    }

    #[test]
    fn empty_results_are_cached_too() {
        let cached = CachedProvider::new(StubProvider::new());

        assert!(cached.lookup("unknown", 5).is_empty());
        assert!(cached.lookup("unknown", 5).is_empty());
        assert_eq!(cached.inner().calls_for("unknown"), 1);
    }
}
