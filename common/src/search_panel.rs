//! What a finished network call does to the filter form's state.

use std::fmt::Display;

use crate::search_result::SearchResultSet;

/// User-facing message produced by a finished call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Info(String),
    Error(String),
}

/// Results shown under a filter form. `generation` moves on every successful
/// search so an identical result set still resets the selection below it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPanel {
    results: Option<SearchResultSet>,
    generation: u64,
}

impl SearchPanel {
    pub fn results(&self) -> Option<&SearchResultSet> {
        self.results.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a search succeeded with nothing in any frequency.
    pub fn shows_no_matches(&self) -> bool {
        self.results.as_ref().is_some_and(|r| r.is_empty())
    }

    /// Apply a search outcome. A failure keeps the previous results and
    /// returns the error to show; an empty result is a normal success.
    pub fn receive<E: Display>(&mut self, outcome: Result<SearchResultSet, E>) -> Option<Feedback> {
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.generation += 1;
                None
            }
            Err(e) => Some(Feedback::Error(format!("Search failed: {e}"))),
        }
    }
}
