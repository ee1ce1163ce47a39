//! Search options and results.
//!
//! Kept small and explicit so `engine` and `driver` read top to bottom.

use crate::grid::Table;

/// How the search attempt is represented at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Native recursion, one stack frame per committed move.
    #[default]
    Recursive,
    /// Explicit `(pos, next offset)` frames on the heap; same visiting order.
    Iterative,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCfg {
    /// One-ply dead-end pruning. Only applied to symmetric move sets; on
    /// asymmetric ones it could discard tours, so the engine runs unpruned.
    pub prune_dead_ends: bool,
    pub strategy: Strategy,
    /// Abort after this many engine calls. `None` searches exhaustively.
    pub max_calls: Option<u64>,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            prune_dead_ends: true,
            strategy: Strategy::Recursive,
            max_calls: None,
        }
    }
}

/// Terminal state of one search attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Complete tour; the table holds labels `1..=total`.
    Found,
    /// No tour from this start under this move set; the table is all zero.
    NotFound,
    /// `max_calls` ran out first; the table is all zero.
    BudgetExhausted,
}

/// Result of `search_with`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Search {
    pub outcome: Outcome,
    pub table: Table,
    /// Number of engine calls, including rejected candidates.
    pub calls: u64,
}

impl Search {
    #[inline]
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}
