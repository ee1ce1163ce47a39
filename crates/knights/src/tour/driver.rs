//! Entry points: allocate or clear the table, run the engine, classify.

use crate::grid::{Dims, Pos, Table};
use crate::moves::MoveSet;

use super::engine::Engine;
use super::observe::Observer;
use super::types::{Outcome, Search, SearchCfg, Strategy};

/// Look for a tour from `start` with default options.
///
/// Returns whether one was found and the table: labels `1..=total` in tour
/// order on success, all zero otherwise.
pub fn find_path(dims: Dims, moves: &MoveSet, start: Pos) -> (bool, Table) {
    let s = search_with(dims, moves, start, SearchCfg::default(), ());
    (s.found(), s.table)
}

/// Fresh table, explicit options and an observer.
pub fn search_with<O: Observer>(
    dims: Dims,
    moves: &MoveSet,
    start: Pos,
    cfg: SearchCfg,
    observer: O,
) -> Search {
    let mut table = Table::new(dims);
    let (outcome, calls) = search_in(&mut table, moves, start, cfg, observer);
    Search {
        outcome,
        table,
        calls,
    }
}

/// Reuse a caller-owned table; it is cleared first. Returns the outcome and
/// the number of engine calls.
pub fn search_in<O: Observer>(
    table: &mut Table,
    moves: &MoveSet,
    start: Pos,
    cfg: SearchCfg,
    observer: O,
) -> (Outcome, u64) {
    table.reset();
    let mut engine = Engine::new(table, moves, cfg, observer);
    let found = match cfg.strategy {
        Strategy::Recursive => engine.descend(start, 0, 0),
        Strategy::Iterative => engine.unwind(start),
    };
    let outcome = if found {
        Outcome::Found
    } else if engine.exhausted {
        Outcome::BudgetExhausted
    } else {
        Outcome::NotFound
    };
    (outcome, engine.calls)
}
