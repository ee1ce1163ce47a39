//! Generalized knight's-tour search.
//!
//! A piece with a configurable list of relative moves must visit every cell of
//! a rectangular board exactly once, starting from a given cell. The search is
//! depth-first backtracking with undo-on-failure and an optional one-ply
//! dead-end pruning rule.
//!
//! Modules
//! - `grid`: board size, positions, the visitation table.
//! - `moves`: ordered move sets (`MoveSet::knight()` and parsed lists).
//! - `tour`: probes, engine, entry points, observers, tour verification.
//! - `api`: flat re-exports for callers that want one import.

pub mod api;
pub mod grid;
pub mod moves;
pub mod tour;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use grid::{Dims, Offset, Pos, Table};
pub use moves::MoveSet;
pub use tour::{find_path, search_with, Outcome, Search, SearchCfg, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::grid::{Dims, Offset, Pos, Table};
    pub use crate::moves::{MoveSet, KNIGHT};
    pub use crate::tour::{
        check_tour, find_path, search_in, search_with, Call, CallCounter, Observer, OnCall,
        Outcome, Progress, Search, SearchCfg, Strategy,
    };
}
