//! Curated surface for front ends.
//!
//! Everything a driver program needs: board types, move sets, the search
//! entry points and options, observers, and the verifier.

// Board
pub use crate::grid::{Dims, GridError, Offset, Pos, Table};
// Moves
pub use crate::moves::{MoveParseError, MoveSet, KNIGHT};
// Search
pub use crate::tour::{
    check_tour, find_path, is_available, is_dead_end, search_in, search_with, strands_neighbor,
    tour_path, Call, CallCounter, Observer, OnCall, Outcome, Progress, Search, SearchCfg,
    Strategy, TourError,
};
