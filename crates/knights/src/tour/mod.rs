//! Tour search: depth-first backtracking with one-ply dead-end pruning.
//!
//! Purpose
//! - Extend a partial tour one move at a time over an exclusively owned
//!   `Table`, undoing each commit on failure, until every cell is labelled or
//!   every alternative is exhausted.
//! - Reject a branch early when the cell just taken leaves some open neighbor
//!   with no open neighbor of its own.
//!
//! Layout
//! - `types.rs` (options, outcomes), `probe.rs` (availability and dead-end
//!   tests), `engine.rs` (the backtracking core), `driver.rs` (entry points),
//!   `observe.rs` (diagnostic hooks), `verify.rs` (tour checking).
//!
//! Options are composable and chosen per call: pruning, recursive vs.
//! explicit-stack execution, and a call budget all run through one engine.

mod driver;
mod engine;
pub mod observe;
pub mod probe;
mod types;
pub mod verify;

pub use driver::{find_path, search_in, search_with};
pub use observe::{Call, CallCounter, Observer, OnCall, Progress};
pub use probe::{is_available, is_dead_end, strands_neighbor};
pub use types::{Outcome, Search, SearchCfg, Strategy};
pub use verify::{check_tour, tour_path, TourError};
