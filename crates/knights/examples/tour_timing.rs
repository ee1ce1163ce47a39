//! Timing probe for corner-start knight tours.
//!
//! Prints calls and wall time per board so the cost of pruning and of the
//! explicit-stack engine can be read off directly. Boards default to 5..=7;
//! pass sizes as arguments (`cargo run --release --example tour_timing 6 8`)
//! to probe others. Large boards with the standard ordering can run for a
//! very long time; combine with a budget via `KNIGHTS_MAX_CALLS`.

use std::time::Instant;

use knights::api::*;

fn main() {
    let sizes: Vec<u32> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let sizes = if sizes.is_empty() { vec![5, 6, 7] } else { sizes };
    let max_calls = std::env::var("KNIGHTS_MAX_CALLS")
        .ok()
        .and_then(|v| v.parse().ok());
    let k = MoveSet::knight();

    for n in sizes {
        for (label, prune, strategy) in [
            ("recursive", true, Strategy::Recursive),
            ("iterative", true, Strategy::Iterative),
            ("unpruned", false, Strategy::Recursive),
        ] {
            if !prune && n > 5 {
                continue;
            }
            let cfg = SearchCfg {
                prune_dead_ends: prune,
                strategy,
                max_calls,
            };
            let t0 = Instant::now();
            let s = search_with(Dims::new(n, n), &k, Pos::new(0, 0), cfg, ());
            let ms = t0.elapsed().as_secs_f64() * 1e3;
            println!(
                "board={n}x{n} engine={label} outcome={:?} calls={} time_ms={ms:.3}",
                s.outcome, s.calls
            );
        }
    }
}
