//! JSON result of one `solve` run.

use anyhow::{Context, Result};
use knights::api::{tour_path, Outcome, Search};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::SolveConfig;
use crate::provenance::{write_sidecar, Payload};

#[derive(Debug, Serialize)]
pub struct SolveRecord {
    pub config: SolveConfig,
    pub outcome: &'static str,
    pub calls: u64,
    pub elapsed_ms: f64,
    /// Cells in visiting order; empty unless a tour was found.
    pub path: Vec<[i32; 2]>,
    /// Labels per row, `y = 0` first.
    pub rows: Vec<Vec<u32>>,
}

pub fn outcome_name(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Found => "found",
        Outcome::NotFound => "not_found",
        Outcome::BudgetExhausted => "budget_exhausted",
    }
}

impl SolveRecord {
    pub fn new(config: SolveConfig, search: &Search, elapsed_ms: f64) -> Self {
        let path = if search.found() {
            tour_path(&search.table)
                .into_iter()
                .map(|p| [p.x, p.y])
                .collect()
        } else {
            Vec::new()
        };
        Self {
            config,
            outcome: outcome_name(search.outcome),
            calls: search.calls,
            elapsed_ms,
            path,
            rows: search.table.rows().map(<[u32]>::to_vec).collect(),
        }
    }

    /// Write the record to `out` and a provenance sidecar next to it.
    pub fn write(&self, out: &Path) -> Result<PathBuf> {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::to_value(&self.config)?;
        write_sidecar(out, Payload::new(params).with_outcome(self.outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn found_record_carries_path_and_rows() {
        let cfg = SolveConfig {
            width: 5,
            height: 5,
            ..SolveConfig::default()
        };
        let search = knights::api::search_with(
            cfg.dims().unwrap(),
            &cfg.move_set(),
            cfg.start(),
            cfg.search_cfg(),
            (),
        );
        let rec = SolveRecord::new(cfg, &search, 1.5);
        assert_eq!(rec.outcome, "found");
        assert_eq!(rec.path.len(), 25);
        assert_eq!(rec.path[0], [0, 0]);
        assert_eq!(rec.rows.len(), 5);
        assert_eq!(rec.rows[0][0], 1);

        let dir = tempdir().unwrap();
        let out = dir.path().join("runs").join("tour.json");
        let prov = rec.write(&out).unwrap();
        assert_eq!(prov, dir.path().join("runs").join("tour.provenance.json"));
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["outcome"], "found");
        assert_eq!(parsed["config"]["width"], 5);
        assert_eq!(parsed["path"][24].as_array().unwrap().len(), 2);
    }

    #[test]
    fn failed_record_has_no_path() {
        let cfg = SolveConfig {
            width: 3,
            height: 3,
            ..SolveConfig::default()
        };
        let search = knights::api::search_with(
            cfg.dims().unwrap(),
            &cfg.move_set(),
            cfg.start(),
            cfg.search_cfg(),
            (),
        );
        let rec = SolveRecord::new(cfg, &search, 0.0);
        assert_eq!(rec.outcome, "not_found");
        assert!(rec.path.is_empty());
        assert!(rec.rows.iter().flatten().all(|&c| c == 0));
    }
}
