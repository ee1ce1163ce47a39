//! Solve configuration: built-in defaults, optional JSON file, then flags.

use anyhow::{Context, Result};
use knights::api::{Dims, MoveSet, Pos, SearchCfg, Strategy, KNIGHT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything `solve` needs. Field names double as the JSON file schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolveConfig {
    pub width: i64,
    pub height: i64,
    pub start: [i32; 2],
    /// Ordered `[dx, dy]` pairs; order is exploration order.
    pub moves: Vec<[i32; 2]>,
    pub prune: bool,
    pub iterative: bool,
    pub max_calls: Option<u64>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start: [0, 0],
            moves: KNIGHT.iter().map(|&(dx, dy)| [dx, dy]).collect(),
            prune: true,
            iterative: false,
            max_calls: None,
        }
    }
}

/// Command-line values that override the file; `None` keeps the file value.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub start_x: Option<i32>,
    pub start_y: Option<i32>,
    pub moves: Option<MoveSet>,
    pub no_prune: bool,
    pub iterative: bool,
    pub max_calls: Option<u64>,
}

impl SolveConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Defaults, or the file at `path`, with `over` applied on top.
    pub fn resolve(path: Option<&Path>, over: Overrides) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        cfg.apply(over);
        Ok(cfg)
    }

    pub fn apply(&mut self, over: Overrides) {
        if let Some(w) = over.width {
            self.width = w;
        }
        if let Some(h) = over.height {
            self.height = h;
        }
        if let Some(x) = over.start_x {
            self.start[0] = x;
        }
        if let Some(y) = over.start_y {
            self.start[1] = y;
        }
        if let Some(m) = over.moves {
            self.moves = m.iter().map(|o| [o.dx, o.dy]).collect();
        }
        if over.no_prune {
            self.prune = false;
        }
        if over.iterative {
            self.iterative = true;
        }
        if over.max_calls.is_some() {
            self.max_calls = over.max_calls;
        }
    }

    pub fn dims(&self) -> Result<Dims> {
        Dims::try_from_signed(self.width, self.height).context("board dimensions")
    }

    pub fn start(&self) -> Pos {
        Pos::new(self.start[0], self.start[1])
    }

    pub fn move_set(&self) -> MoveSet {
        self.moves.iter().map(|&[dx, dy]| (dx, dy)).collect()
    }

    pub fn search_cfg(&self) -> SearchCfg {
        SearchCfg {
            prune_dead_ends: self.prune,
            strategy: if self.iterative {
                Strategy::Iterative
            } else {
                Strategy::Recursive
            },
            max_calls: self.max_calls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_classic_setup() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg.dims().unwrap(), Dims::new(10, 10));
        assert_eq!(cfg.start(), Pos::new(0, 0));
        assert_eq!(cfg.move_set(), MoveSet::knight());
        assert_eq!(cfg.search_cfg(), SearchCfg::default());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("board.json");
        std::fs::write(&path, r#"{"width": 5, "height": 6, "moves": [[1,0],[-1,0]]}"#).unwrap();
        let over = Overrides {
            height: Some(5),
            start_y: Some(2),
            iterative: true,
            ..Overrides::default()
        };
        let cfg = SolveConfig::resolve(Some(&path), over).unwrap();
        assert_eq!(cfg.dims().unwrap(), Dims::new(5, 5));
        assert_eq!(cfg.start(), Pos::new(0, 2));
        assert_eq!(cfg.move_set().to_string(), "1,0;-1,0");
        assert_eq!(cfg.search_cfg().strategy, Strategy::Iterative);
        assert!(cfg.prune);
    }

    #[test]
    fn move_flag_replaces_list() {
        let over = Overrides {
            moves: Some("2,2;-2,-2".parse().unwrap()),
            no_prune: true,
            max_calls: Some(10),
            ..Overrides::default()
        };
        let cfg = SolveConfig::resolve(None, over).unwrap();
        assert_eq!(cfg.moves, vec![[2, 2], [-2, -2]]);
        let scfg = cfg.search_cfg();
        assert!(!scfg.prune_dead_ends);
        assert_eq!(scfg.max_calls, Some(10));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        let cfg = SolveConfig {
            width: -3,
            ..SolveConfig::default()
        };
        let err = cfg.dims().unwrap_err();
        assert!(format!("{err:#}").contains("width"));
    }

    #[test]
    fn unknown_fields_and_missing_files_fail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"widht": 5}"#).unwrap();
        assert!(SolveConfig::load(&path).is_err());
        assert!(SolveConfig::load(&dir.path().join("missing.json")).is_err());
    }
}
