//! Independent check of a finished table.

use std::fmt;

use crate::grid::{Pos, Table};
use crate::moves::MoveSet;

/// Why a table is not a complete tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    /// A cell is still zero.
    Unvisited { pos: Pos },
    /// A label outside `1..=total`.
    OutOfRange { pos: Pos, label: u32 },
    /// The same label on two cells.
    Duplicate { label: u32, first: Pos, second: Pos },
    /// Labels `label` and `label + 1` are not one legal move apart.
    IllegalStep { label: u32, from: Pos, to: Pos },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvisited { pos } => write!(f, "cell ({}, {}) never visited", pos.x, pos.y),
            Self::OutOfRange { pos, label } => {
                write!(f, "label {label} at ({}, {}) is out of range", pos.x, pos.y)
            }
            Self::Duplicate {
                label,
                first,
                second,
            } => write!(
                f,
                "label {label} appears at ({}, {}) and ({}, {})",
                first.x, first.y, second.x, second.y
            ),
            Self::IllegalStep { label, from, to } => write!(
                f,
                "step {label} -> {} from ({}, {}) to ({}, {}) is not a legal move",
                label + 1,
                from.x,
                from.y,
                to.x,
                to.y
            ),
        }
    }
}

impl std::error::Error for TourError {}

/// Visited cells ordered by label. Gaps and duplicates are not detected here.
pub fn tour_path(table: &Table) -> Vec<Pos> {
    let mut cells: Vec<(u32, Pos)> = table
        .labelled()
        .filter(|&(_, c)| c != 0)
        .map(|(p, c)| (c, p))
        .collect();
    cells.sort_unstable();
    cells.into_iter().map(|(_, p)| p).collect()
}

/// Check that `table` labels every cell exactly once with `1..=total` and
/// that consecutive labels are one offset of `moves` apart. Returns the path.
pub fn check_tour(table: &Table, moves: &MoveSet) -> Result<Vec<Pos>, TourError> {
    let total = table.dims().total();
    let mut slots: Vec<Option<Pos>> = vec![None; total];
    for (pos, label) in table.labelled() {
        if label == 0 {
            return Err(TourError::Unvisited { pos });
        }
        if label as usize > total {
            return Err(TourError::OutOfRange { pos, label });
        }
        let slot = &mut slots[label as usize - 1];
        if let Some(first) = *slot {
            return Err(TourError::Duplicate {
                label,
                first,
                second: pos,
            });
        }
        *slot = Some(pos);
    }
    // `total` distinct labels in 1..=total fill every slot.
    let path: Vec<Pos> = slots.into_iter().flatten().collect();
    for (i, w) in path.windows(2).enumerate() {
        if !moves.contains(w[0].delta_to(w[1])) {
            return Err(TourError::IllegalStep {
                label: i as u32 + 1,
                from: w[0],
                to: w[1],
            });
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dims;

    fn table_from(dims: Dims, labels: &[u32]) -> Table {
        let mut t = Table::new(dims);
        for (i, &c) in labels.iter().enumerate() {
            let w = dims.width as usize;
            t.mark(Pos::new((i % w) as i32, (i / w) as i32), c);
        }
        t
    }

    #[test]
    fn accepts_a_rook_walk() {
        let rook = MoveSet::from_iter([(1, 0), (-1, 0), (0, 1), (0, -1)]);
        // boustrophedon on 3x2
        let t = table_from(Dims::new(3, 2), &[1, 2, 3, 6, 5, 4]);
        let path = check_tour(&t, &rook).unwrap();
        assert_eq!(path.first(), Some(&Pos::new(0, 0)));
        assert_eq!(path.last(), Some(&Pos::new(0, 1)));
        assert_eq!(tour_path(&t), path);
    }

    #[test]
    fn rejects_gaps_duplicates_and_jumps() {
        let rook = MoveSet::from_iter([(1, 0), (-1, 0), (0, 1), (0, -1)]);
        let d = Dims::new(3, 2);
        assert!(matches!(
            check_tour(&table_from(d, &[1, 2, 3, 6, 5, 0]), &rook),
            Err(TourError::Unvisited { .. })
        ));
        assert!(matches!(
            check_tour(&table_from(d, &[1, 2, 3, 6, 5, 7]), &rook),
            Err(TourError::OutOfRange { label: 7, .. })
        ));
        assert!(matches!(
            check_tour(&table_from(d, &[1, 2, 3, 6, 5, 5]), &rook),
            Err(TourError::Duplicate { label: 5, .. })
        ));
        assert!(matches!(
            check_tour(&table_from(d, &[1, 2, 4, 6, 5, 3]), &rook),
            Err(TourError::IllegalStep { label: 2, .. })
        ));
    }

    #[test]
    fn empty_board_is_a_trivial_tour() {
        let t = Table::new(Dims::new(0, 4));
        assert_eq!(check_tour(&t, &MoveSet::default()), Ok(Vec::new()));
    }
}
