//! Cell probes used by the engine: availability and one-ply dead ends.

use crate::grid::{Pos, Table};
use crate::moves::MoveSet;

/// In bounds and not yet visited.
#[inline]
pub fn is_available(table: &Table, pos: Pos) -> bool {
    table.get(pos) == Some(0)
}

/// True if `pos` has no available neighbor under `moves`.
///
/// `pos` itself is not marked when this runs. Only direct neighbors are
/// inspected; a cell with one open neighbor that is doomed later is left to
/// ordinary backtracking.
pub fn is_dead_end(table: &Table, moves: &MoveSet, pos: Pos) -> bool {
    !moves.iter().any(|&o| is_available(table, pos + o))
}

/// True if some available neighbor of `pos` is a dead end.
///
/// Called right after `pos` is committed: such a neighbor can no longer be
/// entered, so the branch cannot cover the board.
pub fn strands_neighbor(table: &Table, moves: &MoveSet, pos: Pos) -> bool {
    moves.iter().any(|&o| {
        let n = pos + o;
        is_available(table, n) && is_dead_end(table, moves, n)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Dims;

    #[test]
    fn availability_checks_bounds_then_occupancy() {
        let mut t = Table::new(Dims::new(4, 3));
        assert!(is_available(&t, Pos::new(0, 0)));
        assert!(is_available(&t, Pos::new(3, 2)));
        assert!(!is_available(&t, Pos::new(4, 0)));
        assert!(!is_available(&t, Pos::new(0, -1)));
        t.mark(Pos::new(2, 1), 1);
        assert!(!is_available(&t, Pos::new(2, 1)));
    }

    #[test]
    fn corner_of_3x3_with_knight() {
        // (0,0) reaches (1,2) and (2,1) only.
        let k = MoveSet::knight();
        let mut t = Table::new(Dims::new(3, 3));
        assert!(!is_dead_end(&t, &k, Pos::new(0, 0)));
        t.mark(Pos::new(1, 2), 1);
        assert!(!is_dead_end(&t, &k, Pos::new(0, 0)));
        t.mark(Pos::new(2, 1), 2);
        assert!(is_dead_end(&t, &k, Pos::new(0, 0)));
        // the 3x3 centre has no knight moves at all
        assert!(is_dead_end(&Table::new(Dims::new(3, 3)), &k, Pos::new(1, 1)));
    }

    #[test]
    fn committing_a_cell_can_strand_its_neighbor() {
        let k = MoveSet::knight();
        let mut t = Table::new(Dims::new(3, 3));
        // (0,0)'s other exit is (2,1); taking it, then committing (1,2)
        // leaves (0,0) open with no way out.
        t.mark(Pos::new(2, 1), 1);
        t.mark(Pos::new(1, 2), 2);
        assert!(strands_neighbor(&t, &k, Pos::new(1, 2)));
        let fresh = Table::new(Dims::new(3, 3));
        assert!(!strands_neighbor(&fresh, &k, Pos::new(0, 0)));
    }

    #[test]
    fn empty_move_set_is_always_a_dead_end() {
        let t = Table::new(Dims::new(2, 2));
        assert!(is_dead_end(&t, &MoveSet::default(), Pos::new(0, 0)));
        assert!(!strands_neighbor(&t, &MoveSet::default(), Pos::new(0, 0)));
    }
}
