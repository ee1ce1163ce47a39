//! Backtracking with undo-on-failure and one-ply dead-end pruning.
//!
//! Both strategies share `enter`, which runs the per-call checks and the
//! commit; they differ only in where the pending offsets of each committed
//! cell are kept (native frames vs. an explicit `Vec<Frame>`).

use crate::grid::{Pos, Table};
use crate::moves::MoveSet;

use super::observe::{Call, Observer};
use super::probe::{is_available, strands_neighbor};
use super::types::SearchCfg;

/// Result of the checks at the top of one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Entry {
    /// The board is full.
    Complete,
    /// Nothing was committed (or the commit was undone).
    Rejected,
    /// `pos` now holds label `depth + 1`; its offsets are still to be tried.
    Committed,
}

/// Pending work of a committed cell in the iterative strategy.
#[derive(Clone, Copy, Debug)]
struct Frame {
    pos: Pos,
    next: usize,
}

/// Engine state for one search attempt over an exclusively borrowed table.
pub(crate) struct Engine<'a, O: Observer> {
    table: &'a mut Table,
    moves: &'a MoveSet,
    observer: O,
    total: usize,
    prune: bool,
    max_calls: Option<u64>,
    pub(crate) calls: u64,
    pub(crate) exhausted: bool,
}

impl<'a, O: Observer> Engine<'a, O> {
    pub(crate) fn new(
        table: &'a mut Table,
        moves: &'a MoveSet,
        cfg: SearchCfg,
        observer: O,
    ) -> Self {
        let total = table.dims().total();
        Self {
            table,
            moves,
            observer,
            total,
            prune: cfg.prune_dead_ends && moves.is_symmetric(),
            max_calls: cfg.max_calls,
            calls: 0,
            exhausted: false,
        }
    }

    fn enter(&mut self, pos: Pos, depth: usize, branch: usize) -> Entry {
        self.calls += 1;
        self.observer.on_call(Call { depth, branch });
        if self.max_calls.is_some_and(|limit| self.calls > limit) {
            self.exhausted = true;
            return Entry::Rejected;
        }
        if depth == self.total {
            return Entry::Complete;
        }
        if !is_available(self.table, pos) {
            return Entry::Rejected;
        }
        let label = depth + 1;
        self.table.mark(pos, label as u32);
        // Also covers a 1x1 board under an empty move set.
        if label == self.total {
            return Entry::Complete;
        }
        // With one cell left, an isolated neighbor is simply the last cell.
        if self.prune
            && label < self.total - 1
            && strands_neighbor(self.table, self.moves, pos)
        {
            self.table.clear(pos);
            return Entry::Rejected;
        }
        Entry::Committed
    }

    /// Native recursion. Returns true once the board is full.
    pub(crate) fn descend(&mut self, pos: Pos, depth: usize, branch: usize) -> bool {
        match self.enter(pos, depth, branch) {
            Entry::Complete => true,
            Entry::Rejected => false,
            Entry::Committed => {
                let moves = self.moves;
                for (i, &o) in moves.iter().enumerate() {
                    if self.descend(pos + o, depth + 1, i) {
                        return true;
                    }
                    if self.exhausted {
                        break;
                    }
                }
                self.table.clear(pos);
                false
            }
        }
    }

    /// Explicit stack; visits candidates in exactly the order of `descend`.
    pub(crate) fn unwind(&mut self, start: Pos) -> bool {
        match self.enter(start, 0, 0) {
            Entry::Complete => return true,
            Entry::Rejected => return false,
            Entry::Committed => {}
        }
        let moves: &'a MoveSet = self.moves;
        let moves = moves.as_slice();
        let mut stack = vec![Frame { pos: start, next: 0 }];
        loop {
            let depth = stack.len();
            let Some(top) = stack.last_mut() else {
                return false;
            };
            let Some(&o) = moves.get(top.next) else {
                let pos = top.pos;
                stack.pop();
                self.table.clear(pos);
                continue;
            };
            let branch = top.next;
            top.next += 1;
            let cand = top.pos + o;
            match self.enter(cand, depth, branch) {
                Entry::Complete => return true,
                Entry::Committed => stack.push(Frame { pos: cand, next: 0 }),
                Entry::Rejected if self.exhausted => {
                    for f in stack.drain(..).rev() {
                        self.table.clear(f.pos);
                    }
                    return false;
                }
                Entry::Rejected => {}
            }
        }
    }
}
