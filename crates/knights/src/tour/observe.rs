//! Diagnostic hooks.
//!
//! An `Observer` sees one `Call` per engine call and nothing else: it gets no
//! access to the table and returns nothing, so it cannot steer the search.

/// What the engine reports on entry to one call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Call {
    /// Moves completed before this call (the root call has depth 0).
    pub depth: usize,
    /// Index of the offset that produced this candidate; 0 for the root.
    pub branch: usize,
}

pub trait Observer {
    fn on_call(&mut self, call: Call);
}

/// No instrumentation.
impl Observer for () {
    #[inline]
    fn on_call(&mut self, _call: Call) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn on_call(&mut self, call: Call) {
        (**self).on_call(call)
    }
}

/// Adapts a closure into an observer.
pub struct OnCall<F>(pub F);

impl<F: FnMut(Call)> Observer for OnCall<F> {
    #[inline]
    fn on_call(&mut self, call: Call) {
        (self.0)(call)
    }
}

/// Counts engine calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CallCounter {
    pub calls: u64,
}

impl Observer for CallCounter {
    #[inline]
    fn on_call(&mut self, _call: Call) {
        self.calls += 1;
    }
}

/// Rough fraction of the search tree already behind the current path.
///
/// Treats the tree as complete with fan-out `|moves|`: taking branch `b` at
/// depth `d` means branches `0..b` there are done, each worth `|moves|^-d`.
/// Pruned and rejected subtrees are ignored, so the value is cosmetic. It is
/// monotone along the visiting order and stays in `[0, 1)`.
#[derive(Clone, Debug)]
pub struct Progress {
    fan_out: usize,
    path: Vec<usize>,
    calls: u64,
}

impl Progress {
    pub fn new(fan_out: usize) -> Self {
        Self {
            fan_out,
            path: Vec::new(),
            calls: 0,
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls
    }

    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn fraction(&self) -> f64 {
        if self.fan_out == 0 {
            return 0.0;
        }
        let m = self.fan_out as f64;
        let mut weight = 1.0;
        let mut acc = 0.0;
        for &b in self.path.iter().skip(1) {
            weight /= m;
            if weight == 0.0 {
                break;
            }
            acc += b as f64 * weight;
        }
        acc
    }
}

impl Observer for Progress {
    fn on_call(&mut self, call: Call) {
        self.calls += 1;
        self.path.truncate(call.depth);
        self.path.push(call.branch);
    }
}
