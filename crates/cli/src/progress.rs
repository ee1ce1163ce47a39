//! Progress logging as a search observer.

use knights::api::{Call, Observer, Progress};

/// Emits a `debug` event every `every` engine calls; `every == 0` is silent.
pub struct LogProgress {
    inner: Progress,
    every: u64,
}

impl LogProgress {
    pub fn new(fan_out: usize, every: u64) -> Self {
        Self {
            inner: Progress::new(fan_out),
            every,
        }
    }

    pub fn calls(&self) -> u64 {
        self.inner.calls()
    }
}

impl Observer for LogProgress {
    fn on_call(&mut self, call: Call) {
        self.inner.on_call(call);
        if self.every == 0 {
            return;
        }
        let calls = self.inner.calls();
        if calls % self.every == 0 {
            tracing::debug!(
                calls,
                depth = call.depth,
                estimate = self.inner.fraction(),
                "progress"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knights::api::{search_with, Dims, MoveSet, Pos, SearchCfg};

    #[test]
    fn logging_observer_does_not_alter_search() {
        let k = MoveSet::knight();
        let plain = search_with(Dims::new(5, 5), &k, Pos::new(0, 0), SearchCfg::default(), ());
        let mut log = LogProgress::new(k.len(), 1000);
        let logged = search_with(
            Dims::new(5, 5),
            &k,
            Pos::new(0, 0),
            SearchCfg::default(),
            &mut log,
        );
        assert_eq!(logged, plain);
        assert_eq!(log.calls(), plain.calls);
    }
}
