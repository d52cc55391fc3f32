//! Setup-phase stream partitioning across many models.
//!
//! Every model's [`MobilityModel::assign_streams`] consumes a contiguous
//! block of indices and reports its size.  `StreamAllocator` is the
//! accumulator that chains those calls so no two sources share an index:
//!
//! ```text
//! next = start
//! for model in models:
//!     next += model.assign_streams(next)
//! ```
//!
//! The pass is single-shot and not reentrant.  Running it twice over the same
//! models with overlapping ranges silently breaks uniqueness.

use tracing::debug;

use crate::MobilityModel;

/// Running cursor over the global stream-index pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StreamAllocator {
    next: i64,
}

impl StreamAllocator {
    pub fn new(start: i64) -> Self {
        Self { next: start }
    }

    /// Index the next model will receive.
    #[inline]
    pub fn next_index(&self) -> i64 {
        self.next
    }

    /// Assign streams to `model` and advance past what it consumed.
    /// Returns the number of indices consumed.
    pub fn assign(&mut self, model: &mut dyn MobilityModel) -> i64 {
        let start = self.next;
        let used = model.assign_streams(start);
        debug!(model = model.name(), start, used, "assigned streams");
        self.next = start + used;
        used
    }

    /// Assign across `models` in slice order.  Returns the total consumed.
    pub fn assign_all(&mut self, models: &mut [Box<dyn MobilityModel>]) -> i64 {
        models.iter_mut().map(|m| self.assign(m.as_mut())).sum()
    }
}

/// Single-pass assignment starting at `start`; returns the total consumed.
pub fn assign_streams_from(models: &mut [Box<dyn MobilityModel>], start: i64) -> i64 {
    StreamAllocator::new(start).assign_all(models)
}
