//! Per-process simulation records.
//!
//! Each scheduler copies the caller's processes into an indexed arena of
//! [`SimProcess`] records. Remaining burst and completion state live on the
//! record itself, so nothing is looked up by id and duplicate ids cannot
//! alias each other's state.
//!
//! # Ordering keys
//! Every comparator in the engine ends with the original input index. That
//! index is the canonical tie-break and makes every run reproducible.

use crate::models::Process;

/// Mutable simulation state for one input process.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SimProcess {
    /// Position in the caller's list.
    pub index: usize,
    /// The caller's process, unchanged.
    pub process: Process,
    /// Burst time still to run.
    pub remaining: i64,
}

impl SimProcess {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.process.arrival_time <= now
    }

    /// `(arrival_time, original_index)`.
    #[inline]
    pub fn arrival_key(&self) -> (i64, usize) {
        (self.process.arrival_time, self.index)
    }

    /// `(burst_time, original_index)`.
    #[inline]
    pub fn burst_key(&self) -> (i64, usize) {
        (self.process.burst_time, self.index)
    }

    /// `(remaining, original_index)`.
    #[inline]
    pub fn remaining_key(&self) -> (i64, usize) {
        (self.remaining, self.index)
    }
}

/// Builds the arena in input order.
pub(crate) fn arena(processes: &[Process]) -> Vec<SimProcess> {
    processes
        .iter()
        .enumerate()
        .map(|(index, &process)| SimProcess {
            index,
            process,
            remaining: process.burst_time,
        })
        .collect()
}

/// Arena indices sorted by `(arrival_time, original_index)`.
pub(crate) fn arrival_order(records: &[SimProcess]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by_key(|&i| records[i].arrival_key());
    order
}
