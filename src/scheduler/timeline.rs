//! Gantt chart construction and normalization.
//!
//! Schedulers append raw execution slices in time order; [`Timeline::finish`]
//! then drops zero-length slices and merges adjacent slices of the same
//! process into one span. The pass is independent of the algorithm, so SRTF
//! and Round Robin share it, and FCFS/SJF go through it unchanged.
//!
//! Slices are keyed by arena index, not by id or value: two input processes
//! that happen to look identical still get separate spans.

use crate::models::GanttChartEntry;

use super::record::SimProcess;

/// A raw slice tagged with the arena index of its process.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Slice {
    pub index: usize,
    pub entry: GanttChartEntry,
}

/// Raw slice accumulator.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    slices: Vec<Slice>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `record` held the CPU over `[start, end)`.
    pub fn run(&mut self, record: &SimProcess, start: i64, end: i64) {
        debug_assert!(end >= start);
        self.slices.push(Slice {
            index: record.index,
            entry: GanttChartEntry::new(record.process, start, end),
        });
    }

    /// Normalized chart.
    pub fn finish(self) -> Vec<GanttChartEntry> {
        normalize(self.slices)
    }
}

/// Drops empty slices and coalesces contiguous slices of the same record.
///
/// Slices separated by idle time stay separate even for the same process.
pub(crate) fn normalize(slices: Vec<Slice>) -> Vec<GanttChartEntry> {
    let mut merged: Vec<Slice> = Vec::with_capacity(slices.len());

    for slice in slices
        .into_iter()
        .filter(|s| s.entry.end_time > s.entry.start_time)
    {
        match merged.last_mut() {
            Some(last)
                if last.index == slice.index
                    && last.entry.end_time == slice.entry.start_time =>
            {
                last.entry.end_time = slice.entry.end_time;
            }
            _ => merged.push(slice),
        }
    }

    merged.into_iter().map(|s| s.entry).collect()
}
