//! Non-preemptive Shortest-Job-First.
//!
//! # Algorithm
//!
//! Two disjoint pools: not-yet-arrived (sorted by `(arrival_time,
//! original_index)`) and ready.
//!
//! 1. Move every process with `arrival_time <= now` into the ready pool.
//! 2. If the ready pool is empty, the CPU idles until the next arrival.
//! 3. Otherwise pick the minimum `(burst_time, original_index)` and run it
//!    to completion. A shorter job arriving mid-run never preempts it.
//!
//! # Complexity
//! O(n^2) in the worst case (linear scan of the ready pool per dispatch).

use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::{Process, ProcessResult, ScheduleResult};
use crate::validation::check_input;

use super::record::{arena, arrival_order};
use super::timeline::Timeline;

/// Schedules `processes` shortest-job-first without preemption.
pub fn schedule_non_preemptive_sjf(
    processes: &[Process],
) -> Result<ScheduleResult, ScheduleError> {
    check_input(processes)?;
    log::debug!("SJF: scheduling {} processes", processes.len());

    let records = arena(processes);
    let mut pending: VecDeque<usize> = arrival_order(&records).into();
    let mut ready: Vec<usize> = Vec::new();
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(records.len());
    let mut now = 0;

    while !pending.is_empty() || !ready.is_empty() {
        while let Some(&idx) = pending.front() {
            if !records[idx].has_arrived(now) {
                break;
            }
            ready.push(idx);
            pending.pop_front();
        }

        let Some(pos) = ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &idx)| records[idx].burst_key())
            .map(|(pos, _)| pos)
        else {
            // Idle: pending is non-empty here, jump to the next arrival.
            if let Some(&next) = pending.front() {
                now = records[next].process.arrival_time;
            }
            continue;
        };

        let record = &records[ready.swap_remove(pos)];
        let process = record.process;
        let end = process.completion_if_started_at(now);
        log::trace!("SJF: t={now} run process {} until {end}", process.id);

        timeline.run(record, now, end);
        results.push(ProcessResult::completed(&process, end));
        now = end;
    }

    let result = ScheduleResult::from_parts(timeline.finish(), results);
    log::debug!(
        "SJF: avg waiting {:.2}, avg turnaround {:.2}",
        result.average_waiting_time,
        result.average_turnaround_time
    );
    Ok(result)
}
