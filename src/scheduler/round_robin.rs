//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every not-yet-admitted process with `arrival_time <= now` to the
//!    back of the FIFO ready queue, in `(arrival_time, original_index)` order.
//! 2. If the queue is empty, the CPU idles until the next arrival.
//! 3. Otherwise dequeue the front process and run it for
//!    `min(remaining, quantum)` units.
//! 4. Admit arrivals up to the end of the slice, then re-enqueue the
//!    process at the back if it has work left.
//!
//! Consecutive slices of the same process (e.g. when it is the only ready
//! process) are merged into one span by the timeline normalization.
//!
//! # Complexity
//! O(total_burst / quantum + n) slices.

use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::{Process, ProcessResult, ScheduleResult};
use crate::validation::{check_input, validate_quantum};

use super::record::{arena, arrival_order, SimProcess};
use super::timeline::Timeline;

/// Admits arrivals in arrival order.
struct Admission {
    order: Vec<usize>,
    next: usize,
}

impl Admission {
    fn new(records: &[SimProcess]) -> Self {
        Self {
            order: arrival_order(records),
            next: 0,
        }
    }

    fn admit(&mut self, records: &[SimProcess], now: i64, queue: &mut VecDeque<usize>) {
        while let Some(&idx) = self.order.get(self.next) {
            if !records[idx].has_arrived(now) {
                break;
            }
            queue.push_back(idx);
            self.next += 1;
        }
    }

    fn next_arrival(&self, records: &[SimProcess]) -> Option<i64> {
        self.order
            .get(self.next)
            .map(|&idx| records[idx].process.arrival_time)
    }
}

/// Schedules `processes` round robin with the given `quantum`.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::schedule_round_robin;
///
/// let result =
///     schedule_round_robin(&[Process::new(1, 5, 0), Process::new(2, 3, 0)], 2).unwrap();
/// let ids: Vec<u32> = result.gantt_chart.iter().map(|e| e.process.id).collect();
/// assert_eq!(ids, vec![1, 2, 1, 2, 1]);
/// ```
pub fn schedule_round_robin(
    processes: &[Process],
    quantum: i64,
) -> Result<ScheduleResult, ScheduleError> {
    let mut errors = Vec::new();
    if let Err(e) = check_input(processes) {
        errors.extend_from_slice(e.errors());
    }
    if let Err(e) = validate_quantum(quantum) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(ScheduleError::InvalidInput(errors));
    }
    log::debug!(
        "RR: scheduling {} processes with quantum {quantum}",
        processes.len()
    );

    let mut records = arena(processes);
    let mut admission = Admission::new(&records);
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(records.len());
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(records.len());
    let mut now = 0;

    admission.admit(&records, now, &mut queue);

    while results.len() < records.len() {
        let Some(idx) = queue.pop_front() else {
            // Idle until the next arrival.
            match admission.next_arrival(&records) {
                Some(t) => {
                    now = now.max(t);
                    admission.admit(&records, now, &mut queue);
                    continue;
                }
                None => break,
            }
        };

        let slice = records[idx].remaining.min(quantum);
        let process = records[idx].process;
        log::trace!(
            "RR: t={now} run process {} for {slice} (remaining {})",
            process.id,
            records[idx].remaining
        );
        timeline.run(&records[idx], now, now + slice);
        records[idx].remaining -= slice;
        now += slice;

        // New arrivals queue ahead of the preempted process.
        admission.admit(&records, now, &mut queue);

        if records[idx].is_done() {
            results.push(ProcessResult::completed(&process, now));
        } else {
            queue.push_back(idx);
        }
    }

    let result = ScheduleResult::from_parts(timeline.finish(), results);
    log::debug!(
        "RR: avg waiting {:.2}, avg turnaround {:.2}",
        result.average_waiting_time,
        result.average_turnaround_time
    );
    Ok(result)
}
