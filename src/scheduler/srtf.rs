//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Conceptually a per-unit simulation: at every integer time the arrived,
//! unfinished process with the smallest `(remaining, original_index)` runs
//! for one unit.
//!
//! The loop advances by events instead of single units. Between two
//! arrivals the running process only gets shorter, so it keeps winning the
//! comparison; the selection can only change at an arrival or a completion.
//! Each step therefore runs the selected process until the earlier of its
//! completion and the next arrival, which yields the same chart as ticking.
//!
//! # Complexity
//! O(n) events, each with an O(n) ready scan: O(n^2).

use crate::error::ScheduleError;
use crate::models::{Process, ProcessResult, ScheduleResult};
use crate::validation::check_input;

use super::record::{arena, arrival_order};
use super::timeline::Timeline;

/// Schedules `processes` shortest-remaining-time-first.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::schedule_srtf;
///
/// let result = schedule_srtf(&[Process::new(1, 8, 0), Process::new(2, 4, 1)]).unwrap();
/// let spans: Vec<_> = result
///     .gantt_chart
///     .iter()
///     .map(|e| (e.process.id, e.start_time, e.end_time))
///     .collect();
/// assert_eq!(spans, vec![(1, 0, 1), (2, 1, 5), (1, 5, 12)]);
/// ```
pub fn schedule_srtf(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    check_input(processes)?;
    log::debug!("SRTF: scheduling {} processes", processes.len());

    let mut records = arena(processes);
    // Arrival times in ascending order; `next_arrival` walks it.
    let arrivals: Vec<i64> = arrival_order(&records)
        .into_iter()
        .map(|i| records[i].process.arrival_time)
        .collect();
    let mut next_arrival = 0;
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(records.len());
    let mut now = 0;

    while results.len() < records.len() {
        while next_arrival < arrivals.len() && arrivals[next_arrival] <= now {
            next_arrival += 1;
        }
        let upcoming = arrivals.get(next_arrival).copied();

        let selected = records
            .iter()
            .filter(|r| r.has_arrived(now) && !r.is_done())
            .min_by_key(|r| r.remaining_key())
            .map(|r| r.index);

        let Some(idx) = selected else {
            // Idle until the next arrival.
            match upcoming {
                Some(t) => {
                    now = t;
                    continue;
                }
                None => break,
            }
        };

        let record = &mut records[idx];
        let finish = now + record.remaining;
        let end = upcoming.map_or(finish, |t| t.min(finish));
        log::trace!(
            "SRTF: t={now} run process {} (remaining {}) until {end}",
            record.process.id,
            record.remaining
        );

        timeline.run(record, now, end);
        record.remaining -= end - now;
        now = end;

        if record.is_done() {
            results.push(ProcessResult::completed(&record.process, now));
        }
    }

    let result = ScheduleResult::from_parts(timeline.finish(), results);
    log::debug!(
        "SRTF: avg waiting {:.2}, avg turnaround {:.2}",
        result.average_waiting_time,
        result.average_turnaround_time
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(result: &ScheduleResult) -> Vec<(u32, i64, i64)> {
        result
            .gantt_chart
            .iter()
            .map(|e| (e.process.id, e.start_time, e.end_time))
            .collect()
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let result = schedule_srtf(&[Process::new(1, 8, 0), Process::new(2, 4, 1)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 1), (2, 1, 5), (1, 5, 12)]);
        assert_eq!(result.completion_order(), vec![2, 1]);
        let p1 = result.result_for(1).unwrap();
        assert_eq!(p1.turnaround_time, 12);
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(result.result_for(2).unwrap().waiting_time, 0);
    }

    #[test]
    fn test_srtf_textbook() {
        let result = schedule_srtf(&[
            Process::new(1, 8, 0),
            Process::new(2, 4, 1),
            Process::new(3, 9, 2),
            Process::new(4, 5, 3),
        ])
        .unwrap();
        assert_eq!(
            spans(&result),
            vec![(1, 0, 1), (2, 1, 5), (4, 5, 10), (1, 10, 17), (3, 17, 26)]
        );
        // Waits: 9, 0, 15, 2
        assert!((result.average_waiting_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_srtf_equal_remaining_does_not_preempt_lower_index() {
        // At t=2, process 1 has 2 left and process 2 arrives with 2: the
        // earlier-listed process keeps the CPU.
        let result = schedule_srtf(&[Process::new(1, 4, 0), Process::new(2, 2, 2)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 4), (2, 4, 6)]);
    }

    #[test]
    fn test_srtf_equal_remaining_prefers_lower_index() {
        // Listed first but arriving later: wins the tie at t=2.
        let result = schedule_srtf(&[Process::new(2, 2, 2), Process::new(1, 4, 0)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 2), (2, 2, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_srtf_idle_gap_closes_entry() {
        let result = schedule_srtf(&[Process::new(1, 2, 0), Process::new(2, 3, 6)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 2), (2, 6, 9)]);
    }

    #[test]
    fn test_srtf_coalesces_through_non_preempting_arrivals() {
        let result = schedule_srtf(&[
            Process::new(1, 3, 0),
            Process::new(2, 5, 1),
            Process::new(3, 6, 2),
        ])
        .unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 3), (2, 3, 8), (3, 8, 14)]);
    }

    #[test]
    fn test_srtf_rejects_empty() {
        assert!(schedule_srtf(&[]).is_err());
    }
}
