//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort processes by `(arrival_time, original_index)`.
//! 2. Walk the sorted list with a clock; jump the clock forward over idle gaps.
//! 3. Run each process to completion in one span.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the walk.

use crate::error::ScheduleError;
use crate::models::{Process, ProcessResult, ScheduleResult};
use crate::validation::check_input;

use super::record::{arena, arrival_order};
use super::timeline::Timeline;

/// Schedules `processes` first-come-first-served.
///
/// # Example
///
/// ```
/// use cpu_sched::models::Process;
/// use cpu_sched::scheduler::schedule_fcfs;
///
/// let result = schedule_fcfs(&[Process::new(1, 5, 0), Process::new(2, 3, 0)]).unwrap();
/// assert_eq!(result.completion_order(), vec![1, 2]);
/// assert!((result.average_waiting_time - 2.5).abs() < 1e-10);
/// ```
pub fn schedule_fcfs(processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
    check_input(processes)?;
    log::debug!("FCFS: scheduling {} processes", processes.len());

    let records = arena(processes);
    let mut timeline = Timeline::new();
    let mut results = Vec::with_capacity(records.len());
    let mut now = 0;

    for idx in arrival_order(&records) {
        let record = &records[idx];
        let process = record.process;
        // Idle until arrival
        now = now.max(process.arrival_time);
        let end = process.completion_if_started_at(now);
        log::trace!("FCFS: t={now} run process {} until {end}", process.id);

        timeline.run(record, now, end);
        results.push(ProcessResult::completed(&process, end));
        now = end;
    }

    let result = ScheduleResult::from_parts(timeline.finish(), results);
    log::debug!(
        "FCFS: avg waiting {:.2}, avg turnaround {:.2}",
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
    fn test_fcfs_tie_broken_by_input_order() {
        let result = schedule_fcfs(&[Process::new(1, 5, 0), Process::new(2, 3, 0)]).unwrap();
        assert_eq!(result.completion_order(), vec![1, 2]);
        let waits: Vec<i64> = result.processes.iter().map(|p| p.waiting_time).collect();
        let tats: Vec<i64> = result.processes.iter().map(|p| p.turnaround_time).collect();
        assert_eq!(waits, vec![0, 5]);
        assert_eq!(tats, vec![5, 8]);
        assert!((result.average_waiting_time - 2.5).abs() < 1e-10);
        assert!((result.average_turnaround_time - 6.5).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_orders_by_arrival_not_input() {
        let result = schedule_fcfs(&[
            Process::new(1, 2, 4),
            Process::new(2, 3, 0),
            Process::new(3, 1, 1),
        ])
        .unwrap();
        assert_eq!(result.completion_order(), vec![2, 3, 1]);
        assert_eq!(spans(&result), vec![(2, 0, 3), (3, 3, 4), (1, 4, 6)]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let result = schedule_fcfs(&[Process::new(1, 2, 0), Process::new(2, 2, 5)]).unwrap();
        // No entry for the idle span [2, 5).
        assert_eq!(spans(&result), vec![(1, 0, 2), (2, 5, 7)]);
        assert_eq!(result.result_for(2).unwrap().waiting_time, 0);
        assert_eq!(result.idle_time(), 3);
    }

    #[test]
    fn test_fcfs_late_first_arrival() {
        let result = schedule_fcfs(&[Process::new(1, 3, 4)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 4, 7)]);
        assert_eq!(result.processes[0].turnaround_time, 3);
    }

    #[test]
    fn test_fcfs_never_splits() {
        let procs = vec![
            Process::new(1, 4, 0),
            Process::new(2, 1, 1),
            Process::new(3, 2, 1),
        ];
        let result = schedule_fcfs(&procs).unwrap();
        assert_eq!(result.gantt_chart.len(), 3);
    }

    #[test]
    fn test_fcfs_identical_processes_not_merged() {
        let result = schedule_fcfs(&[Process::new(1, 2, 0), Process::new(1, 2, 0)]).unwrap();
        assert_eq!(spans(&result), vec![(1, 0, 2), (1, 2, 4)]);
        assert_eq!(result.processes.len(), 2);
    }

    #[test]
    fn test_fcfs_rejects_empty() {
        assert!(schedule_fcfs(&[]).is_err());
    }

    #[test]
    fn test_fcfs_rejects_zero_burst() {
        assert!(schedule_fcfs(&[Process::new(1, 0, 0)]).is_err());
    }
}
