//! Schedule result model.
//!
//! A schedule result is the complete output of one scheduling call: the
//! Gantt chart (CPU occupancy timeline), per-process metrics in completion
//! order, and the aggregate averages.
//!
//! # Invariants
//! - Gantt entries are ordered, non-overlapping, and never zero-length.
//! - Gaps between entries are idle CPU time.
//! - `turnaround_time = completion_time - arrival_time`
//! - `waiting_time = turnaround_time - burst_time`

use serde::{Deserialize, Serialize};

use super::Process;

/// One contiguous span during which a process occupies the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttChartEntry {
    /// The process on the CPU.
    pub process: Process,
    /// Start of the span (inclusive).
    pub start_time: i64,
    /// End of the span (exclusive).
    pub end_time: i64,
}

impl GanttChartEntry {
    /// Creates a new entry.
    pub fn new(process: Process, start_time: i64, end_time: i64) -> Self {
        Self {
            process,
            start_time,
            end_time,
        }
    }

    /// Span length (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// Per-process outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub id: u32,
    /// Original total burst time.
    pub burst_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Completion time minus arrival time.
    pub turnaround_time: i64,
    /// Arrival time of the process.
    pub arrival_time: i64,
    /// Time at which the last unit of work finished.
    pub completion_time: i64,
}

impl ProcessResult {
    /// Derives the metrics of `process` completing at `completion_time`.
    pub fn completed(process: &Process, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            burst_time: process.burst_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
            arrival_time: process.arrival_time,
            completion_time,
        }
    }
}

/// The full output of a scheduling call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResult {
    /// CPU occupancy timeline.
    pub gantt_chart: Vec<GanttChartEntry>,
    /// One result per input process, in completion order.
    pub processes: Vec<ProcessResult>,
    /// Mean of `processes[*].waiting_time`.
    pub average_waiting_time: f64,
    /// Mean of `processes[*].turnaround_time`.
    pub average_turnaround_time: f64,
}

impl ScheduleResult {
    /// Assembles a result and computes the averages.
    ///
    /// Callers guarantee `processes` is non-empty; input validation rejects
    /// empty workloads before any simulation runs.
    pub(crate) fn from_parts(
        gantt_chart: Vec<GanttChartEntry>,
        processes: Vec<ProcessResult>,
    ) -> Self {
        debug_assert!(!processes.is_empty());
        let n = processes.len() as f64;
        // Each value fits in i64; their sum need not.
        let total_waiting: i128 = processes.iter().map(|p| p.waiting_time as i128).sum();
        let total_turnaround: i128 = processes.iter().map(|p| p.turnaround_time as i128).sum();

        Self {
            gantt_chart,
            processes,
            average_waiting_time: total_waiting as f64 / n,
            average_turnaround_time: total_turnaround as f64 / n,
        }
    }

    /// Latest end time across the chart.
    pub fn makespan(&self) -> i64 {
        self.gantt_chart.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total time the CPU was occupied.
    pub fn busy_time(&self) -> i64 {
        self.gantt_chart.iter().map(GanttChartEntry::duration).sum()
    }

    /// Idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Number of adjacent chart entries whose process differs.
    ///
    /// Entries separated by idle time still count.
    pub fn context_switches(&self) -> usize {
        self.gantt_chart
            .windows(2)
            .filter(|w| w[0].process.id != w[1].process.id)
            .count()
    }

    /// All chart entries of one process.
    pub fn entries_for(&self, id: u32) -> Vec<&GanttChartEntry> {
        self.gantt_chart
            .iter()
            .filter(|e| e.process.id == id)
            .collect()
    }

    /// First time the process got the CPU.
    pub fn first_start(&self, id: u32) -> Option<i64> {
        self.gantt_chart
            .iter()
            .find(|e| e.process.id == id)
            .map(|e| e.start_time)
    }

    /// Result for one process.
    pub fn result_for(&self, id: u32) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<u32> {
        self.processes.iter().map(|p| p.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        let p1 = Process::new(1, 3, 0);
        let p2 = Process::new(2, 2, 1);
        ScheduleResult::from_parts(
            vec![
                GanttChartEntry::new(p1, 0, 1),
                GanttChartEntry::new(p2, 1, 3),
                GanttChartEntry::new(p1, 5, 7),
            ],
            vec![
                ProcessResult::completed(&p2, 3),
                ProcessResult::completed(&p1, 7),
            ],
        )
    }

    #[test]
    fn test_process_result_completed() {
        let r = ProcessResult::completed(&Process::new(4, 3, 2), 9);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 4);
        assert_eq!(r.completion_time, 9);
    }

    #[test]
    fn test_averages() {
        let s = sample_result();
        // p2: tat 2, wait 0; p1: tat 7, wait 4
        assert!((s.average_turnaround_time - 4.5).abs() < 1e-10);
        assert!((s.average_waiting_time - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_timeline_queries() {
        let s = sample_result();
        assert_eq!(s.makespan(), 7);
        assert_eq!(s.busy_time(), 5);
        assert_eq!(s.idle_time(), 2);
        assert_eq!(s.context_switches(), 2);
        assert_eq!(s.entries_for(1).len(), 2);
        assert_eq!(s.first_start(2), Some(1));
        assert_eq!(s.first_start(9), None);
        assert_eq!(s.result_for(1).map(|r| r.waiting_time), Some(4));
        assert_eq!(s.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_averages_do_not_overflow() {
        let half = i64::MAX / 2;
        let p1 = Process::new(1, half - 1, 0);
        let p2 = Process::new(2, half - 1, 0);
        let s = ScheduleResult::from_parts(
            vec![
                GanttChartEntry::new(p1, 0, half - 1),
                GanttChartEntry::new(p2, half - 1, 2 * half - 2),
            ],
            vec![
                ProcessResult::completed(&p1, half - 1),
                ProcessResult::completed(&p2, 2 * half - 2),
            ],
        );
        let expected = ((half - 1) as f64 + (2 * half - 2) as f64) / 2.0;
        assert!((s.average_turnaround_time - expected).abs() / expected < 1e-12);
    }

    #[test]
    fn test_entry_duration() {
        let e = GanttChartEntry::new(Process::new(1, 5, 0), 3, 8);
        assert_eq!(e.duration(), 5);
    }
}
