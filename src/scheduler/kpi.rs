//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling performance indicators from a
//! completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Busy / Idle Time | CPU occupied / unoccupied within `[0, makespan)` |
//! | CPU Utilization | busy / makespan |
//! | Throughput | Completed processes per time unit |
//! | Context Switches | Adjacent chart entries with different processes |
//! | Avg Response Time | Mean of (first start - arrival) |
//! | Max Waiting / Turnaround | Worst single process |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5.2:
//! Scheduling Criteria

use crate::models::ScheduleResult;

/// Schedule performance indicators.
///
/// All time values are in simulation units.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Time the CPU spent running processes.
    pub busy_time: i64,
    /// Time the CPU spent idle before the makespan.
    pub idle_time: i64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of process-to-process switches in the chart.
    pub context_switches: usize,
    /// Mean time from arrival to first CPU access.
    pub avg_response_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: i64,
    /// Largest turnaround time of any single process.
    pub max_turnaround_time: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let makespan = result.makespan();
        let busy_time = result.busy_time();
        let completed = result.processes.len();

        let mut total_response: f64 = 0.0;
        let mut max_waiting_time: i64 = 0;
        let mut max_turnaround_time: i64 = 0;

        for p in &result.processes {
            if let Some(start) = result.first_start(p.id) {
                total_response += (start - p.arrival_time) as f64;
            }
            max_waiting_time = max_waiting_time.max(p.waiting_time);
            max_turnaround_time = max_turnaround_time.max(p.turnaround_time);
        }

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                completed as f64 / makespan as f64,
            )
        };

        let avg_response_time = if completed == 0 {
            0.0
        } else {
            total_response / completed as f64
        };

        Self {
            makespan,
            busy_time,
            idle_time: makespan - busy_time,
            cpu_utilization,
            throughput,
            context_switches: result.context_switches(),
            avg_response_time,
            max_waiting_time,
            max_turnaround_time,
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting_time <= max_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{schedule_fcfs, schedule_round_robin, schedule_srtf};

    #[test]
    fn test_kpi_basic() {
        let result = schedule_fcfs(&[Process::new(1, 5, 0), Process::new(2, 3, 0)]).unwrap();
        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.busy_time, 8);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 1);
        // Non-preemptive: response time equals waiting time.
        assert!((kpi.avg_response_time - result.average_waiting_time).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 5);
        assert_eq!(kpi.max_turnaround_time, 8);
    }

    #[test]
    fn test_kpi_idle() {
        let result = schedule_fcfs(&[Process::new(1, 2, 0), Process::new(2, 2, 6)]).unwrap();
        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_response_time_preemptive() {
        let result = schedule_srtf(&[Process::new(1, 8, 0), Process::new(2, 4, 1)]).unwrap();
        let kpi = ScheduleKpi::calculate(&result);
        // p1 starts at 0, p2 at 1 (arrival 1): both respond immediately.
        assert!((kpi.avg_response_time - 0.0).abs() < 1e-10);
        assert_eq!(kpi.context_switches, 2);
    }

    #[test]
    fn test_kpi_round_robin_switches() {
        let result =
            schedule_round_robin(&[Process::new(1, 5, 0), Process::new(2, 3, 0)], 2).unwrap();
        let kpi = ScheduleKpi::calculate(&result);
        assert_eq!(kpi.context_switches, 4);
        // p1 responds at 0, p2 at 2.
        assert!((kpi.avg_response_time - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_meets_thresholds() {
        let result = schedule_fcfs(&[Process::new(1, 5, 0), Process::new(2, 3, 0)]).unwrap();
        let kpi = ScheduleKpi::calculate(&result);
        assert!(kpi.meets_thresholds(5, 0.9));
        assert!(!kpi.meets_thresholds(4, 0.9));
        assert!(!kpi.meets_thresholds(5, 1.5));
    }
}
