//! Scheduling policy trait and the built-in policies.
//!
//! Each policy is a stateless value wrapping one of the scheduling entry
//! points, so callers can hold a heterogeneous list of policies
//! (`Vec<Box<dyn SchedulingPolicy>>`) and run them over the same input.

use std::fmt::Debug;

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};

use super::{schedule_fcfs, schedule_non_preemptive_sjf, schedule_round_robin, schedule_srtf};

/// A CPU scheduling algorithm.
///
/// Implementations are pure: the same input always yields the same result
/// and the caller's processes are never modified.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Schedules the processes.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError>;

    /// Long-form name.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether a running process can lose the CPU before finishing.
    fn is_preemptive(&self) -> bool {
        false
    }
}

/// First-Come-First-Served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        schedule_fcfs(processes)
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Non-preemptive Shortest-Job-First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        schedule_non_preemptive_sjf(processes)
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }
}

/// Shortest-Remaining-Time-First.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        schedule_srtf(processes)
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First"
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}

/// Round Robin with a fixed quantum.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Time slice length. Must be positive.
    pub quantum: i64,
}

impl RoundRobin {
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        schedule_round_robin(processes, self.quantum)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}
