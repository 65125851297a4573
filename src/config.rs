//! Workload configuration.
//!
//! A [`Workload`] is what a presentation layer hands the engine: the chosen
//! algorithm plus the process list. It is serde-friendly so it can come from
//! a JSON form submission or a config file.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};
use crate::scheduler::Algorithm;

/// A scheduling request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub algorithm: Algorithm,
    pub processes: Vec<Process>,
}

impl Workload {
    pub fn new(algorithm: Algorithm, processes: Vec<Process>) -> Self {
        Self {
            algorithm,
            processes,
        }
    }

    /// Runs the configured algorithm.
    pub fn run(&self) -> Result<ScheduleResult, ScheduleError> {
        self.algorithm.schedule(&self.processes)
    }
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            processes: Vec::new(),
        }
    }
}
