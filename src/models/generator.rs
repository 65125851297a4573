//! Random workload generation.
//!
//! Produces valid process sets for demos, benchmarks, and property tests.
//! Generation is driven entirely by the caller's RNG, so a seeded RNG gives
//! a reproducible workload.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Process;

/// Parameters for random process sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes to generate.
    pub count: usize,
    /// Latest arrival time (inclusive). Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst time (inclusive, clamped to >= 1).
    pub min_burst: i64,
    /// Largest burst time (inclusive).
    pub max_burst: i64,
    /// Largest priority (inclusive). Priorities are drawn from `0..=max_priority`.
    pub max_priority: i32,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority;
        self
    }

    /// Generates processes with ids `1..=count`, in input order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(min_burst);
        let max_arrival = self.max_arrival.max(0);
        let max_priority = self.max_priority.max(0);

        (1..=self.count)
            .map(|i| {
                let burst = rng.random_range(min_burst..=max_burst);
                let arrival = rng.random_range(0..=max_arrival);
                let priority = rng.random_range(0..=max_priority);
                Process::new(i as u32, burst, arrival).with_priority(priority)
            })
            .collect()
    }
}
