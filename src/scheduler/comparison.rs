//! Side-by-side comparison of several algorithms on one workload.

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};

use super::{Algorithm, ScheduleKpi};

/// One algorithm's outcome within a comparison.
#[derive(Debug, Clone)]
pub struct ComparisonEntry {
    pub algorithm: Algorithm,
    pub result: ScheduleResult,
    pub kpi: ScheduleKpi,
}

/// Results of running several algorithms over the same processes.
#[derive(Debug, Clone)]
pub struct ScheduleComparison {
    /// Entries in the order the algorithms were given.
    pub entries: Vec<ComparisonEntry>,
}

impl ScheduleComparison {
    /// Runs every algorithm over `processes`.
    ///
    /// Fails on the first algorithm that rejects the input.
    pub fn run(processes: &[Process], algorithms: &[Algorithm]) -> Result<Self, ScheduleError> {
        let entries = algorithms
            .iter()
            .map(|&algorithm| {
                let result = algorithm.schedule(processes)?;
                let kpi = ScheduleKpi::calculate(&result);
                Ok(ComparisonEntry {
                    algorithm,
                    result,
                    kpi,
                })
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;

        Ok(Self { entries })
    }

    /// Entry with the lowest average waiting time. Ties go to the earlier entry.
    pub fn best_by_waiting_time(&self) -> Option<&ComparisonEntry> {
        self.best_by(|e| e.result.average_waiting_time)
    }

    /// Entry with the lowest average turnaround time. Ties go to the earlier entry.
    pub fn best_by_turnaround_time(&self) -> Option<&ComparisonEntry> {
        self.best_by(|e| e.result.average_turnaround_time)
    }

    fn best_by<F>(&self, score: F) -> Option<&ComparisonEntry>
    where
        F: Fn(&ComparisonEntry) -> f64,
    {
        let mut best: Option<(&ComparisonEntry, f64)> = None;
        for entry in &self.entries {
            let s = score(entry);
            match best {
                Some((_, b)) if s >= b => {}
                _ => best = Some((entry, s)),
            }
        }
        best.map(|(entry, _)| entry)
    }
}
