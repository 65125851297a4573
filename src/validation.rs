//! Input validation for scheduling calls.
//!
//! Checks a process list (and the Round Robin quantum) before any
//! simulation runs. Detects:
//! - Empty process lists
//! - Non-positive burst times
//! - Negative arrival times
//! - Non-positive quantum
//! - Workloads whose timeline would not fit in `i64`
//!
//! Duplicate ids are a caller precondition rather than an error: they are
//! reported by [`duplicate_ids`] so the engine can log them, but scheduling
//! proceeds. Results identified by a duplicated id are ambiguous.

use std::collections::HashSet;

use thiserror::Error;

use crate::error::ScheduleError;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process list is empty.
    EmptyInput,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// The Round Robin quantum is `<= 0`.
    NonPositiveQuantum,
    /// `max(arrival_time) + sum(burst_time)` exceeds `i64::MAX`.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. At least one process
/// 2. Every burst time is >= 1
/// 3. Every arrival time is >= 0
/// 4. The latest possible completion, `max(arrival) + sum(burst)`, fits in `i64`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "no processes to schedule",
        ));
    }

    for p in processes {
        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }
    }

    if latest_completion(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "latest arrival plus total burst time overflows the simulation clock",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value a scheduler can reach.
///
/// No algorithm here idles while work is ready, so the clock never passes
/// the latest arrival plus the total burst. Invalid bursts and arrivals are
/// reported separately and left out of the bound.
fn latest_completion(processes: &[Process]) -> Option<i64> {
    let max_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .filter(|&a| a >= 0)
        .max()
        .unwrap_or(0);

    processes
        .iter()
        .map(|p| p.burst_time)
        .filter(|&b| b > 0)
        .try_fold(max_arrival, |acc, b| acc.checked_add(b))
}

/// Validates a Round Robin quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("quantum must be positive, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Ids that appear more than once, in order of their second occurrence.
pub fn duplicate_ids(processes: &[Process]) -> Vec<u32> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    processes
        .iter()
        .filter(|p| !seen.insert(p.id) && reported.insert(p.id))
        .map(|p| p.id)
        .collect()
}

/// Gatekeeper used by every scheduler: validates, then logs duplicate ids.
pub(crate) fn check_input(processes: &[Process]) -> Result<(), ScheduleError> {
    validate_processes(processes)?;

    let dups = duplicate_ids(processes);
    if !dups.is_empty() {
        log::warn!("duplicate process ids {dups:?}; results for these ids are ambiguous");
    }
    Ok(())
}
