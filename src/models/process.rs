//! Process model.
//!
//! A process is the unit of work handed to the CPU scheduler. It is a plain
//! value: schedulers borrow the caller's list and keep their own mutable
//! bookkeeping, so the input is never modified.
//!
//! # Time Representation
//! All times are integer units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// `id` must be unique within one scheduling call. Input order matters only
/// as the final tie-break key (the "original index").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: u32,
    /// Scheduling priority. Carried through, not used by any algorithm here.
    pub priority: i32,
    /// Total CPU time required (units). Must be >= 1.
    pub burst_time: i64,
    /// Time at which the process becomes eligible to run. Must be >= 0.
    pub arrival_time: i64,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(id: u32, burst_time: i64, arrival_time: i64) -> Self {
        Self {
            id,
            priority: 0,
            burst_time,
            arrival_time,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Completion time if the process started at `start` and ran uninterrupted.
    #[inline]
    pub fn completion_if_started_at(&self, start: i64) -> i64 {
        start + self.burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 5, 2).with_priority(3);
        assert_eq!(p.id, 7);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.priority, 3);
        assert_eq!(p.completion_if_started_at(10), 15);
    }

    #[test]
    fn test_process_json_field_names() {
        let p = Process::new(1, 4, 0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"burstTime\":4"));
        assert!(json.contains("\"arrivalTime\":0"));

        let parsed: Process =
            serde_json::from_str(r#"{"id":2,"priority":1,"burstTime":3,"arrivalTime":6}"#)
                .unwrap();
        assert_eq!(parsed, Process::new(2, 3, 6).with_priority(1));
    }
}
