//! Algorithm selection.
//!
//! [`Algorithm`] is the serializable choice a caller makes (from a form, a
//! config file, or a command-line flag). It parses from and displays as the
//! usual short names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{Process, ScheduleResult};

use super::policy::{Fcfs, RoundRobin, SchedulingPolicy, Sjf, Srtf};

/// Quantum used when "RR" is parsed without an explicit value.
pub const DEFAULT_QUANTUM: i64 = 2;

/// A scheduling algorithm choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Srtf,
    RoundRobin { quantum: i64 },
}

impl Algorithm {
    /// The policy implementing this algorithm.
    pub fn policy(&self) -> Box<dyn SchedulingPolicy> {
        match *self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }

    /// Runs this algorithm over `processes`.
    pub fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, ScheduleError> {
        self.policy().schedule(processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "FCFS"),
            Algorithm::Sjf => write!(f, "SJF"),
            Algorithm::Srtf => write!(f, "SRTF"),
            Algorithm::RoundRobin { quantum } => write!(f, "RR:{quantum}"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    /// Accepts `FCFS`, `SJF`, `SRTF`, `RR` and `RR:<quantum>`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (s, None),
        };
        let unknown = || ScheduleError::UnknownAlgorithm(s.to_string());

        match (name.to_ascii_uppercase().as_str(), arg) {
            ("FCFS", None) => Ok(Algorithm::Fcfs),
            ("SJF", None) => Ok(Algorithm::Sjf),
            ("SRTF", None) => Ok(Algorithm::Srtf),
            ("RR", None) => Ok(Algorithm::RoundRobin {
                quantum: DEFAULT_QUANTUM,
            }),
            ("RR", Some(q)) => q
                .parse()
                .map(|quantum| Algorithm::RoundRobin { quantum })
                .map_err(|_| unknown()),
            _ => Err(unknown()),
        }
    }
}
