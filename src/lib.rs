//! Deterministic CPU scheduling simulator.
//!
//! Simulates classical single-CPU scheduling over a fixed, known-in-advance
//! set of processes and reports the resulting Gantt chart, per-process
//! waiting and turnaround times, and their averages.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `GanttChartEntry`,
//!   `ProcessResult`, `ScheduleResult`, `WorkloadGenerator`
//! - **`scheduler`**: FCFS, non-preemptive SJF, SRTF, Round Robin, the
//!   `SchedulingPolicy` trait, `Algorithm` selection, KPIs, comparisons
//! - **`validation`**: Input checks (empty list, burst, arrival, quantum, clock overflow)
//! - **`config`**: Serializable `Workload` (algorithm + processes)
//!
//! # Example
//!
//! ```
//! use cpu_sched::models::Process;
//!
//! let procs = [Process::new(1, 8, 0), Process::new(2, 4, 1)];
//! let result = cpu_sched::schedule_srtf(&procs).unwrap();
//! assert_eq!(result.completion_order(), vec![2, 1]);
//! ```
//!
//! Every call is a pure function of its input: nothing is shared between
//! calls and the caller's slice is only borrowed.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::Workload;
pub use error::ScheduleError;
pub use scheduler::{
    schedule_fcfs, schedule_non_preemptive_sjf, schedule_round_robin, schedule_srtf, Algorithm,
};
