//! CPU scheduling algorithms and KPI evaluation.
//!
//! Four pure, deterministic schedulers over a fixed process set:
//!
//! | Entry point | Algorithm | Preemptive |
//! |-------------|-----------|------------|
//! | [`schedule_fcfs`] | First-Come-First-Served | no |
//! | [`schedule_non_preemptive_sjf`] | Shortest-Job-First | no |
//! | [`schedule_srtf`] | Shortest-Remaining-Time-First | yes |
//! | [`schedule_round_robin`] | Round Robin | yes (quantum) |
//!
//! # Determinism
//!
//! Every selection rule is a `(criterion, original_index)` pair, where the
//! original index is the process's position in the caller's list. Equal
//! criteria therefore always resolve in input order.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, utilization, throughput, response time,
//! and context switches from a `ScheduleResult`.

mod algorithm;
mod comparison;
mod fcfs;
mod kpi;
mod policy;
mod record;
mod round_robin;
mod sjf;
mod srtf;
mod timeline;

pub use algorithm::{Algorithm, DEFAULT_QUANTUM};
pub use comparison::{ComparisonEntry, ScheduleComparison};
pub use fcfs::schedule_fcfs;
pub use kpi::ScheduleKpi;
pub use policy::{Fcfs, RoundRobin, SchedulingPolicy, Sjf, Srtf};
pub use round_robin::schedule_round_robin;
pub use sjf::schedule_non_preemptive_sjf;
pub use srtf::schedule_srtf;
