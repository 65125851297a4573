//! CPU scheduling domain models.
//!
//! Plain value types shared by every scheduler. None of them carry behavior
//! beyond simple derived queries; all are created fresh per scheduling call.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: id, priority, burst time, arrival time |
//! | `GanttChartEntry` | One contiguous CPU occupancy span |
//! | `ProcessResult` | Per-process waiting and turnaround time |
//! | `ScheduleResult` | Chart, per-process results, averages |

mod generator;
mod process;
mod schedule;

pub use generator::WorkloadGenerator;
pub use process::Process;
pub use schedule::{GanttChartEntry, ProcessResult, ScheduleResult};
