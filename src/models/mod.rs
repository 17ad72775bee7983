//! CPU scheduling domain models.
//!
//! Input is a list of [`Process`]es; a simulation run produces a
//! [`SimulationResult`] holding one [`ExecutionRecord`] per process and a
//! [`Timeline`] of [`TimelineSegment`]s.
//!
//! | Type | Role |
//! |------|------|
//! | Process | Input job (arrival, burst, deadline annotation) |
//! | ExecutionRecord | Per-process start/completion/turnaround/waiting/response |
//! | TimelineSegment | One contiguous run on the CPU |
//! | SimulationResult | Records + timeline + finish time |
//! | ProcessTable | Editable input list |

mod process;
mod record;
mod result;
mod table;
mod timeline;

pub use process::Process;
pub use record::ExecutionRecord;
pub use result::SimulationResult;
pub use table::{ProcessField, ProcessTable};
pub(crate) use table::parse_or_zero;
pub use timeline::{IdleGap, Timeline, TimelineSegment};
