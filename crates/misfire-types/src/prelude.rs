pub use crate::error::{Error, MfResult};
pub use crate::schedule::{JobArgs, JobClass, ParseResult, ScheduleEntry, SchedulerState};
pub use crate::types::Timestamp;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
