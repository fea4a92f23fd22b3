pub use misfire_types::error::{Error, MfResult};
pub use misfire_types::schedule::{JobArgs, JobClass, ParseResult, ScheduleEntry, SchedulerState};
pub use misfire_types::types::Timestamp;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
