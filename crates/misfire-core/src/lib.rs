//! Missed-run computation for cron-driven job-queue schedulers.
//!
//! Given a static schedule configuration, the previous tick's
//! [`SchedulerState`](misfire_types::schedule::SchedulerState), and the
//! current instant, [`parse`] computes which jobs are overdue and exactly
//! what to enqueue for each. The computation is pure and deterministic, so a
//! retried or re-evaluated tick always produces the same result; persistence,
//! transactions, and the queue itself stay with the embedding runtime.
//!
//! ```no_run
//! use misfire_core::{parse, Schedule};
//! use misfire_types::schedule::SchedulerState;
//! use misfire_types::types::Timestamp;
//!
//! # fn main() -> Result<(), misfire_types::error::Error> {
//! let schedule = Schedule::load_file("schedule.yml")?;
//! let state = SchedulerState::from_json(r#"{"jobDictionary": []}"#)?;
//! let result = parse(&schedule, &state, Timestamp::now());
//! for (class, job_args) in &result.missed_jobs {
//! 	for args in job_args {
//! 		println!("enqueue {} with {:?}", class, args);
//! 	}
//! }
//! let _next = result.next_state(Timestamp::now());
//! # Ok(())
//! # }
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cron;
pub mod dictionary;
pub mod jobs;
pub mod missed;
pub mod parser;
pub mod prelude;
pub mod schedule;

// Re-export commonly used types
pub use cron::CronSchedule;
pub use parser::parse;
pub use schedule::Schedule;

// vim: ts=4
