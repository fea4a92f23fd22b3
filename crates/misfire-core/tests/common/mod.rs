//! Common test utilities and helpers
//!
//! Shared fixtures for the schedule parsing integration tests: a
//! representative YAML schedule document and timestamp shorthand.

use misfire_core::Schedule;
use misfire_types::types::Timestamp;

/// A schedule in the shape a deployment would ship: a missable periodic job,
/// an unmissable ledger job with args, and an entry with an explicit class.
pub const SCHEDULE_YAML: &str = r"
- name: HalfHourlyTestJob
  cron: '*/30 * * * *'
- name: HourlyLedgerJob
  cron: 0 * * * *
  unmissable: true
  args: [ledger]
- name: reports.daily
  cron: 0 7 * * *
  class: DailyReportJob
  args: [eu-west, 10]
";

pub fn test_schedule() -> Schedule {
	Schedule::from_yaml(SCHEDULE_YAML).unwrap()
}

pub fn at(s: &str) -> Timestamp {
	Timestamp::parse_rfc3339(s).unwrap()
}
