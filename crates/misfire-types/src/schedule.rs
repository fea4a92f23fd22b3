//! Schedule configuration and tick state shared between the core and the
//! enqueue glue.
//!
//! `ScheduleEntry` is the static configuration record, `SchedulerState` the
//! value threaded from tick to tick, and `ParseResult` the output consumed by
//! the external enqueue step. None of these are mutated in place: a tick reads
//! one state and derives the next.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::BTreeMap;

use crate::error::{Error, MfResult};
use crate::types::Timestamp;

/// One ordered argument list for a single job invocation.
pub type JobArgs = Vec<serde_json::Value>;

// JobClass //
//**********//
/// Opaque enqueue target identifier. The core threads it through unchanged;
/// resolving it to something executable is the queue glue's concern.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobClass(Box<str>);

impl JobClass {
	pub fn new(class: impl Into<Box<str>>) -> Self {
		Self(class.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for JobClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for JobClass {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for JobClass {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(JobClass(Box::<str>::deserialize(deserializer)?))
	}
}

// ScheduleEntry //
//***************//
/// One scheduled item from the static configuration. Immutable; supplied
/// fresh each tick.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
	/// Unique within a configuration (enforced at load).
	pub name: Box<str>,
	/// Cron expression string; compiled and validated at load.
	pub cron: Box<str>,
	/// Opaque scheduling arguments, passed through to every enqueued run.
	#[serde(default)]
	pub args: Vec<serde_json::Value>,
	/// True ⇒ every missed occurrence gets its own run; false ⇒ at most one
	/// catch-up run per tick.
	#[serde(default)]
	pub unmissable: bool,
	/// Enqueue target; defaults to the entry name when omitted.
	#[serde(rename = "class")]
	pub job_class: Option<JobClass>,
}

impl ScheduleEntry {
	/// The enqueue target for this entry (explicit `class` or the entry name).
	pub fn class(&self) -> JobClass {
		self.job_class.clone().unwrap_or_else(|| JobClass::new(self.name.clone()))
	}
}

// SchedulerState //
//****************//
/// The scheduler's memory between ticks, owned and persisted by the caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchedulerState {
	/// Absent only before the very first tick.
	pub last_run_time: Option<Timestamp>,
	/// The dictionary from the previous tick, in configuration order.
	pub known_job_names: Vec<Box<str>>,
}

/// Wire form of [`SchedulerState`]: the re-enqueue argument persisted by the
/// queue glue, with the last run time as an ISO-8601 string.
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize)]
struct RawState {
	#[serde(rename = "lastRunTime")]
	last_run_time: Option<String>,
	#[serde(rename = "jobDictionary", default)]
	job_dictionary: Vec<Box<str>>,
}

impl SchedulerState {
	/// The first-tick state: no last run time, nothing known.
	pub fn initial() -> Self {
		Self::default()
	}

	/// Parse the persisted re-enqueue argument. Malformed JSON or an
	/// unparseable `lastRunTime` is a `StateError`.
	pub fn from_json(json: &str) -> MfResult<Self> {
		let raw: RawState = serde_json::from_str(json)
			.map_err(|e| Error::StateError(format!("invalid scheduler state: {}", e)))?;
		let last_run_time = match raw.last_run_time {
			Some(s) => Some(Timestamp::parse_rfc3339(&s)?),
			None => None,
		};
		Ok(Self { last_run_time, known_job_names: raw.job_dictionary })
	}

	/// Serialize for persistence as the next tick's re-enqueue argument.
	pub fn to_json(&self) -> MfResult<String> {
		let raw = RawState {
			last_run_time: self.last_run_time.map(Timestamp::to_rfc3339).transpose()?,
			job_dictionary: self.known_job_names.clone(),
		};
		serde_json::to_string(&raw)
			.map_err(|e| Error::StateError(format!("failed to serialize scheduler state: {}", e)))
	}
}

// ParseResult //
//*************//
/// The outcome of one tick: what to enqueue, and the fresh dictionary.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseResult {
	/// Argument-sets to enqueue per job class; an absent key means nothing to
	/// enqueue for that class.
	pub missed_jobs: BTreeMap<JobClass, Vec<JobArgs>>,
	/// All currently configured entry names, in configuration order,
	/// independent of history.
	pub schedule_dictionary: Vec<Box<str>>,
}

impl ParseResult {
	/// The state to persist for the next tick: `as_time` carried forward as
	/// the new last run time, plus the fresh dictionary.
	pub fn next_state(&self, as_time: Timestamp) -> SchedulerState {
		SchedulerState {
			last_run_time: Some(as_time),
			known_job_names: self.schedule_dictionary.clone(),
		}
	}

	/// Total number of job invocations to enqueue.
	pub fn job_count(&self) -> usize {
		self.missed_jobs.values().map(Vec::len).sum()
	}
}


// vim: ts=4
