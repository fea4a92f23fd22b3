//! Validated schedule configuration.
//!
//! A [`Schedule`] is the load-time product of the static configuration: every
//! entry checked for shape and every cron expression compiled up front, so
//! nothing can fail during a tick. A broken entry blocks startup instead of
//! silently never firing.

use itertools::Itertools;

use crate::cron::CronSchedule;
use crate::prelude::*;

/// A validated schedule: configuration entries paired with their compiled
/// cron expressions, in configuration order.
#[derive(Debug, Clone)]
pub struct Schedule {
	entries: Vec<(ScheduleEntry, CronSchedule)>,
}

impl Schedule {
	/// Validate `entries` and compile their cron expressions.
	///
	/// The first malformed record aborts the load with a `ConfigError` naming
	/// the offending entry: empty name, empty cron expression, empty class,
	/// duplicate name, or an expression `croner` rejects.
	pub fn load(entries: Vec<ScheduleEntry>) -> MfResult<Self> {
		for entry in &entries {
			if entry.name.is_empty() {
				return Err(Error::ConfigError("schedule entry with an empty name".into()));
			}
			if entry.cron.is_empty() {
				return Err(Error::ConfigError(format!(
					"schedule entry '{}' has an empty cron expression",
					entry.name
				)));
			}
			if entry.job_class.as_ref().is_some_and(|class| class.as_str().is_empty()) {
				return Err(Error::ConfigError(format!(
					"schedule entry '{}' has an empty class",
					entry.name
				)));
			}
		}

		if let Some(name) = entries.iter().map(|entry| entry.name.as_ref()).duplicates().next() {
			return Err(Error::ConfigError(format!("duplicate schedule entry name '{}'", name)));
		}

		let entries = entries
			.into_iter()
			.map(|entry| {
				let cron = CronSchedule::parse(&entry.cron).map_err(|e| match e {
					Error::ConfigError(msg) => {
						Error::ConfigError(format!("schedule entry '{}': {}", entry.name, msg))
					}
					other => other,
				})?;
				Ok((entry, cron))
			})
			.collect::<MfResult<Vec<_>>>()?;

		info!("Loaded schedule with {} entries", entries.len());
		Ok(Self { entries })
	}

	/// Deserialize a YAML schedule document (a sequence of entries) and load it.
	pub fn from_yaml(yaml: &str) -> MfResult<Self> {
		let entries: Vec<ScheduleEntry> = serde_yaml::from_str(yaml)
			.map_err(|e| Error::ConfigError(format!("invalid schedule document: {}", e)))?;
		Self::load(entries)
	}

	/// Read and load a YAML schedule file.
	pub fn load_file(path: &str) -> MfResult<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_yaml(&content)
	}

	/// Entries with their compiled crons, in configuration order.
	pub fn entries(&self) -> impl Iterator<Item = &(ScheduleEntry, CronSchedule)> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}


// vim: ts=4
