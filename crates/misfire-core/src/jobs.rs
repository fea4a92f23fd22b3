//! Job argument building for missed occurrences.

use crate::prelude::*;

/// The argument-sets to enqueue for `entry`, given its missed occurrences.
///
/// Unmissable entries get one argument-set per occurrence, oldest first, each
/// with the occurrence timestamp prepended to the configured args. Missable
/// entries collapse any number of misses into a single catch-up run with the
/// configured args unchanged — the miss count is intentionally discarded to
/// avoid flooding the queue after a long outage.
pub fn build_jobs(entry: &ScheduleEntry, missed_times: &[Timestamp]) -> Vec<JobArgs> {
	if missed_times.is_empty() {
		return Vec::new();
	}

	if entry.unmissable {
		missed_times
			.iter()
			.map(|time_missed| {
				let mut args = Vec::with_capacity(entry.args.len() + 1);
				args.push(serde_json::Value::from(time_missed.0));
				args.extend(entry.args.iter().cloned());
				args
			})
			.collect()
	} else {
		vec![entry.args.clone()]
	}
}


// vim: ts=4
