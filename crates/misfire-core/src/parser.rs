//! Schedule parsing: the per-tick orchestration.
//!
//! For each configured entry, in configuration order: record its name into
//! the dictionary, skip it when it has no history, and otherwise compute its
//! missed occurrences and the argument-sets to enqueue. The external queue
//! glue consumes the result transactionally and re-enqueues the scheduler
//! with [`ParseResult::next_state`].

use std::collections::BTreeMap;

use crate::dictionary;
use crate::jobs;
use crate::missed;
use crate::prelude::*;
use crate::schedule::Schedule;

/// Evaluate one scheduler tick.
///
/// Total and pure: no I/O and no failure modes for a validated [`Schedule`].
/// Identical inputs always produce identical results, so a re-evaluated or
/// retried tick is harmless.
pub fn parse(schedule: &Schedule, state: &SchedulerState, as_time: Timestamp) -> ParseResult {
	let schedule_dictionary =
		dictionary::current_dictionary(schedule.entries().map(|(entry, _)| entry));

	let mut missed_jobs: BTreeMap<JobClass, Vec<JobArgs>> = BTreeMap::new();

	for (entry, cron) in schedule.entries() {
		// A job we have never seen before gets no catch-up scheduling: it is
		// recorded into the dictionary and picked up from the next tick on.
		if !dictionary::is_known(&entry.name, &state.known_job_names) {
			debug!("Entry '{}' has no history, recording into dictionary only", entry.name);
			continue;
		}

		let Some(last_run_time) = state.last_run_time else {
			// Unreachable through the documented lifecycle: a tick without a
			// last run time starts with an empty dictionary.
			warn!("Entry '{}' is known but no last run time is set, skipping", entry.name);
			continue;
		};

		let missed_times = missed::missed_occurrences(cron, last_run_time, as_time);
		let jobs_for_class = jobs::build_jobs(entry, &missed_times);
		if !jobs_for_class.is_empty() {
			debug!(
				"Entry '{}': {} missed run(s) since {}, enqueueing {} job(s)",
				entry.name,
				missed_times.len(),
				last_run_time,
				jobs_for_class.len()
			);
			missed_jobs.insert(entry.class(), jobs_for_class);
		}
	}

	ParseResult { missed_jobs, schedule_dictionary }
}


// vim: ts=4
