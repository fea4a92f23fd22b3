//! Missed-run calculation.

use crate::cron::CronSchedule;
use crate::prelude::*;

/// All cron occurrences in the open-closed interval `(last_run_time, as_time]`,
/// oldest first.
///
/// Walks the schedule forward from `last_run_time`. Terminates because every
/// occurrence is strictly later than the cursor it was derived from and
/// `as_time` is a fixed finite bound.
pub fn missed_occurrences(
	cron: &CronSchedule,
	last_run_time: Timestamp,
	as_time: Timestamp,
) -> Vec<Timestamp> {
	let mut missed = Vec::new();
	let mut cursor = last_run_time;

	while let Some(next) = cron.next_occurrence(cursor) {
		if next > as_time {
			break;
		}
		missed.push(next);
		cursor = next;
	}

	missed
}


// vim: ts=4
