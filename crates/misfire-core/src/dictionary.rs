//! Schedule dictionary tracking.
//!
//! The dictionary is the list of entry names the scheduler carries from tick
//! to tick to tell "previously known" entries apart from brand-new ones. It
//! has no persisted identity of its own: both operations are pure functions
//! over the tick's inputs, so the tracked set self-heals every run.

use crate::prelude::*;

/// Whether `name` was present in a previous configuration generation.
pub fn is_known(name: &str, known_job_names: &[Box<str>]) -> bool {
	known_job_names.iter().any(|known| known.as_ref() == name)
}

/// The dictionary for the current tick: configured entry names in
/// configuration order, independent of history.
pub fn current_dictionary<'a>(entries: impl IntoIterator<Item = &'a ScheduleEntry>) -> Vec<Box<str>> {
	entries.into_iter().map(|entry| entry.name.clone()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(name: &str) -> ScheduleEntry {
		ScheduleEntry {
			name: name.into(),
			cron: "* * * * *".into(),
			args: vec![],
			unmissable: false,
			job_class: None,
		}
	}

	#[test]
	fn test_is_known() {
		let known = vec![Box::from("A"), Box::from("B")];
		assert!(is_known("A", &known));
		assert!(is_known("B", &known));
		assert!(!is_known("C", &known));
		assert!(!is_known("A", &[]));
	}

	#[test]
	fn test_current_dictionary_preserves_order() {
		let entries = [entry("C"), entry("A"), entry("B")];
		let dictionary = current_dictionary(&entries);
		assert_eq!(dictionary, vec![Box::from("C"), Box::from("A"), Box::from("B")]);
	}

	#[test]
	fn test_current_dictionary_empty() {
		let entries: &[ScheduleEntry] = &[];
		assert!(current_dictionary(entries).is_empty());
	}
}

// vim: ts=4
