//! End-to-end scheduler tick scenarios over the public API: load a YAML
//! schedule, evaluate ticks, persist the state between them the way the
//! queue glue would.

use serde_json::json;

use misfire_core::{parse, Schedule};
use misfire_types::schedule::{JobClass, SchedulerState};

mod common;
use common::{at, test_schedule};

#[test]
fn test_first_run_enqueues_nothing_and_loads_dictionary() {
	let _ = tracing_subscriber::fmt().try_init();

	let schedule = test_schedule();
	let result = parse(&schedule, &SchedulerState::initial(), at("2017-11-08T13:50:32Z"));

	assert!(result.missed_jobs.is_empty());
	assert_eq!(
		result.schedule_dictionary,
		vec![
			Box::from("HalfHourlyTestJob"),
			Box::from("HourlyLedgerJob"),
			Box::from("reports.daily"),
		]
	);
}

#[test]
fn test_second_tick_enqueues_overdue_jobs() {
	let schedule = test_schedule();

	// First tick, persisted the way the queue glue would persist it.
	let first = parse(&schedule, &SchedulerState::initial(), at("2017-11-08T13:50:32Z"));
	let persisted = first.next_state(at("2017-11-08T13:50:32Z")).to_json().unwrap();

	// One hour later.
	let state = SchedulerState::from_json(&persisted).unwrap();
	let result = parse(&schedule, &state, at("2017-11-08T14:50:32Z"));

	// Two half-hour occurrences collapsed into a single catch-up run.
	assert_eq!(
		result.missed_jobs.get(&JobClass::new("HalfHourlyTestJob")),
		Some(&vec![vec![]])
	);
	// One hourly occurrence, unmissable, carrying its timestamp.
	assert_eq!(
		result.missed_jobs.get(&JobClass::new("HourlyLedgerJob")),
		Some(&vec![vec![json!(at("2017-11-08T14:00:00Z").0), json!("ledger")]])
	);
	// The daily report is not due until tomorrow morning.
	assert!(!result.missed_jobs.contains_key(&JobClass::new("DailyReportJob")));
	assert_eq!(result.job_count(), 2);
}

#[test]
fn test_overnight_outage_backfills_unmissable_runs() {
	let schedule = test_schedule();
	let state = SchedulerState {
		last_run_time: Some(at("2017-11-08T14:50:32Z")),
		known_job_names: vec![
			"HalfHourlyTestJob".into(),
			"HourlyLedgerJob".into(),
			"reports.daily".into(),
		],
	};

	// The scheduler was down overnight.
	let result = parse(&schedule, &state, at("2017-11-09T07:30:00Z"));

	// Missable job: still exactly one catch-up run.
	assert_eq!(
		result.missed_jobs.get(&JobClass::new("HalfHourlyTestJob")),
		Some(&vec![vec![]])
	);

	// Unmissable job: one run per missed hour, oldest first.
	let ledger = result.missed_jobs.get(&JobClass::new("HourlyLedgerJob")).unwrap();
	assert_eq!(ledger.len(), 17);
	assert_eq!(ledger[0], vec![json!(at("2017-11-08T15:00:00Z").0), json!("ledger")]);
	assert_eq!(ledger[16], vec![json!(at("2017-11-09T07:00:00Z").0), json!("ledger")]);
	let times: Vec<i64> =
		ledger.iter().filter_map(|args| args.first().and_then(serde_json::Value::as_i64)).collect();
	assert!(times.windows(2).all(|pair| pair[0] < pair[1]));

	// The daily report came due at 07:00 and keeps its configured args.
	assert_eq!(
		result.missed_jobs.get(&JobClass::new("DailyReportJob")),
		Some(&vec![vec![json!("eu-west"), json!(10)]])
	);
}

#[test]
fn test_deploy_adding_a_job_schedules_it_one_tick_later() {
	let schedule = Schedule::from_yaml(
		r"
- name: HalfHourlyTestJob
  cron: '*/30 * * * *'
- name: SomeNewJob
  cron: '*/30 * * * *'
",
	)
	.unwrap();

	// The previous generation only knew about HalfHourlyTestJob.
	let state = SchedulerState {
		last_run_time: Some(at("2017-11-08T13:05:32Z")),
		known_job_names: vec!["HalfHourlyTestJob".into()],
	};
	let result = parse(&schedule, &state, at("2017-11-08T13:50:32Z"));

	// The new job is suppressed this tick but recorded for the next.
	assert!(result.missed_jobs.contains_key(&JobClass::new("HalfHourlyTestJob")));
	assert!(!result.missed_jobs.contains_key(&JobClass::new("SomeNewJob")));

	// Next tick, with the carried-forward dictionary, it schedules normally.
	let next_state = result.next_state(at("2017-11-08T13:50:32Z"));
	let result = parse(&schedule, &next_state, at("2017-11-08T14:30:00Z"));
	assert!(result.missed_jobs.contains_key(&JobClass::new("SomeNewJob")));
}

#[test]
fn test_removed_job_drops_out_of_the_state() {
	let schedule = test_schedule();
	let state = SchedulerState {
		last_run_time: Some(at("2017-11-08T13:05:32Z")),
		known_job_names: vec!["HalfHourlyTestJob".into(), "OldRemovedJob".into()],
	};

	let result = parse(&schedule, &state, at("2017-11-08T13:50:32Z"));
	assert!(!result.schedule_dictionary.contains(&Box::from("OldRemovedJob")));

	// The persisted state no longer mentions it either.
	let persisted = result.next_state(at("2017-11-08T13:50:32Z")).to_json().unwrap();
	assert!(!persisted.contains("OldRemovedJob"));
	assert!(persisted.contains("\"lastRunTime\":\"2017-11-08T13:50:32Z\""));
}

#[test]
fn test_repeated_evaluation_is_idempotent() {
	let schedule = test_schedule();
	let state = SchedulerState {
		last_run_time: Some(at("2017-11-08T00:00:00Z")),
		known_job_names: vec![
			"HalfHourlyTestJob".into(),
			"HourlyLedgerJob".into(),
			"reports.daily".into(),
		],
	};
	let as_time = at("2017-11-08T13:50:32Z");

	let first = parse(&schedule, &state, as_time);
	let second = parse(&schedule, &state, as_time);
	assert_eq!(first, second);
	assert_eq!(first.next_state(as_time), second.next_state(as_time));
}

// vim: ts=4
