//! Cron expression evaluation.
//!
//! Thin wrapper around the `croner` crate. Expressions are parsed eagerly so
//! that a misconfigured schedule fails at load time instead of silently never
//! firing during operation.

use chrono::{DateTime, Utc};
use croner::Cron;
use std::str::FromStr;

use crate::prelude::*;

/// Cron schedule wrapper using the croner crate.
/// Stores the expression string for display and equality.
#[derive(Debug, Clone)]
pub struct CronSchedule {
	/// The original cron expression string
	expr: Box<str>,
	/// Parsed cron object
	cron: Cron,
}

impl CronSchedule {
	/// Parse a cron expression (5 fields: minute hour day month weekday).
	pub fn parse(expr: &str) -> MfResult<Self> {
		let cron = Cron::from_str(expr)
			.map_err(|e| Error::ConfigError(format!("invalid cron expression '{}': {}", expr, e)))?;
		Ok(Self { expr: expr.into(), cron })
	}

	/// The earliest occurrence strictly later than `after`, or `None` when
	/// the expression has no further occurrence. Pure and side-effect free.
	pub fn next_occurrence(&self, after: Timestamp) -> Option<Timestamp> {
		let dt = DateTime::<Utc>::from_timestamp(after.0, 0)?;

		match self.cron.find_next_occurrence(&dt, false) {
			Ok(next) => Some(Timestamp(next.timestamp())),
			Err(e) => {
				// Exhaustion is conceptually impossible for a recurring
				// expression; leave a trace if it ever happens.
				warn!("No next occurrence for '{}' after {}: {}", self.expr, after, e);
				None
			}
		}
	}

	/// The original cron expression string.
	pub fn as_expr(&self) -> &str {
		&self.expr
	}
}

impl PartialEq for CronSchedule {
	fn eq(&self, other: &Self) -> bool {
		self.expr == other.expr
	}
}

impl Eq for CronSchedule {}

impl std::fmt::Display for CronSchedule {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.expr)
	}
}


// vim: ts=4
