//! Common types used throughout misfire.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::error::{Error, MfResult};

// Timestamp //
//***********//
/// An instant in Unix seconds. Callers supply timezone-normalized values;
/// the core never converts between zones.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for Timestamp {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::cmp::Eq for Timestamp {}

impl std::cmp::Ord for Timestamp {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.0.cmp(&other.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

impl Timestamp {
	pub fn now() -> Self {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Self(res.as_secs() as i64)
	}

	pub fn from_now(seconds: i64) -> Self {
		Self(Self::now().0 + seconds)
	}

	/// Parse an ISO-8601 / RFC 3339 instant (the persisted state form).
	pub fn parse_rfc3339(s: &str) -> MfResult<Self> {
		let dt = DateTime::parse_from_rfc3339(s)
			.map_err(|e| Error::StateError(format!("invalid timestamp '{}': {}", s, e)))?;
		Ok(Self(dt.timestamp()))
	}

	/// Format as an RFC 3339 instant in UTC (the persisted state form).
	pub fn to_rfc3339(self) -> MfResult<String> {
		let dt = DateTime::<Utc>::from_timestamp(self.0, 0)
			.ok_or_else(|| Error::StateError(format!("timestamp {} out of range", self.0)))?;
		Ok(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
	}
}


// vim: ts=4
