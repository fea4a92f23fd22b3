//! Error type shared across the misfire crates.

pub type MfResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Invalid schedule configuration: an unparseable cron expression or a
	/// malformed entry. Surfaced at load time, never during a tick.
	ConfigError(String),
	/// Malformed persisted scheduler state (e.g. an unparseable last run time).
	StateError(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Self::StateError(msg) => write!(f, "state error: {}", msg),
			Self::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_includes_message() {
		let err = Error::ConfigError("bad cron".into());
		assert!(err.to_string().contains("bad cron"));

		let err = Error::StateError("bad timestamp".into());
		assert!(err.to_string().contains("bad timestamp"));
	}

	#[test]
	fn test_from_io_error() {
		let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
		let err: Error = io_err.into();
		assert!(matches!(err, Error::Io(_)));
	}
}

// vim: ts=4
