use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// Parse an engine timestamp (RFC 3339, nanosecond precision, e.g. `2016-06-07T21:07:29.962229872Z`).
pub fn parse_docker_date(value: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(value)
		.map(|date| date.with_timezone(&Utc))
		.map_err(|cause| Error::DateParse {
			value: value.to_string(),
			cause,
		})
}

// region:    --- Tests


// endregion: --- Tests
