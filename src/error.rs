use crate::webc;
use derive_more::Display;
use reqwest::{Method, StatusCode};
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display)]
#[display("{self:?}")]
pub enum Error {
	// -- Dispatch
	/// The request never produced an HTTP status (connection refused, timeout, ...).
	Transport {
		method: Method,
		path: String,
		webc_error: webc::Error,
	},
	/// The engine answered with a non-success status.
	/// `message` is the engine's `{"message": ...}` value when the error body carries one.
	Remote {
		status: StatusCode,
		message: Option<String>,
		body: String,
	},
	/// The response payload does not match the declared response shape.
	Decode {
		path: String,
		cause: serde_json::Error,
	},
	Encode {
		path: String,
		cause: serde_json::Error,
	},

	// -- Descriptors
	BodySourceRead {
		path: PathBuf,
		cause: std::io::Error,
	},

	// -- Domain conversion
	DateParse {
		value: String,
		cause: chrono::ParseError,
	},

	// -- Config
	HostNotSupported {
		host: String,
	},
	WebClientBuild(webc::Error),
}

/// Getters
impl Error {
	/// Returns the HTTP status when this is a `Remote` error.
	pub fn remote_status(&self) -> Option<StatusCode> {
		match self {
			Self::Remote { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// True when this is a `Remote` error carrying the given status code (e.g., `409`).
	pub fn is_remote_status(&self, code: u16) -> bool {
		self.remote_status().is_some_and(|status| status.as_u16() == code)
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
