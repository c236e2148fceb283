use crate::codec::EncodedBody;
use bytes::Bytes;
use reqwest::{Method, StatusCode};

// region:    --- WebRequest

/// What the dispatcher hands to a `Transport`.
/// - `path` is relative to the engine base URL (e.g., `services/abc123`), query string included.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: Method,
	pub path: String,
	pub body: Option<EncodedBody>,
}

// endregion: --- WebRequest

// region:    --- WebResponse

#[derive(Debug, Clone)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: Bytes,
}

/// Constructors
impl WebResponse {
	pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
		Self {
			status,
			body: body.into(),
		}
	}
}

// endregion: --- WebResponse
