//! The body codec translates between `BodyPayload` / `ResponseShape` values and wire bytes.
//!
//! - Encoding matches on the payload tag: JSON is serialized, raw bytes pass through, absent yields nothing.
//! - Decoding is only ever invoked for success statuses (the dispatcher checks the status first).

use crate::endpoint::{BodyPayload, ResponseShape};
use bytes::Bytes;
use serde_json::Value;

pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Raw uploads to the engine (image load, build context, archive put) are tar streams.
pub const CONTENT_TYPE_TAR: &str = "application/x-tar";

/// The bytes (and their content type) that go on the wire for a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
	pub content_type: &'static str,
	pub bytes: Bytes,
}

pub fn encode(payload: &BodyPayload) -> serde_json::Result<Option<EncodedBody>> {
	let encoded = match payload {
		BodyPayload::Absent => None,
		BodyPayload::Json(value) => Some(EncodedBody {
			content_type: CONTENT_TYPE_JSON,
			bytes: Bytes::from(serde_json::to_vec(value)?),
		}),
		// `Bytes` clone is a refcount bump, not a copy.
		BodyPayload::Raw(bytes) => Some(EncodedBody {
			content_type: CONTENT_TYPE_TAR,
			bytes: bytes.clone(),
		}),
	};

	Ok(encoded)
}

pub fn decode<R>(payload: &[u8]) -> serde_json::Result<R>
where
	R: ResponseShape,
{
	if R::DISCARDS_PAYLOAD {
		return serde_json::from_value(Value::Null);
	}

	serde_json::from_slice(payload)
}

// region:    --- Tests


// endregion: --- Tests
