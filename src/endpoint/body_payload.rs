use bytes::Bytes;
use derive_more::From;
use serde_json::Value;

/// The request body of an `Endpoint`, tagged by how it goes on the wire.
#[derive(Debug, Clone, Default, From, PartialEq)]
pub enum BodyPayload {
	/// No body at all (no content type either).
	#[default]
	Absent,

	/// A JSON document, serialized as is by the codec.
	#[from]
	Json(Value),

	/// Raw bytes passed through untouched (e.g., a tar archive).
	#[from]
	Raw(Bytes),
}

/// Getters
impl BodyPayload {
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	pub fn as_json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_raw(&self) -> Option<&Bytes> {
		match self {
			Self::Raw(bytes) => Some(bytes),
			_ => None,
		}
	}
}
