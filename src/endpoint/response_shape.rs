use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The declared response shape of an `Endpoint`.
///
/// Every wire type used as an `Endpoint::Response` opts in with an empty impl.
/// `NoBody` (and `Option<NoBody>`) are the only shapes that discard the payload.
pub trait ResponseShape: DeserializeOwned {
	/// When `true`, the codec never parses the payload and decoding always succeeds.
	const DISCARDS_PAYLOAD: bool = false;
}

// region:    --- NoBody

/// Marker for calls whose success is signaled by the HTTP status alone
/// (e.g., `204 No Content`, or an empty/irrelevant `200`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoBody;

impl ResponseShape for NoBody {
	const DISCARDS_PAYLOAD: bool = true;
}

impl<'de> Deserialize<'de> for NoBody {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		IgnoredAny::deserialize(deserializer)?;
		Ok(NoBody)
	}
}

// endregion: --- NoBody

// region:    --- Generic Shapes

impl ResponseShape for Value {}

impl<T> ResponseShape for Vec<T> where T: ResponseShape {}

/// `Option<NoBody>` is still a no-content shape.
impl<T> ResponseShape for Option<T>
where
	T: ResponseShape,
{
	const DISCARDS_PAYLOAD: bool = T::DISCARDS_PAYLOAD;
}

// endregion: --- Generic Shapes
