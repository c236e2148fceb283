use crate::common::Identifier;
use crate::images::Image;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A swarm service, as returned by the `ServicesApi`.
/// Owned by the caller; it holds no reference back to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
	pub id: Identifier,
	pub name: String,
	pub created_at: DateTime<Utc>,
	pub updated_at: DateTime<Utc>,
	/// The engine's object version index. Updates must send the current one.
	pub version: u64,
	pub image: Image,
}
