use crate::common::Identifier;
use serde::{Deserialize, Serialize};

/// An image, referenced by id or by reference (e.g., `nginx:1.27`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
	pub id: Identifier,
}

impl Image {
	pub fn new(id: impl Into<Identifier>) -> Self {
		Self { id: id.into() }
	}
}
