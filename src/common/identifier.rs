use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque engine identifier (service id, image id or reference, ...).
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, Display, From, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{_0}")]
pub struct Identifier(Arc<str>);

/// Constructors
impl Identifier {
	pub fn new(value: impl Into<Arc<str>>) -> Self {
		Self(value.into())
	}
}

impl From<String> for Identifier {
	fn from(value: String) -> Self {
		Self(value.into())
	}
}

impl From<&str> for Identifier {
	fn from(value: &str) -> Self {
		Self(value.into())
	}
}

/// Getters
impl Identifier {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Identifier {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
