use crate::client::{ClientBuilder, ClientConfig};
use crate::webc::{Transport, WebClient};
use crate::Result;
use std::sync::Arc;

/// The Docker engine client.
///
/// It is cheap to clone (the transport and config live behind an `Arc`), and can be shared
/// across tasks. Each call owns its own request/response lifecycle.
#[derive(Debug)]
pub struct Client<T = WebClient> {
	pub(super) inner: Arc<ClientInner<T>>,
}

#[derive(Debug)]
pub(super) struct ClientInner<T> {
	pub(super) transport: T,
	pub(super) config: ClientConfig,
}

impl<T> Clone for Client<T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

// region:    --- Constructors

impl Client<WebClient> {
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	/// Build a client for the engine pointed to by `DOCKER_HOST` (or `http://localhost:2375/`).
	pub fn from_env() -> Result<Self> {
		ClientBuilder::default().build()
	}
}

impl<T> Client<T>
where
	T: Transport,
{
	/// Create a client over a custom `Transport` (the config is informational only).
	pub fn with_transport(transport: T) -> Self {
		Self::from_parts(transport, ClientConfig::default())
	}

	pub(super) fn from_parts(transport: T, config: ClientConfig) -> Self {
		Self {
			inner: Arc::new(ClientInner { transport, config }),
		}
	}
}

// endregion: --- Constructors

// region:    --- Getters

impl<T> Client<T> {
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}

	pub fn transport(&self) -> &T {
		&self.inner.transport
	}
}

// endregion: --- Getters
