use crate::resolver::DockerHost;
use std::time::Duration;

/// The client configuration used by `ClientBuilder` to create the default `WebClient` transport.
///
/// - `host` - when `None`, resolved from `DOCKER_HOST` at build time (see `DockerHost::from_env`).
/// - `api_version` - e.g., `v1.41`, prefixed to every descriptor path. When `None`, the engine picks its own default.
/// - `timeout` - whole-request timeout enforced by the transport (the dispatcher imposes none).
#[derive(Debug, Default, Clone)]
pub struct ClientConfig {
	pub(super) host: Option<DockerHost>,
	pub(super) api_version: Option<String>,
	pub(super) timeout: Option<Duration>,
}

/// Chainable setters
impl ClientConfig {
	#[must_use]
	pub fn with_host(mut self, host: DockerHost) -> Self {
		self.host = Some(host);
		self
	}

	#[must_use]
	pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
		self.api_version = Some(api_version.into());
		self
	}

	#[must_use]
	pub const fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}
}

/// Getters
impl ClientConfig {
	pub fn host(&self) -> Option<&DockerHost> {
		self.host.as_ref()
	}

	pub fn api_version(&self) -> Option<&str> {
		self.api_version.as_deref()
	}

	pub const fn timeout(&self) -> Option<Duration> {
		self.timeout
	}
}
