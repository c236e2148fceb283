use crate::client::{Client, ClientConfig};
use crate::resolver::DockerHost;
use crate::webc::WebClient;
use crate::{Error, Result};
use std::time::Duration;

/// The builder for the default, `reqwest`-backed `Client`.
///
/// For a custom transport (e.g., a test double), use `Client::with_transport(..)` instead.
#[derive(Debug, Default)]
pub struct ClientBuilder {
	config: Option<ClientConfig>,
}

/// Builder methods
impl ClientBuilder {
	/// Set the full `ClientConfig` (replaces any previous one).
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	#[must_use]
	pub fn with_host(mut self, host: DockerHost) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_host(host));
		self
	}

	#[must_use]
	pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_api_version(api_version));
		self
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		let config = self.config.take().unwrap_or_default();
		self.config = Some(config.with_timeout(timeout));
		self
	}

	/// Build the `Client`.
	/// Fails when no host is configured and `DOCKER_HOST` holds an unsupported value,
	/// or when the underlying HTTP client cannot be created.
	pub fn build(self) -> Result<Client<WebClient>> {
		let mut config = self.config.unwrap_or_default();

		let host = match config.host.clone() {
			Some(host) => host,
			None => DockerHost::from_env()?,
		};
		config.host = Some(host.clone());

		let web_client =
			WebClient::new(host, config.api_version(), config.timeout()).map_err(Error::WebClientBuild)?;

		tracing::debug!(base_url = web_client.host().base_url(), api_version = ?config.api_version(), "docker client built");

		Ok(Client::from_parts(web_client, config))
	}
}
