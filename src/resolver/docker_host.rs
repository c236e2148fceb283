use crate::{Error, Result};
use std::sync::Arc;

/// The base URL of the Docker engine the client talks to (always ends with `/`).
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DockerHost {
	inner: Arc<str>,
}

impl DockerHost {
	pub const ENV_NAME: &'static str = "DOCKER_HOST";
	pub const DEFAULT_BASE_URL: &'static str = "http://localhost:2375/";
}

/// Constructors
impl DockerHost {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}

	/// Resolve the host from the `DOCKER_HOST` environment variable.
	/// Falls back to `http://localhost:2375/` when the variable is unset or empty.
	pub fn from_env() -> Result<Self> {
		Self::from_env_value(std::env::var(Self::ENV_NAME).ok().as_deref())
	}

	fn from_env_value(value: Option<&str>) -> Result<Self> {
		match value {
			Some(value) if !value.trim().is_empty() => Self::parse(value),
			_ => Ok(Self::default()),
		}
	}

	/// Parse a Docker host string the way the docker CLI accepts them.
	/// - `tcp://host:port` becomes `http://host:port/`
	/// - `http://` and `https://` are kept as is
	/// - `host:port` (no scheme) is treated as `tcp://`
	/// - socket based schemes (`unix://`, `npipe://`, `ssh://`) are not supported by the HTTP transport
	pub fn parse(host: &str) -> Result<Self> {
		let host = host.trim();

		let url = if let Some(rest) = host.strip_prefix("tcp://") {
			format!("http://{rest}")
		} else if host.starts_with("http://") || host.starts_with("https://") {
			host.to_string()
		} else if host.contains("://") {
			return Err(Error::HostNotSupported { host: host.to_string() });
		} else {
			format!("http://{host}")
		};

		let url = if url.ends_with('/') { url } else { format!("{url}/") };

		Ok(Self::from_owned(url))
	}
}

impl Default for DockerHost {
	fn default() -> Self {
		Self::from_static(Self::DEFAULT_BASE_URL)
	}
}

/// Getters
impl DockerHost {
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.inner
	}
}

// region:    --- Tests


// endregion: --- Tests
