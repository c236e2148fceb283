use crate::codec::EncodedBody;
use crate::resolver::DockerHost;
use crate::webc::{Error, Result, WebRequest, WebResponse};
use reqwest::header::CONTENT_TYPE;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

// region:    --- Transport

/// The network collaborator of the dispatcher.
///
/// Implementations own connection management (pooling, TLS, timeouts).
/// A transport failure must be reported as `Err`, while any HTTP status (including 4xx/5xx)
/// is a successful exchange and comes back as a `WebResponse`.
pub trait Transport: Send + Sync {
	fn send(&self, request: WebRequest) -> impl Future<Output = Result<WebResponse>> + Send;
}

// endregion: --- Transport

// region:    --- WebClient

/// The default `Transport`, backed by a pooled `reqwest::Client`.
/// It is cheap to clone.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
	host: DockerHost,
	api_version: Option<Arc<str>>,
}

/// Constructors
impl WebClient {
	pub fn new(host: DockerHost, api_version: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
		// The base URL is joined by concatenation, so it must be a valid absolute URL.
		if reqwest::Url::parse(host.base_url()).is_err() {
			return Err(Error::InvalidUrl {
				url: host.base_url().to_string(),
			});
		}

		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = timeout {
			builder = builder.timeout(timeout);
		}
		let reqwest_client = builder.build()?;

		Ok(Self {
			reqwest_client,
			host,
			api_version: api_version.map(|v| Arc::from(v.trim_matches('/'))),
		})
	}
}

/// Getters
impl WebClient {
	pub fn host(&self) -> &DockerHost {
		&self.host
	}

	/// Resolve a descriptor path against the host, e.g. `http://localhost:2375/v1.41/services`.
	pub fn url_for(&self, path: &str) -> String {
		let base_url = self.host.base_url();
		let path = path.trim_start_matches('/');
		match self.api_version.as_deref() {
			Some(version) => format!("{base_url}{version}/{path}"),
			None => format!("{base_url}{path}"),
		}
	}
}

impl Transport for WebClient {
	async fn send(&self, request: WebRequest) -> Result<WebResponse> {
		let WebRequest { method, path, body } = request;
		let url = self.url_for(&path);

		let mut reqwest_builder = self.reqwest_client.request(method, &url);
		if let Some(EncodedBody { content_type, bytes }) = body {
			reqwest_builder = reqwest_builder.header(CONTENT_TYPE, content_type).body(bytes);
		}

		let response = reqwest_builder.send().await?;
		let status = response.status();
		let body = response.bytes().await?;

		Ok(WebResponse { status, body })
	}
}

// endregion: --- WebClient

// region:    --- Tests


// endregion: --- Tests
