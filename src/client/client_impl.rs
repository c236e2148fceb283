use crate::client::Client;
use crate::codec;
use crate::endpoint::Endpoint;
use crate::images::ImagesApi;
use crate::services::ServicesApi;
use crate::webc::{Transport, WebRequest, WebResponse};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;
use value_ext::JsonValueExt;

// region:    --- Resource Facades

impl<T> Client<T>
where
	T: Transport,
{
	/// APIs related to swarm services.
	pub fn services(&self) -> ServicesApi<'_, T> {
		ServicesApi::new(self)
	}

	/// APIs related to images.
	pub fn images(&self) -> ImagesApi<'_, T> {
		ImagesApi::new(self)
	}
}

// endregion: --- Resource Facades

// region:    --- Dispatch

impl<T> Client<T>
where
	T: Transport,
{
	/// Execute one endpoint descriptor and decode its response into `E::Response`.
	///
	/// Exactly one of these comes back per call:
	/// - the decoded response,
	/// - `Error::Transport` (no status was received, never retried here),
	/// - `Error::Remote` (non-2xx status, the payload is not decoded),
	/// - `Error::Decode` (2xx, but the payload does not match `E::Response`).
	pub async fn run<E>(&self, endpoint: E) -> Result<E::Response>
	where
		E: Endpoint,
	{
		let method = endpoint.method();
		let path = endpoint.path();
		let body = codec::encode(&endpoint.body()).map_err(|cause| Error::Encode {
			path: path.clone(),
			cause,
		})?;
		drop(endpoint);

		tracing::debug!(
			%method,
			%path,
			body_len = body.as_ref().map(|b| b.bytes.len()),
			"docker run"
		);

		let request = WebRequest {
			method: method.clone(),
			path: path.clone(),
			body,
		};

		let WebResponse { status, body } =
			self.inner.transport.send(request).await.map_err(|webc_error| Error::Transport {
				method: method.clone(),
				path: path.clone(),
				webc_error,
			})?;

		if !status.is_success() {
			let error = remote_error(status, &body);
			tracing::warn!(%method, %path, %status, "docker run - remote error");
			return Err(error);
		}

		tracing::trace!(%method, %path, %status, response_len = body.len(), "docker run - response");

		codec::decode::<E::Response>(&body).map_err(|cause| Error::Decode { path, cause })
	}

	/// Execute `first`, then build the next descriptor from its decoded response and execute it.
	///
	/// The composed result is the second call's response. If `first` fails, `next` is never
	/// called, the second call is never issued, and the first error is returned as is.
	/// Dropping the returned future before `first` resolves also prevents the second call.
	pub async fn run_then<A, B, F>(&self, first: A, next: F) -> Result<B::Response>
	where
		A: Endpoint,
		B: Endpoint,
		F: FnOnce(A::Response) -> B,
	{
		let first_response = self.run(first).await?;

		let second = next(first_response);
		tracing::debug!(path = %second.path(), "docker run_then - next step");

		self.run(second).await
	}
}

// endregion: --- Dispatch

// region:    --- Support

/// The engine reports errors as `{"message": "..."}`; anything else is kept raw in `body`.
fn remote_error(status: StatusCode, body: &Bytes) -> Error {
	let message = serde_json::from_slice::<Value>(body)
		.ok()
		.and_then(|mut value| value.x_take::<String>("message").ok());

	Error::Remote {
		status,
		message,
		body: String::from_utf8_lossy(body).into_owned(),
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
