use bytes::Bytes;
use docker_client::webc::{self, Transport, WebRequest, WebResponse};
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the mock answers for a given `(method, path)`.
#[derive(Debug, Clone)]
pub enum MockReply {
	Respond { status: StatusCode, body: Bytes },
	Fail(String),
	/// Never resolves (to test cancellation).
	Pending,
}

/// In-memory `Transport` that records every request it receives.
/// Unknown routes answer `404 {"message":"page not found"}` like the engine does.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
	state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
	routes: HashMap<(Method, String), MockReply>,
	requests: Vec<WebRequest>,
}

/// Route setup (chainable)
impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_reply(self, method: Method, path: &str, status: u16, body: impl Into<Bytes>) -> Self {
		let status = StatusCode::from_u16(status).expect("valid status code");
		self.with_route(
			method,
			path,
			MockReply::Respond {
				status,
				body: body.into(),
			},
		)
	}

	pub fn with_failure(self, method: Method, path: &str, message: &str) -> Self {
		self.with_route(method, path, MockReply::Fail(message.to_string()))
	}

	pub fn with_pending(self, method: Method, path: &str) -> Self {
		self.with_route(method, path, MockReply::Pending)
	}

	fn with_route(self, method: Method, path: &str, reply: MockReply) -> Self {
		self.state
			.lock()
			.expect("mock state lock")
			.routes
			.insert((method, path.to_string()), reply);
		self
	}
}

/// Recorded requests
impl MockTransport {
	pub fn requests(&self) -> Vec<WebRequest> {
		self.state.lock().expect("mock state lock").requests.clone()
	}

	/// `"METHOD path"` of each recorded request, in order.
	pub fn calls(&self) -> Vec<String> {
		self.requests()
			.into_iter()
			.map(|req| format!("{} {}", req.method, req.path))
			.collect()
	}
}

impl Transport for MockTransport {
	async fn send(&self, request: WebRequest) -> webc::Result<WebResponse> {
		let reply = {
			let mut state = self.state.lock().expect("mock state lock");
			let reply = state.routes.get(&(request.method.clone(), request.path.clone())).cloned();
			state.requests.push(request);
			reply
		};

		// Give concurrent calls a chance to interleave.
		tokio::task::yield_now().await;

		match reply {
			Some(MockReply::Respond { status, body }) => Ok(WebResponse::new(status, body)),
			Some(MockReply::Fail(message)) => Err(webc::Error::Custom(message)),
			Some(MockReply::Pending) => std::future::pending().await,
			None => Ok(WebResponse::new(
				StatusCode::NOT_FOUND,
				Bytes::from_static(br#"{"message":"page not found"}"#),
			)),
		}
	}
}
