use crate::endpoint::{BodyPayload, Endpoint, NoBody};
use crate::services::{CreateServiceResponse, ServiceResponse};
use reqwest::Method;
use serde_json::{Value, json};
use std::borrow::Cow;
use std::collections::BTreeMap;

// region:    --- ListServicesEndpoint

/// `GET services`
#[derive(Debug, Clone, Default)]
pub struct ListServicesEndpoint;

impl Endpoint for ListServicesEndpoint {
	type Response = Vec<ServiceResponse>;

	fn method(&self) -> Method {
		Method::GET
	}

	fn path(&self) -> String {
		"services".to_string()
	}
}

// endregion: --- ListServicesEndpoint

// region:    --- InspectServiceEndpoint

/// `GET services/{name_or_id}`
#[derive(Debug, Clone)]
pub struct InspectServiceEndpoint {
	name_or_id: String,
}

impl InspectServiceEndpoint {
	pub fn new(name_or_id: impl Into<String>) -> Self {
		Self {
			name_or_id: name_or_id.into(),
		}
	}
}

impl Endpoint for InspectServiceEndpoint {
	type Response = ServiceResponse;

	fn method(&self) -> Method {
		Method::GET
	}

	fn path(&self) -> String {
		format!("services/{}", path_segment(&self.name_or_id))
	}
}

// endregion: --- InspectServiceEndpoint

// region:    --- CreateServiceEndpoint

/// `POST services/create` - the minimal spec is a name and an image.
#[derive(Debug, Clone)]
pub struct CreateServiceEndpoint {
	name: String,
	image: String,
	labels: BTreeMap<String, String>,
	replicas: Option<u64>,
}

/// Constructors
impl CreateServiceEndpoint {
	pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			image: image.into(),
			labels: BTreeMap::new(),
			replicas: None,
		}
	}
}

/// Chainable setters
impl CreateServiceEndpoint {
	#[must_use]
	pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.labels.insert(key.into(), value.into());
		self
	}

	/// Run the service in replicated mode with this number of tasks.
	#[must_use]
	pub const fn with_replicas(mut self, replicas: u64) -> Self {
		self.replicas = Some(replicas);
		self
	}
}

impl Endpoint for CreateServiceEndpoint {
	type Response = CreateServiceResponse;

	fn method(&self) -> Method {
		Method::POST
	}

	fn path(&self) -> String {
		"services/create".to_string()
	}

	fn body(&self) -> BodyPayload {
		let mut payload = service_spec_payload(&self.name, &self.image);

		if !self.labels.is_empty() {
			payload["Labels"] = json!(self.labels);
		}
		if let Some(replicas) = self.replicas {
			payload["Mode"] = json!({ "Replicated": { "Replicas": replicas } });
		}

		BodyPayload::Json(payload)
	}
}

// endregion: --- CreateServiceEndpoint

// region:    --- UpdateServiceEndpoint

/// `POST services/{name_or_id}/update?version={version}`
///
/// The engine replaces the whole spec and requires the current version index
/// (optimistic concurrency). The acknowledgment does not carry the updated service.
#[derive(Debug, Clone)]
pub struct UpdateServiceEndpoint {
	name_or_id: String,
	name: String,
	version: u64,
	image: String,
}

impl UpdateServiceEndpoint {
	pub fn new(name_or_id: impl Into<String>, name: impl Into<String>, version: u64, image: impl Into<String>) -> Self {
		Self {
			name_or_id: name_or_id.into(),
			name: name.into(),
			version,
			image: image.into(),
		}
	}
}

impl Endpoint for UpdateServiceEndpoint {
	type Response = NoBody;

	fn method(&self) -> Method {
		Method::POST
	}

	fn path(&self) -> String {
		format!("services/{}/update?version={}", path_segment(&self.name_or_id), self.version)
	}

	fn body(&self) -> BodyPayload {
		BodyPayload::Json(service_spec_payload(&self.name, &self.image))
	}
}

// endregion: --- UpdateServiceEndpoint

// region:    --- RemoveServiceEndpoint

/// `DELETE services/{name_or_id}`
#[derive(Debug, Clone)]
pub struct RemoveServiceEndpoint {
	name_or_id: String,
}

impl RemoveServiceEndpoint {
	pub fn new(name_or_id: impl Into<String>) -> Self {
		Self {
			name_or_id: name_or_id.into(),
		}
	}
}

impl Endpoint for RemoveServiceEndpoint {
	type Response = NoBody;

	fn method(&self) -> Method {
		Method::DELETE
	}

	fn path(&self) -> String {
		format!("services/{}", path_segment(&self.name_or_id))
	}
}

// endregion: --- RemoveServiceEndpoint

// region:    --- Support

/// Names and ids are single path segments (`/`, `?`, `#` would change the request target).
fn path_segment(name_or_id: &str) -> Cow<'_, str> {
	urlencoding::encode(name_or_id)
}

fn service_spec_payload(name: &str, image: &str) -> Value {
	json!({
		"Name": name,
		"TaskTemplate": {
			"ContainerSpec": {
				"Image": image,
			},
		},
	})
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
