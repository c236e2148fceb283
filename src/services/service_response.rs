//! Wire shapes of the service endpoints, as the engine sends them.
//! Only the fields the client uses are declared; everything else in the payload is ignored.

use crate::common::{Identifier, parse_docker_date};
use crate::endpoint::ResponseShape;
use crate::images::Image;
use crate::services::Service;
use crate::Result;
use serde::{Deserialize, Serialize};

// region:    --- ServiceResponse

/// `GET services/{id}` (and each item of `GET services`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceResponse {
	#[serde(rename = "ID")]
	pub id: String,
	pub version: ServiceVersion,
	pub created_at: String,
	pub updated_at: String,
	pub spec: ServiceSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceVersion {
	pub index: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpec {
	pub name: String,
	pub task_template: TaskTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskTemplate {
	pub container_spec: ContainerSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSpec {
	pub image: String,
}

impl ResponseShape for ServiceResponse {}

impl ServiceResponse {
	/// Convert to the domain `Service`. Fails (without a partial value) if a date is not parsable.
	pub fn into_service(self) -> Result<Service> {
		let ServiceResponse {
			id,
			version,
			created_at,
			updated_at,
			spec,
		} = self;

		let created_at = parse_docker_date(&created_at)?;
		let updated_at = parse_docker_date(&updated_at)?;

		Ok(Service {
			id: Identifier::from(id),
			name: spec.name,
			created_at,
			updated_at,
			version: version.index,
			image: Image::new(spec.task_template.container_spec.image),
		})
	}
}

// endregion: --- ServiceResponse

// region:    --- CreateServiceResponse

/// `POST services/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateServiceResponse {
	#[serde(rename = "ID")]
	pub id: String,
	#[serde(default)]
	pub warnings: Option<Vec<String>>,
}

impl ResponseShape for CreateServiceResponse {}

// endregion: --- CreateServiceResponse

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::codec;
	use crate::Error;

	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	const INSPECT_PAYLOAD: &str = r#"{
		"ID": "9mnpnzenvg8p8tdbtq4wvbkcz",
		"Version": { "Index": 19 },
		"CreatedAt": "2016-06-07T21:05:51.880065305Z",
		"UpdatedAt": "2016-06-07T21:07:29.962229872Z",
		"Spec": {
			"Name": "hopeful_cori",
			"TaskTemplate": {
				"ContainerSpec": { "Image": "redis" },
				"Resources": { "Limits": {}, "Reservations": {} },
				"RestartPolicy": { "Condition": "any", "MaxAttempts": 0 }
			},
			"Mode": { "Replicated": { "Replicas": 1 } }
		},
		"Endpoint": { "Spec": { "Mode": "vip" } }
	}"#;

	#[test]
	fn test_service_response_decode_and_convert() -> Result<()> {
		let response: ServiceResponse = codec::decode(INSPECT_PAYLOAD.as_bytes())?;

		assert_eq!(response.id, "9mnpnzenvg8p8tdbtq4wvbkcz");
		assert_eq!(response.version.index, 19);

		let service = response.into_service()?;
		assert_eq!(service.id.as_str(), "9mnpnzenvg8p8tdbtq4wvbkcz");
		assert_eq!(service.name, "hopeful_cori");
		assert_eq!(service.version, 19);
		assert_eq!(service.image, Image::new("redis"));
		assert!(service.created_at < service.updated_at);
		Ok(())
	}

	#[test]
	fn test_service_response_missing_spec_is_decode_error() {
		let payload = br#"{"ID":"abc","Version":{"Index":1},"CreatedAt":"","UpdatedAt":""}"#;

		assert!(codec::decode::<ServiceResponse>(payload).is_err());
	}

	#[test]
	fn test_service_response_bad_date_no_partial_service() -> Result<()> {
		let mut response: ServiceResponse = codec::decode(INSPECT_PAYLOAD.as_bytes())?;
		response.updated_at = "not-a-date".to_string();

		let res = response.into_service();

		assert!(matches!(res, Err(Error::DateParse { value, .. }) if value == "not-a-date"));
		Ok(())
	}
}

// endregion: --- Tests
