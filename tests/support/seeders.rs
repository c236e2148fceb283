use serde_json::json;

pub const CREATED_AT: &str = "2016-06-07T21:05:51.880065305Z";
pub const UPDATED_AT: &str = "2016-06-07T21:07:29.962229872Z";

/// An engine-shaped `GET services/{id}` payload (with a few extra fields the client ignores).
pub fn seed_service_json(id: &str, name: &str, image: &str, version: u64) -> String {
	json!({
		"ID": id,
		"Version": { "Index": version },
		"CreatedAt": CREATED_AT,
		"UpdatedAt": UPDATED_AT,
		"Spec": {
			"Name": name,
			"Labels": {},
			"TaskTemplate": {
				"ContainerSpec": { "Image": image },
				"ForceUpdate": 0
			},
			"Mode": { "Replicated": { "Replicas": 1 } }
		},
		"Endpoint": { "Spec": {} }
	})
	.to_string()
}

pub fn seed_created_json(id: &str) -> String {
	json!({ "ID": id, "Warnings": null }).to_string()
}

pub fn seed_error_json(message: &str) -> String {
	json!({ "message": message }).to_string()
}
