//! Service endpoints, their wire shapes, and the `ServicesApi` facade (`client.services()`).

// region:    --- Modules

mod service_endpoints;
mod service_response;
mod service_types;

pub use service_endpoints::*;
pub use service_response::*;
pub use service_types::*;

// endregion: --- Modules

use crate::Result;
use crate::client::Client;
use crate::images::Image;
use crate::webc::Transport;

/// APIs related to swarm services.
#[derive(Debug)]
pub struct ServicesApi<'a, T> {
	client: &'a Client<T>,
}

impl<'a, T> ServicesApi<'a, T>
where
	T: Transport,
{
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	/// Lists all services of the swarm.
	pub async fn list(&self) -> Result<Vec<Service>> {
		let services = self.client.run(ListServicesEndpoint).await?;
		services.into_iter().map(ServiceResponse::into_service).collect()
	}

	/// Gets a service by name or id.
	pub async fn get(&self, name_or_id: &str) -> Result<Service> {
		let service = self.client.run(InspectServiceEndpoint::new(name_or_id)).await?;
		service.into_service()
	}

	/// Creates a new service with a name and an image (the minimal service spec).
	///
	/// The engine only returns the new id, so the service is fetched right after.
	pub async fn create(&self, name: &str, image: &Image) -> Result<Service> {
		self.create_with(CreateServiceEndpoint::new(name, image.id.as_str())).await
	}

	/// Same as `create`, with a fully configured `CreateServiceEndpoint` (labels, replicas).
	pub async fn create_with(&self, endpoint: CreateServiceEndpoint) -> Result<Service> {
		let service = self
			.client
			.run_then(endpoint, |created| InspectServiceEndpoint::new(created.id))
			.await?;
		service.into_service()
	}

	/// Updates a service to a new image, and returns the service as it is after the update.
	///
	/// The `service.version` must be the current one, otherwise the engine rejects the update.
	pub async fn update(&self, service: &Service, new_image: &Image) -> Result<Service> {
		let service_id = service.id.to_string();
		let endpoint = UpdateServiceEndpoint::new(
			service_id.clone(),
			service.name.clone(),
			service.version,
			new_image.id.as_str(),
		);

		let service = self
			.client
			.run_then(endpoint, |_| InspectServiceEndpoint::new(service_id))
			.await?;
		service.into_service()
	}

	/// Removes a service by name or id.
	pub async fn remove(&self, name_or_id: &str) -> Result<()> {
		self.client.run(RemoveServiceEndpoint::new(name_or_id)).await?;
		Ok(())
	}
}
