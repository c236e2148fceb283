//! Image endpoints and the `ImagesApi` facade (`client.images()`).

// region:    --- Modules

mod image_endpoints;
mod image_types;

pub use image_endpoints::*;
pub use image_types::*;

// endregion: --- Modules

use crate::Result;
use crate::client::Client;
use crate::webc::Transport;
use std::path::Path;

/// APIs related to images.
#[derive(Debug)]
pub struct ImagesApi<'a, T> {
	client: &'a Client<T>,
}

impl<'a, T> ImagesApi<'a, T>
where
	T: Transport,
{
	pub(crate) fn new(client: &'a Client<T>) -> Self {
		Self { client }
	}

	/// Load the images contained in a tar archive (as produced by `docker save`).
	/// Fails with `Error::BodySourceRead` if `src` cannot be read (nothing is sent in that case).
	pub async fn load(&self, src: impl AsRef<Path>) -> Result<()> {
		let endpoint = LoadImageEndpoint::read(src).await?;
		self.client.run(endpoint).await?;
		Ok(())
	}
}
