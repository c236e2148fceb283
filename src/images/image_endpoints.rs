use crate::endpoint::{BodyPayload, Endpoint, NoBody};
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::Method;
use std::path::{Path, PathBuf};

// region:    --- LoadImageEndpoint

/// `POST images/load` - upload a tar archive of one or more images (as produced by `docker save`).
///
/// The archive is read into memory when the descriptor is built.
/// - `new(..)` never fails: an unreadable source is logged and yields a descriptor with no body.
/// - `try_new(..)` / `read(..)` fail with `Error::BodySourceRead` instead.
#[derive(Debug, Clone)]
pub struct LoadImageEndpoint {
	src: Option<PathBuf>,
	archive: Option<Bytes>,
	quiet: bool,
}

/// Constructors
impl LoadImageEndpoint {
	/// Lenient constructor. A missing or unreadable `src` does not fail here, the request
	/// will simply be sent without a body (and the engine will reject it).
	pub fn new(src: impl AsRef<Path>) -> Self {
		let src = src.as_ref();
		let archive = match std::fs::read(src) {
			Ok(content) => Some(Bytes::from(content)),
			Err(err) => {
				tracing::warn!(src = %src.display(), error = %err, "image archive not readable, load request will have no body");
				None
			}
		};

		Self {
			src: Some(src.to_path_buf()),
			archive,
			quiet: false,
		}
	}

	/// Strict constructor. Fails if `src` cannot be read.
	pub fn try_new(src: impl AsRef<Path>) -> Result<Self> {
		let src = src.as_ref();
		let content = std::fs::read(src).map_err(|cause| Error::BodySourceRead {
			path: src.to_path_buf(),
			cause,
		})?;

		Ok(Self {
			src: Some(src.to_path_buf()),
			archive: Some(Bytes::from(content)),
			quiet: false,
		})
	}

	/// Same as `try_new`, but reads the archive without blocking the async runtime.
	pub async fn read(src: impl AsRef<Path>) -> Result<Self> {
		let src = src.as_ref();
		let content = tokio::fs::read(src).await.map_err(|cause| Error::BodySourceRead {
			path: src.to_path_buf(),
			cause,
		})?;

		Ok(Self {
			src: Some(src.to_path_buf()),
			archive: Some(Bytes::from(content)),
			quiet: false,
		})
	}

	/// Build from an archive already in memory.
	pub fn from_bytes(archive: impl Into<Bytes>) -> Self {
		Self {
			src: None,
			archive: Some(archive.into()),
			quiet: false,
		}
	}
}

/// Chainable setters
impl LoadImageEndpoint {
	/// Suppress the engine's progress output during the load.
	#[must_use]
	pub const fn with_quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}
}

/// Getters
impl LoadImageEndpoint {
	pub fn src(&self) -> Option<&Path> {
		self.src.as_deref()
	}

	pub fn has_body(&self) -> bool {
		self.archive.is_some()
	}
}

impl Endpoint for LoadImageEndpoint {
	type Response = NoBody;

	fn method(&self) -> Method {
		Method::POST
	}

	fn path(&self) -> String {
		format!("images/load?quiet={}", self.quiet)
	}

	fn body(&self) -> BodyPayload {
		match &self.archive {
			Some(archive) => BodyPayload::Raw(archive.clone()),
			None => BodyPayload::Absent,
		}
	}
}

// endregion: --- LoadImageEndpoint

// region:    --- Tests


// endregion: --- Tests
