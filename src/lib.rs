//! Typed async client for the Docker Engine API.
//!
//! Every remote call is described by an `Endpoint` (method, path, optional body, declared response shape)
//! and executed by `Client::run`. Dependent calls (e.g., create a service, then inspect it by the returned id)
//! are composed with `Client::run_then`. The `services()` and `images()` facades are built on these two.
//!
//! ```ignore
//! use docker_client::Client;
//! use docker_client::images::Image;
//!
//! let client = Client::from_env()?;
//! let service = client.services().create("web", &Image::new("nginx:1.27")).await?;
//! println!("{} v{}", service.name, service.version);
//! ```

// region:    --- Modules

mod client;
mod common;
mod error;

pub mod codec;
pub mod endpoint;
pub mod images;
pub mod resolver;
pub mod services;
pub mod webc;

pub use client::*;
pub use common::*;
pub use error::{Error, Result};

// endregion: --- Modules
