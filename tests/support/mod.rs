//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod canned_server;
mod mock_transport;
mod seeders;

pub use canned_server::*;
pub use mock_transport::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Common Clients

use docker_client::Client;

/// Client over a fresh `MockTransport` (the transport is returned too, to inspect the recorded requests).
pub fn mock_client(transport: MockTransport) -> (Client<MockTransport>, MockTransport) {
	init_tracing();
	(Client::with_transport(transport.clone()), transport)
}

// endregion: --- Common Clients

// region:    --- Tracing

/// Set `RUST_LOG=docker_client=trace` to see the dispatch logs.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

// endregion: --- Tracing
