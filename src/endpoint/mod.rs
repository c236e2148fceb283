//! An `Endpoint` describes one remote call to the engine: method, path, optional body,
//! and (through its associated type) the shape the response is decoded into.
//!
//! Descriptors are plain values. They are built per call site, handed to `Client::run`
//! (which consumes them), and never mutated in between.

// region:    --- Modules

mod body_payload;
mod response_shape;

pub use body_payload::*;
pub use response_shape::*;

// endregion: --- Modules

use reqwest::Method;

pub trait Endpoint {
	/// What a success response is decoded into. Use `NoBody` when the status alone tells the outcome.
	type Response: ResponseShape;

	fn method(&self) -> Method;

	/// Path relative to the engine base URL (and API version prefix), query string included.
	fn path(&self) -> String;

	fn body(&self) -> BodyPayload {
		BodyPayload::Absent
	}
}
