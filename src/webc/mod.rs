//! The `webc` module is the transport boundary of the client.
//! - `Transport` is the only thing the dispatcher needs: submit a request, get a status and bytes back.
//! - `WebClient` is the default `reqwest`-backed implementation.

// region:    --- Modules

mod error;
mod web_client;
mod web_types;

pub use self::error::{Error, Result};
pub use web_client::*;
pub use web_types::*;

// endregion: --- Modules
