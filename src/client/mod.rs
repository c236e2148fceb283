//! The client module holds the `Client`, its builder and config, and the dispatch path
//! (`Client::run` / `Client::run_then`) every resource call goes through.

// region:    --- Modules

mod builder;
mod client_impl;
mod client_types;
mod config;

pub use builder::*;
pub use client_types::*;
pub use config::*;

// endregion: --- Modules
