//! Resolvers turn process-level settings (environment, config) into the values the web client needs.

// region:    --- Modules

mod docker_host;

pub use docker_host::*;

// endregion: --- Modules
