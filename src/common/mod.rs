// region:    --- Modules

mod docker_date;
mod identifier;

pub use docker_date::*;
pub use identifier::*;

// endregion: --- Modules
