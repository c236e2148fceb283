use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	InvalidUrl {
		url: String,
	},

	/// Custom transports (e.g., test doubles) report their failures through this one.
	#[from]
	Custom(String),

	// -- Externals
	#[from]
	Reqwest(reqwest::Error),
}

impl Error {
	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::Reqwest(err) if err.is_timeout())
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
