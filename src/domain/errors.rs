use derive_more::derive::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum PageError {
	#[display("Backend request failed: {_0}")]
	Transport(reqwest::Error),
	#[display("Backend responded with {status}: {message}")]
	Backend { status: u16, message: String },
	#[display("Backend response is not valid JSON: {_0}")]
	InvalidResponse(serde_json::Error),
	#[display("Backend response carries no redirect url.")]
	MissingRedirectUrl,
}

impl From<reqwest::Error> for PageError {
	fn from(err: reqwest::Error) -> Self {
		PageError::Transport(err)
	}
}

impl From<serde_json::Error> for PageError {
	fn from(err: serde_json::Error) -> Self {
		PageError::InvalidResponse(err)
	}
}
