use async_trait::async_trait;

use vacuum_request::ParameterBag;

use crate::Result;

/// Dispatches one finished parameter bag to the remote API.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn dispatch(&self, parameters: ParameterBag) -> Result<Response>;
}

/// Raw API response. The body is left unparsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
	status: u16,
	body: String,
}
impl Response {
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: body.into() }
	}

	pub fn status(&self) -> u16 {
		self.status
	}

	pub fn body(&self) -> &str {
		&self.body
	}

	pub fn into_body(self) -> String {
		self.body
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}
