use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Map;

use vacuum_client::{Error, Response, Result, Transport};
use vacuum_config::{Config, Credentials, Endpoint, Locale, Service};
use vacuum_request::ParameterBag;

/// Transport double that records every dispatched bag and replays a canned outcome.
pub struct RecordingTransport {
	outcome: Outcome,
	dispatched: Mutex<Vec<ParameterBag>>,
}
impl RecordingTransport {
	pub fn new(response: Response) -> Self {
		Self { outcome: Outcome::Respond(response), dispatched: Mutex::new(Vec::new()) }
	}

	pub fn ok() -> Self {
		Self::new(Response::new(200, ""))
	}

	pub fn failing(message: impl Into<String>) -> Self {
		Self { outcome: Outcome::Fail(message.into()), dispatched: Mutex::new(Vec::new()) }
	}

	pub fn dispatched(&self) -> Vec<ParameterBag> {
		self.dispatched.lock().unwrap_or_else(|err| err.into_inner()).clone()
	}

	pub fn dispatch_count(&self) -> usize {
		self.dispatched.lock().unwrap_or_else(|err| err.into_inner()).len()
	}

	pub fn last(&self) -> Option<ParameterBag> {
		self.dispatched.lock().unwrap_or_else(|err| err.into_inner()).last().cloned()
	}
}

#[async_trait]
impl Transport for RecordingTransport {
	async fn dispatch(&self, parameters: ParameterBag) -> Result<Response> {
		self.dispatched.lock().unwrap_or_else(|err| err.into_inner()).push(parameters);

		match &self.outcome {
			Outcome::Respond(response) => Ok(response.clone()),
			Outcome::Fail(message) => Err(Error::Transport { message: message.clone() }),
		}
	}
}

enum Outcome {
	Respond(Response),
	Fail(String),
}

pub fn credentials() -> Credentials {
	Credentials { key: "key".to_string(), secret: "secret".to_string(), tag: "tag".to_string() }
}

pub fn config() -> Config {
	Config {
		service: Service { log_level: "info".to_string() },
		credentials: credentials(),
		endpoint: Endpoint {
			locale: Locale::Us,
			timeout_ms: 1_000,
			version: None,
			default_headers: Map::new(),
		},
	}
}
