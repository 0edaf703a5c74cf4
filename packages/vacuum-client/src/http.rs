// std
use std::time::Duration;

// crates.io
use async_trait::async_trait;
use reqwest::{Client, header::HeaderMap};

use vacuum_request::ParameterBag;

use crate::{Response, Result, Transport};

pub const PATH: &str = "/onca/xml";

/// Sends parameter bags as the query string of a `GET` request.
///
/// Requests are sent unsigned; a non-2xx status is returned as a [`Response`], not an error.
#[derive(Clone, Debug)]
pub struct HttpTransport {
	client: Client,
	url: String,
	headers: HeaderMap,
}
impl HttpTransport {
	pub fn new(endpoint: &vacuum_config::Endpoint) -> Result<Self> {
		let url = format!("https://{}{PATH}", endpoint.locale.host());
		let headers = crate::default_headers(&endpoint.default_headers)?;

		Self::with_url(url, Duration::from_millis(endpoint.timeout_ms), headers)
	}

	pub fn with_url(url: impl Into<String>, timeout: Duration, headers: HeaderMap) -> Result<Self> {
		let client = Client::builder().timeout(timeout).build()?;

		Ok(Self { client, url: url.into(), headers })
	}

	pub fn url(&self) -> &str {
		&self.url
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn dispatch(&self, parameters: ParameterBag) -> Result<Response> {
		let res = self
			.client
			.get(&self.url)
			.headers(self.headers.clone())
			.query(&parameters.pairs())
			.send()
			.await?;
		let status = res.status().as_u16();
		let body = res.text().await?;

		tracing::debug!(url = %self.url, status, bytes = body.len(), "Received API response.");

		Ok(Response::new(status, body))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::Map;

	use super::*;

	fn endpoint(locale: vacuum_config::Locale) -> vacuum_config::Endpoint {
		vacuum_config::Endpoint {
			locale,
			timeout_ms: 1_000,
			version: None,
			default_headers: Map::new(),
		}
	}

	#[test]
	fn targets_locale_host() {
		let transport = HttpTransport::new(&endpoint(vacuum_config::Locale::De))
			.expect("Failed to build transport.");

		assert_eq!(transport.url(), "https://ecs.amazonaws.de/onca/xml");
	}

	#[test]
	fn carries_default_headers() {
		let mut cfg = endpoint(vacuum_config::Locale::Us);

		cfg.default_headers.insert("user-agent".to_string(), "vacuum".into());

		let transport = HttpTransport::new(&cfg).expect("Failed to build transport.");

		assert_eq!(transport.headers.get("user-agent").map(|v| v.as_bytes()), Some(&b"vacuum"[..]));
	}
}
