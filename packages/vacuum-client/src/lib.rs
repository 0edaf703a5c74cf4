pub mod http;
pub mod product_advertising;
pub mod transport;

mod error;

pub use error::{Error, Result};
pub use http::HttpTransport;
pub use product_advertising::ProductAdvertising;
pub use transport::{Response, Transport};

use reqwest::header::{HeaderMap, HeaderName};
use serde_json::{Map, Value};

pub const SERVICE: &str = "AWSECommerceService";
pub const DEFAULT_API_VERSION: &str = "2011-08-01";

pub fn default_headers(headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut map = HeaderMap::new();

	for (key, value) in headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: "Default header values must be strings.".to_string(),
			});
		};

		map.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(map)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_non_string_header_values() {
		let mut headers = Map::new();

		headers.insert("x-retries".to_string(), Value::from(3));

		assert!(matches!(default_headers(&headers), Err(Error::InvalidConfig { .. })));
	}

	#[test]
	fn rejects_invalid_header_names() {
		let mut headers = Map::new();

		headers.insert("bad header".to_string(), Value::from("x"));

		assert!(matches!(default_headers(&headers), Err(Error::InvalidHeaderName(_))));
	}
}
