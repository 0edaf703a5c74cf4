use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub credentials: Credentials,
	#[serde(default)]
	pub endpoint: Endpoint,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Clone, Deserialize)]
pub struct Credentials {
	/// Access key id sent as `AWSAccessKeyId`.
	pub key: String,
	/// Secret access key. Only a signing transport reads it.
	pub secret: String,
	/// Associate tag sent as `AssociateTag`.
	pub tag: String,
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("key", &self.key)
			.field("secret", &"<redacted>")
			.field("tag", &self.tag)
			.finish()
	}
}

#[derive(Debug, Deserialize)]
pub struct Endpoint {
	#[serde(default)]
	pub locale: Locale,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	/// Optional. Replaces the built-in API version for every request.
	pub version: Option<String>,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}
impl Default for Endpoint {
	fn default() -> Self {
		Self {
			locale: Locale::default(),
			timeout_ms: default_timeout_ms(),
			version: None,
			default_headers: Map::new(),
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	Ca,
	Cn,
	De,
	Es,
	Fr,
	It,
	Jp,
	Uk,
	#[default]
	Us,
}
impl Locale {
	pub fn host(self) -> &'static str {
		match self {
			Self::Ca => "ecs.amazonaws.ca",
			Self::Cn => "webservices.amazon.cn",
			Self::De => "ecs.amazonaws.de",
			Self::Es => "webservices.amazon.es",
			Self::Fr => "ecs.amazonaws.fr",
			Self::It => "webservices.amazon.it",
			Self::Jp => "ecs.amazonaws.jp",
			Self::Uk => "ecs.amazonaws.co.uk",
			Self::Us => "ecs.amazonaws.com",
		}
	}
}

fn default_timeout_ms() -> u64 {
	10_000
}
