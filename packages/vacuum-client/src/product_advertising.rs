use vacuum_config::{Config, Credentials};
use vacuum_request::{
	LookupRequest, LookupRequestBuilder, ParameterBag, SearchQuery, SearchRequestBuilder, lookup,
	search,
};

use crate::{DEFAULT_API_VERSION, HttpTransport, Response, Result, SERVICE, Transport};

/// Product Advertising client: builds one parameter bag per call and hands it to `T`.
///
/// Validation happens before dispatch, so a rejected request never reaches the transport.
#[derive(Debug)]
pub struct ProductAdvertising<T> {
	credentials: Credentials,
	lookup: LookupRequestBuilder,
	search: SearchRequestBuilder,
	transport: T,
}
impl ProductAdvertising<HttpTransport> {
	pub fn from_config(cfg: &Config) -> Result<Self> {
		let transport = HttpTransport::new(&cfg.endpoint)?;

		Ok(Self::new(cfg, transport))
	}
}
impl<T> ProductAdvertising<T>
where
	T: Transport,
{
	pub fn new(cfg: &Config, transport: T) -> Self {
		Self::with_credentials(cfg.credentials.clone(), cfg.endpoint.version.as_deref(), transport)
	}

	pub fn with_credentials(credentials: Credentials, version: Option<&str>, transport: T) -> Self {
		let defaults: ParameterBag = [
			("Service", SERVICE),
			("Version", version.unwrap_or(DEFAULT_API_VERSION)),
			("AWSAccessKeyId", credentials.key.as_str()),
			("AssociateTag", credentials.tag.as_str()),
		]
		.into_iter()
		.collect();

		Self {
			lookup: LookupRequestBuilder::new(defaults.clone()),
			search: SearchRequestBuilder::new(defaults),
			credentials,
			transport,
		}
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub fn defaults(&self) -> &ParameterBag {
		self.lookup.defaults()
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	pub fn build_lookup(&self, request: &LookupRequest) -> Result<ParameterBag> {
		Ok(self.lookup.build_lookup(request)?)
	}

	pub fn build_search(&self, index: &str, query: &SearchQuery) -> ParameterBag {
		self.search.build_search(index, query)
	}

	pub async fn look_up(&self, request: &LookupRequest) -> Result<Response> {
		let parameters = self.build_lookup(request)?;

		self.dispatch(lookup::OPERATION, parameters).await
	}

	pub async fn search(&self, index: &str, query: &SearchQuery) -> Result<Response> {
		let parameters = self.build_search(index, query);

		self.dispatch(search::OPERATION, parameters).await
	}

	async fn dispatch(&self, operation: &str, parameters: ParameterBag) -> Result<Response> {
		tracing::debug!(operation, parameters = parameters.len(), "Dispatching request.");

		self.transport.dispatch(parameters).await
	}
}
