use crate::{
	Result,
	batch::ItemBatcher,
	item::ItemId,
	parameters::{ParameterBag, Parameters},
};

pub const OPERATION: &str = "ItemLookup";

/// Named parameter lifted into the top-level `Version` field instead of the generic merge.
const VERSION_KEY: &str = "version";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupRequest {
	pub item_ids: Vec<ItemId>,
	pub parameters: Parameters,
	/// Replaces the default `Version` of the bag when set. Takes precedence over a `version`
	/// entry in `parameters`.
	pub version_override: Option<String>,
}
impl LookupRequest {
	pub fn new<I, T>(item_ids: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<ItemId>,
	{
		Self { item_ids: item_ids.into_iter().map(Into::into).collect(), ..Default::default() }
	}

	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.parameters.insert(key, value);

		self
	}

	pub fn parameters(mut self, parameters: Parameters) -> Self {
		self.parameters = parameters;

		self
	}

	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version_override = Some(version.into());

		self
	}
}

#[derive(Clone, Debug, Default)]
pub struct LookupRequestBuilder {
	defaults: ParameterBag,
	batcher: ItemBatcher,
}
impl LookupRequestBuilder {
	pub fn new(defaults: ParameterBag) -> Self {
		Self { defaults, batcher: ItemBatcher::new() }
	}

	pub fn defaults(&self) -> &ParameterBag {
		&self.defaults
	}

	pub fn build_lookup(&self, request: &LookupRequest) -> Result<ParameterBag> {
		let mut parameters = request.parameters.clone();
		let lifted_version = parameters.remove(VERSION_KEY);
		let version = request.version_override.as_deref().or(lifted_version.as_deref());
		let mut bag = self.defaults.clone();

		bag.set("Operation", OPERATION);

		self.batcher.encode(&request.item_ids, &parameters, &mut bag)?;

		if let Some(version) = version {
			bag.set("Version", version);
		}

		Ok(bag)
	}
}
