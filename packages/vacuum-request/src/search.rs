use serde_json::Value;

use crate::{
	Error, Result,
	parameters::{self, ParameterBag, Parameters},
};

pub const OPERATION: &str = "ItemSearch";

/// Second argument of a search: a bare keyword or a set of attribute parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchQuery {
	Keywords(String),
	Parameters(Parameters),
}
impl SearchQuery {
	pub fn keywords(keywords: impl Into<String>) -> Self {
		Self::Keywords(keywords.into())
	}

	/// Accepts a scalar as keywords or an object as parameters.
	pub fn from_json(value: &Value) -> Result<Self> {
		if let Some(keywords) = scalar_to_string(value) {
			return Ok(Self::Keywords(keywords));
		}

		let Some(object) = value.as_object() else {
			return Err(Error::InvalidArgument {
				message: "Search query must be a keyword or a parameter object.".to_string(),
			});
		};
		let mut parameters = Parameters::new();

		for (key, value) in object {
			let Some(value) = scalar_to_string(value) else {
				return Err(Error::InvalidArgument {
					message: format!("Search parameter {key} must be a scalar value."),
				});
			};

			parameters.insert(key.as_str(), value);
		}

		Ok(Self::Parameters(parameters))
	}
}
impl From<Parameters> for SearchQuery {
	fn from(parameters: Parameters) -> Self {
		Self::Parameters(parameters)
	}
}

#[derive(Clone, Debug, Default)]
pub struct SearchRequestBuilder {
	defaults: ParameterBag,
}
impl SearchRequestBuilder {
	pub fn new(defaults: ParameterBag) -> Self {
		Self { defaults }
	}

	pub fn defaults(&self) -> &ParameterBag {
		&self.defaults
	}

	pub fn build_search(&self, index: &str, query: &SearchQuery) -> ParameterBag {
		let mut bag = self.defaults.clone();

		bag.set("Operation", OPERATION);

		match query {
			SearchQuery::Keywords(keywords) => bag.set("Keywords", keywords.as_str()),
			SearchQuery::Parameters(parameters) => bag.merge(&parameters.to_wire(), None),
		}

		bag.set("SearchIndex", parameters::capitalize(index));

		bag
	}
}

fn scalar_to_string(value: &Value) -> Option<String> {
	match value {
		Value::String(raw) => Some(raw.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}
