use std::fmt;

use indexmap::IndexMap;

/// Converts a caller-supplied key into the wire spelling by upper-casing its first letter.
///
/// Only the first character changes: `foo` becomes `Foo` and `fooBar` becomes `FooBar`.
pub fn capitalize(key: &str) -> String {
	let mut chars = key.chars();

	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Ordered wire-level query parameters.
///
/// Keys are unique and keep the position of their first insertion. A later `set` on an
/// existing key replaces the value in place.
#[derive(Clone, Debug, Default)]
pub struct ParameterBag {
	entries: IndexMap<String, String>,
}
impl ParameterBag {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.entries.insert(key.into(), value.into());
	}

	/// Copies every entry of `other` into `self`, under `"<prefix>.<key>"` when a prefix is
	/// given.
	pub fn merge(&mut self, other: &ParameterBag, prefix: Option<&str>) {
		for (key, value) in &other.entries {
			match prefix {
				Some(prefix) => self.set(format!("{prefix}.{key}"), value.as_str()),
				None => self.set(key.as_str(), value.as_str()),
			}
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Borrowed pairs in insertion order, ready for query-string encoding.
	pub fn pairs(&self) -> Vec<(&str, &str)> {
		self.iter().collect()
	}
}
// Order-sensitive, unlike `IndexMap` equality.
impl PartialEq for ParameterBag {
	fn eq(&self, other: &Self) -> bool {
		self.entries.iter().eq(other.entries.iter())
	}
}
impl Eq for ParameterBag {}
impl fmt::Display for ParameterBag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, value) in &self.entries {
			writeln!(f, "{key}={value}")?;
		}

		Ok(())
	}
}
impl<K, V> FromIterator<(K, V)> for ParameterBag
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self { entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect() }
	}
}

/// Caller-supplied named parameters, keyed in the caller's own spelling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parameters {
	entries: IndexMap<String, String>,
}
impl Parameters {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.entries.insert(key.into(), value.into());
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);

		self
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries.get(key).map(String::as_str)
	}

	/// Takes an entry out, keeping the order of the rest.
	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.entries.shift_remove(key)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Renders the set as a bag with every key capitalized.
	pub fn to_wire(&self) -> ParameterBag {
		self.iter().map(|(key, value)| (capitalize(key), value)).collect()
	}
}
impl<K, V> FromIterator<(K, V)> for Parameters
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self { entries: iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect() }
	}
}
