use std::fmt;

/// Opaque identifier of one catalog entry, such as an ASIN or a numeric id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemId(String);
impl ItemId {
	pub fn new(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
impl From<&str> for ItemId {
	fn from(raw: &str) -> Self {
		Self(raw.to_string())
	}
}
impl From<String> for ItemId {
	fn from(raw: String) -> Self {
		Self(raw)
	}
}

macro_rules! impl_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for ItemId {
				fn from(raw: $ty) -> Self {
					Self(raw.to_string())
				}
			}
		)*
	};
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

pub(crate) fn join(items: &[ItemId]) -> String {
	items.iter().map(ItemId::as_str).collect::<Vec<_>>().join(",")
}
