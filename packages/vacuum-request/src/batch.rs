use crate::{
	Error, Result,
	item::{self, ItemId},
	parameters::{ParameterBag, Parameters},
};

/// Items the API accepts in one sub-query.
pub const MAX_ITEMS_PER_BATCH: usize = 10;
/// Sub-queries the API accepts in one lookup call.
pub const MAX_BATCHES: usize = 2;
pub const MAX_ITEMS: usize = MAX_ITEMS_PER_BATCH * MAX_BATCHES;

const BATCH_PREFIX: &str = "ItemLookup";
const SHARED_PREFIX: &str = "ItemLookup.Shared";
const ITEM_ID_KEY: &str = "ItemId";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Batch<'a> {
	/// 1-based position of the batch in the lookup.
	pub index: usize,
	pub items: &'a [ItemId],
}
impl Batch<'_> {
	pub fn joined(&self) -> String {
		item::join(self.items)
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ItemBatcher;
impl ItemBatcher {
	pub fn new() -> Self {
		Self
	}

	/// Splits `items` into positional chunks of at most [`MAX_ITEMS_PER_BATCH`].
	pub fn partition<'a>(&self, items: &'a [ItemId]) -> Result<Vec<Batch<'a>>> {
		if items.is_empty() {
			return Err(Error::InvalidArgument {
				message: "At least one item id is required.".to_string(),
			});
		}
		if items.len() > MAX_ITEMS {
			return Err(Error::InvalidArgument {
				message: format!(
					"At most {MAX_ITEMS} item ids are allowed per lookup, got {}.",
					items.len()
				),
			});
		}

		Ok(items
			.chunks(MAX_ITEMS_PER_BATCH)
			.enumerate()
			.map(|(offset, items)| Batch { index: offset + 1, items })
			.collect())
	}

	/// Writes the item ids and named parameters of a lookup into `bag`.
	///
	/// A single batch lands in the top-level `ItemId` field with the parameters beside it; the
	/// ids are written last so a caller `itemId` cannot replace them.
	/// Several batches land in `ItemLookup.<n>.ItemId` with the parameters written once under
	/// `ItemLookup.Shared`.
	pub fn encode(
		&self,
		items: &[ItemId],
		parameters: &Parameters,
		bag: &mut ParameterBag,
	) -> Result<()> {
		let batches = self.partition(items)?;
		let shared = parameters.to_wire();

		if let [batch] = batches.as_slice() {
			bag.merge(&shared, None);
			bag.set(ITEM_ID_KEY, batch.joined());

			return Ok(());
		}

		for batch in &batches {
			let mut sub_query = ParameterBag::new();

			sub_query.set(ITEM_ID_KEY, batch.joined());
			bag.merge(&sub_query, Some(format!("{BATCH_PREFIX}.{}", batch.index).as_str()));
		}

		bag.merge(&shared, Some(SHARED_PREFIX));

		Ok(())
	}
}
