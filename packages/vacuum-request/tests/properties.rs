use proptest::prelude::*;

use vacuum_request::{LookupRequest, LookupRequestBuilder, MAX_ITEMS, MAX_ITEMS_PER_BATCH};

fn item_ids(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec("[A-Z0-9]{10}", range)
}

fn sorted(mut values: Vec<String>) -> Vec<String> {
	values.sort();

	values
}

proptest! {
	#[test]
	fn single_batch_preserves_items(ids in item_ids(1..=MAX_ITEMS_PER_BATCH)) {
		let bag = LookupRequestBuilder::default()
			.build_lookup(&LookupRequest::new(ids.clone()))
			.expect("build failed");
		let encoded = bag.get("ItemId").expect("Missing ItemId.");

		prop_assert_eq!(encoded.split(',').map(str::to_string).collect::<Vec<_>>(), ids);
		prop_assert!(!bag.contains_key("ItemLookup.1.ItemId"));
	}

	#[test]
	fn multi_batch_splits_positionally(ids in item_ids(MAX_ITEMS_PER_BATCH + 1..=MAX_ITEMS)) {
		let bag = LookupRequestBuilder::default()
			.build_lookup(&LookupRequest::new(ids.clone()))
			.expect("build failed");
		let first = bag.get("ItemLookup.1.ItemId").expect("Missing first batch.");
		let second = bag.get("ItemLookup.2.ItemId").expect("Missing second batch.");
		let first: Vec<String> = first.split(',').map(str::to_string).collect();
		let second: Vec<String> = second.split(',').map(str::to_string).collect();

		prop_assert_eq!(first.len(), MAX_ITEMS_PER_BATCH);
		prop_assert_eq!(first.len() + second.len(), ids.len());
		prop_assert_eq!(
			sorted(first.into_iter().chain(second).collect()),
			sorted(ids)
		);
		prop_assert!(!bag.contains_key("ItemId"));
	}

	#[test]
	fn oversized_lookups_are_rejected(ids in item_ids(MAX_ITEMS + 1..=MAX_ITEMS * 2)) {
		prop_assert!(LookupRequestBuilder::default().build_lookup(&LookupRequest::new(ids)).is_err());
	}
}
