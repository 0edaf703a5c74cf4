//! Parameter composition and item batching for Product Advertising requests.
//!
//! Everything here is synchronous and free of I/O. Builders start every call from a fresh
//! copy of their defaults, so they can be shared across tasks.

pub mod batch;
pub mod item;
pub mod lookup;
pub mod parameters;
pub mod search;

mod error;

pub use batch::{Batch, ItemBatcher, MAX_BATCHES, MAX_ITEMS, MAX_ITEMS_PER_BATCH};
pub use error::{Error, Result};
pub use item::ItemId;
pub use lookup::{LookupRequest, LookupRequestBuilder};
pub use parameters::{ParameterBag, Parameters, capitalize};
pub use search::{SearchQuery, SearchRequestBuilder};
