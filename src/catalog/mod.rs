//! Product catalog: records, snapshot state, HTTP client and the store that
//! ties them together.

mod client;
mod product;
mod snapshot;
mod store;

pub use client::{CatalogClient, FetchError, ABORTED_MESSAGE, GENERIC_FAILURE_MESSAGE};
pub use product::{format_price, Product, Rating};
pub use snapshot::{CatalogIntent, CatalogItems, CatalogReducer, CatalogSnapshot};
pub use store::ProductStore;
