//! Creature catalog: wire types, HTTP source, memoized detail fetching.
//!
//! The list loader runs once; detail records are fetched lazily per name
//! and kept in a [`DetailCache`] for the lifetime of the explorer.

pub mod cache;
pub mod client;
pub mod display;
pub mod error;
pub mod fetcher;
pub mod list;
pub mod types;

pub use cache::DetailCache;
pub use client::{CatalogSource, HttpCatalog};
pub use error::{CatalogError, CatalogResult};
pub use fetcher::{DetailFetcher, FetchOutcome, RequestToken, Selection};
pub use list::load_entries;
pub use types::{Ability, Artwork, DetailRecord, ListEntry, Rating};

#[cfg(test)]
pub(crate) mod test_support;
