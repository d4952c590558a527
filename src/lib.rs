/// Pokédex Explorer - terminal viewer for the PokeAPI creature catalog.
///
/// Core library providing the catalog client, the memoized detail
/// fetcher, and the ratatui presenter that ties them together.

pub mod config;
pub mod core;
pub mod tui;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
