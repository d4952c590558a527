pub mod filter;
pub mod spinner;
pub mod stat_bar;
