//! Fixture records shared by catalog and view tests.

use super::types::{DetailRecord, ListEntry};

pub(crate) const PIKACHU_JSON: &str = include_str!("../../../tests/fixtures/pikachu.json");
pub(crate) const CHARMANDER_JSON: &str = include_str!("../../../tests/fixtures/charmander.json");

pub(crate) fn pikachu() -> DetailRecord {
    serde_json::from_str(PIKACHU_JSON).expect("pikachu fixture decodes")
}

pub(crate) fn charmander() -> DetailRecord {
    serde_json::from_str(CHARMANDER_JSON).expect("charmander fixture decodes")
}

pub(crate) fn entries(names: &[&str]) -> Vec<ListEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            ListEntry::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1))
        })
        .collect()
}
