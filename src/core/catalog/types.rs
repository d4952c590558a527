//! Catalog records and their decoding from the service's JSON shape.
//!
//! The service nests most scalar values one level deep
//! (`abilities[].ability.name`, `types[].type.name`, ...). Records are
//! flattened on decode so the rest of the crate never sees the wire shape.

use serde::{Deserialize, Serialize};

// ── List ────────────────────────────────────────────────────────────────────

/// One named item of the list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub name: String,
    /// Reference locator of the detail resource.
    pub url: String,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Body of the list endpoint. Pagination cursors are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ListPage {
    pub results: Vec<ListEntry>,
}

// ── Detail ──────────────────────────────────────────────────────────────────

/// Full attribute set for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "WireDetail")]
pub struct DetailRecord {
    pub id: u32,
    pub name: String,
    /// Tenths of a meter.
    pub height: u32,
    /// Tenths of a kilogram.
    pub weight: u32,
    pub abilities: Vec<Ability>,
    /// Category tags in service order.
    pub types: Vec<String>,
    pub artwork: Artwork,
    /// Named ratings in service order.
    pub stats: Vec<Rating>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// Named rating. Nominally 0..=255, but kept wide so malformed values
/// survive decoding and clamp at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub name: String,
    pub value: u32,
}

/// Image locators for a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Artwork {
    /// High-resolution official artwork.
    pub official: Option<String>,
    /// Default front sprite.
    pub sprite: Option<String>,
}

impl Artwork {
    /// Official artwork when present, else the default sprite.
    pub fn preferred(&self) -> Option<&str> {
        self.official
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.sprite.as_deref().filter(|s| !s.is_empty()))
    }
}

// ── Wire shape ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WireDetail {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    abilities: Vec<WireAbilitySlot>,
    types: Vec<WireTypeSlot>,
    #[serde(default)]
    sprites: WireSprites,
    stats: Vec<WireStat>,
}

#[derive(Deserialize)]
struct WireNamed {
    name: String,
}

#[derive(Deserialize)]
struct WireAbilitySlot {
    ability: WireNamed,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Deserialize)]
struct WireTypeSlot {
    #[serde(rename = "type")]
    kind: WireNamed,
}

#[derive(Deserialize, Default)]
struct WireSprites {
    #[serde(default)]
    front_default: Option<String>,
    #[serde(default)]
    other: WireOtherSprites,
}

#[derive(Deserialize, Default)]
struct WireOtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<WireFront>,
}

#[derive(Deserialize)]
struct WireFront {
    #[serde(default)]
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct WireStat {
    base_stat: u32,
    stat: WireNamed,
}

impl From<WireDetail> for DetailRecord {
    fn from(wire: WireDetail) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            height: wire.height,
            weight: wire.weight,
            abilities: wire
                .abilities
                .into_iter()
                .map(|slot| Ability {
                    name: slot.ability.name,
                    hidden: slot.is_hidden,
                })
                .collect(),
            types: wire.types.into_iter().map(|slot| slot.kind.name).collect(),
            artwork: Artwork {
                official: wire
                    .sprites
                    .other
                    .official_artwork
                    .and_then(|front| front.front_default),
                sprite: wire.sprites.front_default,
            },
            stats: wire
                .stats
                .into_iter()
                .map(|s| Rating {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::super::test_support::PIKACHU_JSON as PIKACHU;

    #[test]
    fn test_decode_pikachu_fixture() {
        let record: DetailRecord = serde_json::from_str(PIKACHU).unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");
        assert_eq!(record.height, 4);
        assert_eq!(record.weight, 60);
        assert_eq!(record.types, vec!["electric".to_string()]);
        assert_eq!(record.abilities.len(), 2);
        assert_eq!(record.abilities[0].name, "static");
        assert!(!record.abilities[0].hidden);
        assert_eq!(record.abilities[1].name, "lightning-rod");
        assert!(record.abilities[1].hidden);
        let stat_names: Vec<&str> = record.stats.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            stat_names,
            ["hp", "attack", "defense", "special-attack", "special-defense", "speed"]
        );
        assert_eq!(record.stats[5].value, 90);
    }

    #[test]
    fn test_preferred_artwork_is_official() {
        let record: DetailRecord = serde_json::from_str(PIKACHU).unwrap();
        assert!(record
            .artwork
            .preferred()
            .unwrap()
            .ends_with("official-artwork/25.png"));
    }

    #[test]
    fn test_artwork_falls_back_to_sprite() {
        let json = r#"{
            "id": 1, "name": "x", "height": 1, "weight": 1,
            "abilities": [], "types": [], "stats": [],
            "sprites": {
                "front_default": "https://img/1.png",
                "other": { "official-artwork": { "front_default": null } }
            }
        }"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.artwork.official, None);
        assert_eq!(record.artwork.preferred(), Some("https://img/1.png"));
    }

    #[test]
    fn test_missing_sprites_tolerated() {
        let json = r#"{
            "id": 1, "name": "x", "height": 1, "weight": 1,
            "abilities": [], "types": [], "stats": []
        }"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.artwork, Artwork::default());
        assert_eq!(record.artwork.preferred(), None);
    }

    #[test]
    fn test_out_of_range_stat_survives_decode() {
        let json = r#"{
            "id": 1, "name": "x", "height": 1, "weight": 1,
            "abilities": [], "types": [],
            "stats": [{ "base_stat": 300, "stat": { "name": "hp" } }]
        }"#;
        let record: DetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.stats[0].value, 300);
    }

    #[test]
    fn test_missing_required_field_is_error() {
        let json = r#"{ "id": 1, "name": "x" }"#;
        assert!(serde_json::from_str::<DetailRecord>(json).is_err());
    }

    #[test]
    fn test_decode_list_page_preserves_order() {
        let json = r#"{
            "count": 1302, "next": "https://x/?offset=3", "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://x/1/" },
                { "name": "ivysaur", "url": "https://x/2/" },
                { "name": "venusaur", "url": "https://x/3/" }
            ]
        }"#;
        let page: ListPage = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = page.results.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["bulbasaur", "ivysaur", "venusaur"]);
    }
}
