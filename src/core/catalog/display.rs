//! Text formatting for catalog values.

use super::types::Ability;

/// Upper bound of a named rating; bars are scaled against it.
pub const RATING_MAX: u32 = 255;

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Service slugs use hyphens between words.
pub fn humanize(slug: &str) -> String {
    slug.replace('-', " ")
}

/// `special-attack` → `Special Attack`
pub fn title_case(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn ability_label(ability: &Ability) -> String {
    let label = humanize(&ability.name);
    if ability.hidden {
        format!("{label} (Hidden)")
    } else {
        label
    }
}

/// Height in tenths of a meter, shown to one decimal.
pub fn format_height(tenths: u32) -> String {
    format!("{:.1} m", f64::from(tenths) / 10.0)
}

/// Weight in tenths of a kilogram, shown to one decimal.
pub fn format_weight(tenths: u32) -> String {
    format!("{:.1} kg", f64::from(tenths) / 10.0)
}

/// Fraction of a full bar, clamped to `0.0..=1.0`.
pub fn rating_ratio(value: u32) -> f64 {
    (f64::from(value) / f64::from(RATING_MAX)).min(1.0)
}

pub fn rating_percent(value: u32) -> f64 {
    rating_ratio(value) * 100.0
}

pub fn cache_notice(cached: usize) -> String {
    format!("💾 Cached {cached} Pokémon for faster loading")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("pikachu", "Pikachu")]
    #[case("mr-mime", "Mr-mime")]
    #[case("", "")]
    #[case("éevee", "Éevee")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[rstest]
    #[case("special-attack", "Special Attack")]
    #[case("hp", "Hp")]
    #[case("special-defense", "Special Defense")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
    }

    #[test]
    fn test_ability_labels() {
        let visible = Ability {
            name: "static".to_string(),
            hidden: false,
        };
        let hidden = Ability {
            name: "lightning-rod".to_string(),
            hidden: true,
        };
        assert_eq!(ability_label(&visible), "static");
        assert_eq!(ability_label(&hidden), "lightning rod (Hidden)");
    }

    #[test]
    fn test_every_hyphen_replaced() {
        assert_eq!(humanize("well-baked-body"), "well baked body");
    }

    #[rstest]
    #[case(7, "0.7 m")]
    #[case(4, "0.4 m")]
    #[case(17, "1.7 m")]
    #[case(0, "0.0 m")]
    fn test_format_height(#[case] raw: u32, #[case] expected: &str) {
        assert_eq!(format_height(raw), expected);
    }

    #[rstest]
    #[case(60, "6.0 kg")]
    #[case(9999, "999.9 kg")]
    fn test_format_weight(#[case] raw: u32, #[case] expected: &str) {
        assert_eq!(format_weight(raw), expected);
    }

    #[test]
    fn test_rating_ratio_bounds() {
        assert_eq!(rating_percent(0), 0.0);
        assert_eq!(rating_percent(255), 100.0);
        assert_eq!(rating_percent(300), 100.0);
    }

    #[test]
    fn test_cache_notice() {
        assert_eq!(cache_notice(3), "💾 Cached 3 Pokémon for faster loading");
    }

    proptest! {
        #[test]
        fn prop_rating_ratio_clamped(value in any::<u32>()) {
            let ratio = rating_ratio(value);
            prop_assert!((0.0..=1.0).contains(&ratio));
            if value >= RATING_MAX {
                prop_assert_eq!(ratio, 1.0);
            }
        }

        #[test]
        fn prop_rating_ratio_monotonic(a in 0u32..=255, b in 0u32..=255) {
            if a <= b {
                prop_assert!(rating_ratio(a) <= rating_ratio(b));
            }
        }
    }
}
