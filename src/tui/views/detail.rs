//! Detail panels: basic info (artwork, measurements, types) and
//! secondary info (abilities, rating bars).
//!
//! Panels are built as plain view models from a [`DetailRecord`] first, so
//! the formatting can be checked without a terminal, then drawn.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::core::catalog::display::{
    ability_label, capitalize, format_height, format_weight, rating_percent, title_case,
};
use crate::core::catalog::DetailRecord;
use crate::tui::theme::{self, TypePalette};
use crate::tui::widgets::stat_bar::StatBar;

/// Width reserved for rating labels ("Special Defense:").
const RATING_LABEL_WIDTH: u16 = 17;
/// Width reserved for the numeric rating value.
const RATING_VALUE_WIDTH: u16 = 4;

// ── View models ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TypeBadge {
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicPanel {
    pub title: String,
    pub number: String,
    pub artwork: Option<String>,
    pub height: String,
    pub weight: String,
    pub types: Vec<TypeBadge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityBadge {
    pub label: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub label: String,
    pub value: u32,
    /// Bar width in percent, clamped to 100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryPanel {
    pub abilities: Vec<AbilityBadge>,
    pub ratings: Vec<RatingRow>,
}

impl BasicPanel {
    pub fn from_record(record: &DetailRecord, palette: &TypePalette) -> Self {
        Self {
            title: capitalize(&record.name),
            number: format!("#{}", record.id),
            artwork: record.artwork.preferred().map(str::to_string),
            height: format_height(record.height),
            weight: format_weight(record.weight),
            types: record
                .types
                .iter()
                .map(|name| TypeBadge {
                    label: name.clone(),
                    color: palette.color_for(name),
                })
                .collect(),
        }
    }
}

impl SecondaryPanel {
    /// Ratings keep the record's order.
    pub fn from_record(record: &DetailRecord) -> Self {
        Self {
            abilities: record
                .abilities
                .iter()
                .map(|ability| AbilityBadge {
                    label: ability_label(ability),
                    hidden: ability.hidden,
                })
                .collect(),
            ratings: record
                .stats
                .iter()
                .map(|stat| RatingRow {
                    label: title_case(&stat.name),
                    value: stat.value,
                    percent: rating_percent(stat.value),
                })
                .collect(),
        }
    }
}

// ── Rendering ───────────────────────────────────────────────────────────────

pub fn render_basic(frame: &mut Frame, area: Rect, panel: &BasicPanel, palette: &TypePalette) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", panel.title), theme::title()),
        Span::styled(format!("{} ", panel.number), theme::muted()),
    ]);
    let block = theme::card_with_title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let artwork = match panel.artwork {
        Some(ref url) => Span::styled(url.as_str(), Style::default().fg(theme::TEXT)),
        None => Span::styled("no artwork", theme::muted()),
    };

    let mut badges = Vec::with_capacity(panel.types.len() * 2);
    for badge in &panel.types {
        badges.push(Span::styled(
            format!(" {} ", badge.label),
            palette.badge(&badge.label),
        ));
        badges.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(Span::styled("Artwork:", theme::label())),
        Line::from(artwork),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Height: ", theme::label()),
            Span::styled(panel.height.as_str(), theme::muted()),
            Span::raw("    "),
            Span::styled("Weight: ", theme::label()),
            Span::styled(panel.weight.as_str(), theme::muted()),
        ]),
        Line::raw(""),
        Line::from(Span::styled("Types:", theme::label())),
        Line::from(badges),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

pub fn render_secondary(frame: &mut Frame, area: Rect, panel: &SecondaryPanel) {
    let block = theme::card("Abilities & Stats");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(inner);

    let mut badges = Vec::with_capacity(panel.abilities.len() * 2);
    for badge in &panel.abilities {
        badges.push(Span::styled(
            format!(" {} ", badge.label),
            theme::ability_badge(badge.hidden),
        ));
        badges.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Abilities:", theme::label())),
            Line::from(badges),
        ])
        .wrap(Wrap { trim: false }),
        sections[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("Base Stats:", theme::label()))),
        sections[1],
    );

    let rows = Layout::vertical(vec![Constraint::Length(1); panel.ratings.len()])
        .split(sections[2]);
    for (rating, row) in panel.ratings.iter().zip(rows.iter()) {
        render_rating(frame, *row, rating);
    }
}

fn render_rating(frame: &mut Frame, area: Rect, rating: &RatingRow) {
    let cols = Layout::horizontal([
        Constraint::Length(RATING_LABEL_WIDTH),
        Constraint::Min(1),
        Constraint::Length(RATING_VALUE_WIDTH),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(format!("{}:", rating.label), theme::muted())),
        cols[0],
    );
    frame.render_widget(StatBar::new(rating.value), cols[1]);
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", rating.value), theme::label())),
        cols[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::test_support::{charmander, pikachu};

    #[test]
    fn test_basic_panel_for_pikachu() {
        let palette = TypePalette::standard();
        let panel = BasicPanel::from_record(&pikachu(), &palette);
        assert_eq!(panel.title, "Pikachu");
        assert_eq!(panel.number, "#25");
        assert_eq!(panel.height, "0.4 m");
        assert_eq!(panel.weight, "6.0 kg");
        assert_eq!(
            panel.types,
            vec![TypeBadge {
                label: "electric".to_string(),
                color: palette.color_for("electric"),
            }]
        );
        assert!(panel
            .artwork
            .as_deref()
            .is_some_and(|url| url.ends_with("official-artwork/25.png")));
    }

    #[test]
    fn test_basic_panel_falls_back_to_sprite() {
        let mut record = charmander();
        record.artwork.official = None;
        let panel = BasicPanel::from_record(&record, &TypePalette::standard());
        assert!(panel
            .artwork
            .as_deref()
            .is_some_and(|url| url.ends_with("/4.png")));
    }

    #[test]
    fn test_secondary_panel_abilities() {
        let panel = SecondaryPanel::from_record(&pikachu());
        assert_eq!(
            panel.abilities,
            vec![
                AbilityBadge {
                    label: "static".to_string(),
                    hidden: false,
                },
                AbilityBadge {
                    label: "lightning rod (Hidden)".to_string(),
                    hidden: true,
                },
            ]
        );
    }

    #[test]
    fn test_secondary_panel_keeps_rating_order() {
        let panel = SecondaryPanel::from_record(&pikachu());
        let labels: Vec<&str> = panel.ratings.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Hp", "Attack", "Defense", "Special Attack", "Special Defense", "Speed"]
        );
        let speed = &panel.ratings[5];
        assert_eq!(speed.value, 90);
        assert!((speed.percent - 90.0 / 255.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rating_percent_clamps() {
        let mut record = pikachu();
        record.stats[0].value = 300;
        record.stats[1].value = 0;
        record.stats[2].value = 255;
        let panel = SecondaryPanel::from_record(&record);
        assert_eq!(panel.ratings[0].percent, 100.0);
        assert_eq!(panel.ratings[1].percent, 0.0);
        assert_eq!(panel.ratings[2].percent, 100.0);
    }
}
