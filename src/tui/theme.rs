//! Centralized Pokédex red & gold color theme.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Pokédex red: titles and focused borders.
pub const PRIMARY: Color = Color::Rgb(0xE3, 0x35, 0x0D);
/// Light red: selection highlight background.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0xFF, 0x6B, 0x4A);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Gold: rating bars and key hints.
pub const ACCENT: Color = Color::Rgb(0xFF, 0xCB, 0x05);
/// Royal blue: hidden abilities.
pub const ACCENT_ALT: Color = Color::Rgb(0x3B, 0x4C, 0xCA);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Charcoal: base background.
pub const BG_BASE: Color = Color::Rgb(0x1A, 0x1A, 0x1E);
/// Track behind a rating bar.
pub const BG_TRACK: Color = Color::Rgb(0x33, 0x33, 0x3A);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);
/// Text drawn on top of a type badge.
pub const TEXT_ON_BADGE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent-colored bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Field label ("Height:", "Types:").
pub fn label() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Highlighted selector row.
pub fn highlight() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// The committed selection, when the cursor is elsewhere.
pub fn selected() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(ACCENT)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Filter-mode badge.
pub fn filter_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Ability badge; hidden abilities are filled and italic.
pub fn ability_badge(hidden: bool) -> Style {
    if hidden {
        Style::default()
            .fg(TEXT_ON_BADGE)
            .bg(ACCENT_ALT)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
    }
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A rounded card with a title, the terminal stand-in for a card component.
pub fn card(title: &str) -> Block<'_> {
    card_with_title(Line::styled(format!(" {title} "), self::title()))
}

/// Card with a pre-styled title line.
pub fn card_with_title(title: Line<'_>) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(TEXT_DIM))
}

/// Card whose border marks keyboard focus.
pub fn card_focused(title: &str) -> Block<'_> {
    card(title).border_style(Style::default().fg(PRIMARY))
}

// ── Category colors ─────────────────────────────────────────────────────────

/// Badge color for category names missing from the palette.
pub const TYPE_DEFAULT: Color = Color::Rgb(0x9C, 0xA3, 0xAF);

/// Immutable category name → badge color mapping.
#[derive(Debug, Clone)]
pub struct TypePalette {
    entries: &'static [(&'static str, Color)],
    fallback: Color,
}

static STANDARD_TYPES: [(&str, Color); 18] = [
    ("normal", Color::Rgb(0x9C, 0xA3, 0xAF)),
    ("fire", Color::Rgb(0xEF, 0x44, 0x44)),
    ("water", Color::Rgb(0x3B, 0x82, 0xF6)),
    ("electric", Color::Rgb(0xFA, 0xCC, 0x15)),
    ("grass", Color::Rgb(0x22, 0xC5, 0x5E)),
    ("ice", Color::Rgb(0xBF, 0xDB, 0xFE)),
    ("fighting", Color::Rgb(0xB9, 0x1C, 0x1C)),
    ("poison", Color::Rgb(0xA8, 0x55, 0xF7)),
    ("ground", Color::Rgb(0xCA, 0x8A, 0x04)),
    ("flying", Color::Rgb(0x81, 0x8C, 0xF8)),
    ("psychic", Color::Rgb(0xEC, 0x48, 0x99)),
    ("bug", Color::Rgb(0x4A, 0xDE, 0x80)),
    ("rock", Color::Rgb(0x85, 0x4D, 0x0E)),
    ("ghost", Color::Rgb(0x7E, 0x22, 0xCE)),
    ("dragon", Color::Rgb(0x43, 0x38, 0xCA)),
    ("dark", Color::Rgb(0x1F, 0x29, 0x37)),
    ("steel", Color::Rgb(0x6B, 0x72, 0x80)),
    ("fairy", Color::Rgb(0xF9, 0xA8, 0xD4)),
];

impl TypePalette {
    /// The eighteen standard categories.
    pub fn standard() -> Self {
        Self {
            entries: &STANDARD_TYPES,
            fallback: TYPE_DEFAULT,
        }
    }

    pub fn color_for(&self, category: &str) -> Color {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map_or(self.fallback, |(_, color)| *color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Badge style for a category tag.
    pub fn badge(&self, category: &str) -> Style {
        Style::default()
            .fg(TEXT_ON_BADGE)
            .bg(self.color_for(category))
            .add_modifier(Modifier::BOLD)
    }
}
