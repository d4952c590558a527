//! Root layout: header, selector, detail area, cache footer, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows (title + subtitle).
pub const HEADER_HEIGHT: u16 = 2;
/// Preferred selector width.
pub const SELECTOR_WIDTH: u16 = 28;
/// Cache notice card height.
pub const FOOTER_HEIGHT: u16 = 3;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Selector card.
    pub selector: Rect,
    /// Detail spinner or panels.
    pub detail: Rect,
    /// Cache notice (None while the cache is empty).
    pub footer: Option<Rect>,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    /// Compute layout regions from the terminal area.
    pub fn compute(area: Rect, show_footer: bool) -> Self {
        let footer_height = if show_footer { FOOTER_HEIGHT } else { 0 };

        let rows = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .split(area);

        // Selector never takes more than half of a narrow terminal.
        let selector_width = SELECTOR_WIDTH.min(rows[1].width / 2);
        let cols = Layout::horizontal([Constraint::Length(selector_width), Constraint::Min(1)])
            .split(rows[1]);

        AppLayout {
            header: rows[0],
            selector: cols[0],
            detail: cols[1],
            footer: show_footer.then_some(rows[2]),
            status: rows[3],
        }
    }
}

/// Split the detail area into the basic and secondary panels: side by side,
/// or stacked when `area` is narrower than `stack_below_width`.
pub fn split_detail(area: Rect, stack_below_width: u16) -> (Rect, Rect) {
    let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let parts = if area.width < stack_below_width {
        Layout::vertical(halves).split(area)
    } else {
        Layout::horizontal(halves).split(area)
    };
    (parts[0], parts[1])
}
