//! Proportional rating bar widget for ratatui.
//!
//! Fills `min(value / 255, 1)` of the available width with a solid block and
//! draws the remainder as a dim track.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::core::catalog::display::rating_ratio;
use crate::tui::theme;

const FILLED: &str = "█";
const TRACK: &str = "░";

#[derive(Debug, Clone, Copy)]
pub struct StatBar {
    ratio: f64,
    filled_style: Style,
    track_style: Style,
}

impl StatBar {
    pub fn new(value: u32) -> Self {
        Self {
            ratio: rating_ratio(value),
            filled_style: Style::default().fg(theme::ACCENT),
            track_style: Style::default().fg(theme::BG_TRACK),
        }
    }

    /// Number of filled cells for a bar `width` cells wide.
    pub fn filled_cells(&self, width: u16) -> u16 {
        let cells = (self.ratio * f64::from(width)).round();
        (cells as u16).min(width)
    }
}

impl Widget for StatBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let filled = self.filled_cells(area.width);
        for offset in 0..area.width {
            let (symbol, style) = if offset < filled {
                (FILLED, self.filled_style)
            } else {
                (TRACK, self.track_style)
            };
            buf[(area.x + offset, area.y)]
                .set_symbol(symbol)
                .set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(value: u32, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        StatBar::new(value).render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(StatBar::new(0).filled_cells(20), 0);
        assert_eq!(rendered(0, 4), "░░░░");
    }

    #[test]
    fn test_max_is_full() {
        assert_eq!(StatBar::new(255).filled_cells(20), 20);
        assert_eq!(rendered(255, 4), "████");
    }

    #[test]
    fn test_overflow_clamps_to_full() {
        assert_eq!(StatBar::new(300).filled_cells(20), 20);
    }

    #[test]
    fn test_half_bar() {
        // 128 / 255 ≈ 0.502
        assert_eq!(StatBar::new(128).filled_cells(10), 5);
        assert_eq!(rendered(128, 10), "█████░░░░░");
    }

    #[test]
    fn test_zero_width_area_is_noop() {
        let area = Rect::new(0, 0, 0, 1);
        let mut buf = Buffer::empty(Rect::new(0, 0, 1, 1));
        StatBar::new(100).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
