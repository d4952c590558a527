use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent};
use super::layout::AppLayout;
use super::services::Services;
use super::theme;
use super::views::explorer::ExplorerState;
use crate::config::TuiConfig;

const HEADER_TITLE: &str = "Pokédex Explorer";
const HEADER_SUBTITLE: &str = "Discover and explore Pokémon from the PokeAPI";

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Selector, detail panels and cache notice.
    pub explorer: ExplorerState,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    services: Services,
}

impl AppState {
    pub fn new(
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        services: Services,
        config: &TuiConfig,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            explorer: ExplorerState::new(&services, config.stack_below_width),
            event_rx,
            services,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        self.explorer.load(&self.services);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Help modal swallows everything
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                if self.explorer.handle_input(&crossterm_event) {
                    return;
                }

                if let Some(action) = self.map_input_to_action(crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::Action(action) => self.handle_action(action),
            AppEvent::Tick => self.explorer.on_tick(),
            AppEvent::EntriesLoaded(entries) => {
                log::info!("List ready with {} entries", entries.len());
                self.explorer.on_entries_loaded(entries);
            }
            AppEvent::Quit => {
                self.running = false;
            }
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (_, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) => {
                Some(Action::CloseHelp)
            }
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('q')) => Some(Action::Quit),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('?')) => {
                Some(Action::ShowHelp)
            }
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                log::info!("Quit requested");
                self.running = false;
            }
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area, self.explorer.cache_size() > 0);

        self.render_header(frame, layout.header);
        self.explorer.render(frame, &layout);
        self.render_status_bar(frame, layout.status);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(HEADER_TITLE, theme::title())),
            Line::from(Span::styled(HEADER_SUBTITLE, theme::muted())),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode_indicator = if self.explorer.is_filtering() {
            Span::styled(" FILTER ", theme::filter_badge())
        } else {
            Span::raw("")
        };

        let status = Line::from(vec![
            Span::styled(" POKÉDEX ", theme::brand_badge()),
            Span::raw(" "),
            mode_indicator,
            Span::raw(" "),
            Span::styled(
                format!("{} entries", self.explorer.entries().len()),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("j/k", theme::key_hint()),
            Span::raw(":move "),
            Span::styled("Enter", theme::key_hint()),
            Span::raw(":select "),
            Span::styled("/", theme::key_hint()),
            Span::raw(":filter "),
            Span::styled("o", theme::key_hint()),
            Span::raw(":artwork "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 70, area);

        let keybindings = [
            ("Global:", ""),
            ("q", "Quit application"),
            ("?", "Toggle this help"),
            ("Ctrl+C", "Force quit"),
            ("", ""),
            ("Selector:", ""),
            ("j/k or ↓/↑", "Move highlight"),
            ("g / G", "Jump to top / bottom"),
            ("PgUp / PgDn", "Move by ten"),
            ("Enter / l", "Show details"),
            ("/", "Filter by name"),
            ("Esc", "Clear filter"),
            ("", ""),
            ("Details:", ""),
            ("o", "Open artwork in browser"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(
                " Keybindings",
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {key}"),
                    Style::default()
                        .fg(theme::ACCENT)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{key:<16}"),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("  Press "),
            Span::styled("?", theme::key_hint()),
            Span::raw(" or "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(" to close"),
        ]));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;

    use super::*;
    use crate::core::catalog::client::MockCatalogSource;
    use crate::core::catalog::test_support::entries;
    use crate::tui::views::test_render::buffer_text;

    fn app() -> AppState {
        let (tx, rx) = mpsc::unbounded_channel();
        let services = Services::new(Arc::new(MockCatalogSource::new()), tx);
        AppState::new(rx, services, &TuiConfig::default())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> AppEvent {
        AppEvent::Input(Event::Key(KeyEvent::new(code, modifiers)))
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_q_quits() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.running);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_event() {
        let mut app = app();
        app.handle_event(AppEvent::Quit);
        assert!(!app.running);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        app.handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(app.show_help);
        assert!(draw(&app).contains("Keybindings"));

        // 'q' closes the modal rather than quitting.
        app.handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_entries_loaded_event_reaches_explorer() {
        let mut app = app();
        app.handle_event(AppEvent::EntriesLoaded(entries(&["bulbasaur", "ivysaur"])));
        assert!(!app.explorer.is_initial_loading());
        assert_eq!(app.explorer.entries().len(), 2);

        let text = draw(&app);
        assert!(text.contains("Ivysaur"));
        assert!(text.contains("2 entries"));
    }

    #[test]
    fn test_header_always_rendered() {
        let app = app();
        let text = draw(&app);
        assert!(text.contains(HEADER_TITLE));
        assert!(text.contains(HEADER_SUBTITLE));
        assert!(text.contains("Loading Pokémon..."));
    }

    #[test]
    fn test_filter_mode_owns_q() {
        let mut app = app();
        app.handle_event(AppEvent::EntriesLoaded(entries(&["squirtle"])));
        app.handle_event(press(KeyCode::Char('/'), KeyModifiers::NONE));
        app.handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.running);
        assert!(draw(&app).contains("FILTER"));
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = centered_rect(50, 50, area);
        assert!(centered.x > 0);
        assert!(centered.y > 0);
        assert!(centered.x + centered.width <= area.width);
        assert!(centered.y + centered.height <= area.height);
    }
}
