//! Catalog explorer: selector, detail panels, cache notice.
//!
//! Owns the list loaded at startup, the current selection, and the
//! [`DetailFetcher`] with its cache. The list arrives as an
//! [`AppEvent::EntriesLoaded`]; detail responses arrive on the fetcher's own
//! channel and are drained on every tick.

use std::sync::Arc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::core::catalog::display::{cache_notice, capitalize};
use crate::core::catalog::{
    load_entries, DetailFetcher, DetailRecord, FetchOutcome, ListEntry, Selection,
};
use crate::tui::events::AppEvent;
use crate::tui::layout::{split_detail, AppLayout};
use crate::tui::services::Services;
use crate::tui::theme::{self, TypePalette};
use crate::tui::widgets::filter::FilterQuery;
use crate::tui::widgets::spinner::Spinner;

use super::detail::{render_basic, render_secondary, BasicPanel, SecondaryPanel};

const PAGE_STEP: usize = 10;

/// Presenter-visible lifecycle of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// List retrieval outstanding.
    Init,
    /// List present, nothing displayed yet.
    ListReady,
    /// The current selection's detail request is outstanding.
    DetailLoading,
    /// A detail record is displayed.
    DetailReady,
}

pub struct ExplorerState {
    initial_loading: bool,
    list_requested: bool,
    entries: Vec<ListEntry>,
    /// Indices into `entries` passing the filter, in list order.
    visible: Vec<usize>,
    /// Position within `visible`.
    cursor: usize,
    filter: FilterQuery,
    filter_mode: bool,
    selected: Option<String>,
    detail: Option<Arc<DetailRecord>>,
    fetcher: DetailFetcher,
    palette: TypePalette,
    spinner: Spinner,
    stack_below_width: u16,
}

impl ExplorerState {
    pub fn new(services: &Services, stack_below_width: u16) -> Self {
        Self {
            initial_loading: true,
            list_requested: false,
            entries: Vec::new(),
            visible: Vec::new(),
            cursor: 0,
            filter: FilterQuery::new(),
            filter_mode: false,
            selected: None,
            detail: None,
            fetcher: DetailFetcher::new(Arc::clone(&services.catalog)),
            palette: TypePalette::standard(),
            spinner: Spinner::new(),
            stack_below_width,
        }
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Start the one-shot list retrieval. Later calls are no-ops.
    pub fn load(&mut self, services: &Services) {
        if self.list_requested {
            return;
        }
        self.list_requested = true;

        let catalog = Arc::clone(&services.catalog);
        let tx = services.event_tx.clone();
        tokio::spawn(async move {
            let entries = load_entries(catalog.as_ref()).await;
            let _ = tx.send(AppEvent::EntriesLoaded(entries));
        });
    }

    /// Install the list. Only the first delivery counts.
    pub fn on_entries_loaded(&mut self, entries: Vec<ListEntry>) {
        if !self.initial_loading {
            log::warn!("Ignoring repeated list delivery ({} entries)", entries.len());
            return;
        }
        self.initial_loading = false;
        self.entries = entries;
        self.refresh_visible();
    }

    /// Advance the spinner and apply finished detail requests.
    pub fn on_tick(&mut self) {
        self.spinner.advance();
        self.poll();
    }

    pub fn poll(&mut self) {
        for outcome in self.fetcher.poll() {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Ready(record) => self.detail = Some(record),
            // Logged by the fetcher; the previous record stays on screen.
            FetchOutcome::Failed { .. } | FetchOutcome::Stale { .. } => {}
        }
    }

    /// Select an entry by name and show its detail record.
    /// Names outside the loaded list are ignored.
    pub fn select(&mut self, name: &str) {
        if !self.entries.iter().any(|e| e.name == name) {
            log::warn!("Ignoring selection of unknown entry {name}");
            return;
        }

        self.selected = Some(name.to_string());
        if let Selection::Cached(record) = self.fetcher.select(name) {
            self.detail = Some(record);
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        if self.initial_loading {
            Phase::Init
        } else if self.fetcher.is_loading() {
            Phase::DetailLoading
        } else if self.detail.is_some() {
            Phase::DetailReady
        } else {
            Phase::ListReady
        }
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn is_detail_loading(&self) -> bool {
        self.fetcher.is_loading()
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn detail(&self) -> Option<&Arc<DetailRecord>> {
        self.detail.as_ref()
    }

    pub fn cache_size(&self) -> usize {
        self.fetcher.cache().len()
    }

    pub fn is_filtering(&self) -> bool {
        self.filter_mode
    }

    /// Names currently shown in the selector.
    pub fn visible_names(&self) -> impl Iterator<Item = &str> {
        self.visible.iter().map(|&i| self.entries[i].name.as_str())
    }

    fn highlighted(&self) -> Option<&ListEntry> {
        self.visible.get(self.cursor).map(|&i| &self.entries[i])
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return false;
        };

        if self.initial_loading {
            return false;
        }

        if self.filter_mode {
            return self.handle_filter_input(*modifiers, *code);
        }

        match (*modifiers, *code) {
            (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
                self.move_cursor(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
                self.move_cursor(-1);
                true
            }
            (KeyModifiers::NONE, KeyCode::PageDown) => {
                self.move_cursor(PAGE_STEP as isize);
                true
            }
            (KeyModifiers::NONE, KeyCode::PageUp) => {
                self.move_cursor(-(PAGE_STEP as isize));
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
                self.cursor = 0;
                true
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G'))
            | (KeyModifiers::NONE, KeyCode::End) => {
                self.cursor = self.visible.len().saturating_sub(1);
                true
            }
            (KeyModifiers::NONE, KeyCode::Enter | KeyCode::Char('l')) => {
                self.select_highlighted();
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('/')) => {
                self.filter_mode = true;
                true
            }
            (KeyModifiers::NONE, KeyCode::Char('o')) => {
                self.open_artwork();
                true
            }
            (KeyModifiers::NONE, KeyCode::Esc) if !self.filter.is_empty() => {
                self.filter.clear();
                self.refresh_visible();
                true
            }
            _ => false,
        }
    }

    fn handle_filter_input(&mut self, modifiers: KeyModifiers, code: KeyCode) -> bool {
        match (modifiers, code) {
            (_, KeyCode::Esc) => {
                self.filter_mode = false;
                self.filter.clear();
                self.refresh_visible();
                true
            }
            (_, KeyCode::Enter) => {
                self.filter_mode = false;
                self.select_highlighted();
                true
            }
            (_, KeyCode::Backspace) => {
                self.filter.pop();
                self.refresh_visible();
                true
            }
            (_, KeyCode::Down) => {
                self.move_cursor(1);
                true
            }
            (_, KeyCode::Up) => {
                self.move_cursor(-1);
                true
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.filter.push(c);
                self.refresh_visible();
                true
            }
            _ => false,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    fn refresh_visible(&mut self) {
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.filter.matches(&entry.name))
            .map(|(i, _)| i)
            .collect();
        self.cursor = self.cursor.min(self.visible.len().saturating_sub(1));
    }

    fn select_highlighted(&mut self) {
        if let Some(name) = self.highlighted().map(|e| e.name.clone()) {
            self.select(&name);
        }
    }

    fn open_artwork(&self) {
        let Some(url) = self.detail.as_ref().and_then(|d| d.artwork.preferred()) else {
            return;
        };
        if let Err(e) = open::that_detached(url) {
            log::error!("Failed to open artwork {url}: {e}");
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, layout: &AppLayout) {
        if self.initial_loading {
            let body = layout.selector.union(layout.detail);
            self.render_spinner(frame, body, "Loading Pokémon...");
            return;
        }

        self.render_selector(frame, layout.selector);

        if self.fetcher.is_loading() {
            let block = theme::card("Details");
            let inner = block.inner(layout.detail);
            frame.render_widget(block, layout.detail);
            self.render_spinner(frame, inner, "Loading Pokémon details...");
        } else if let Some(ref record) = self.detail {
            let (basic_area, secondary_area) = split_detail(layout.detail, self.stack_below_width);
            render_basic(
                frame,
                basic_area,
                &BasicPanel::from_record(record, &self.palette),
                &self.palette,
            );
            render_secondary(frame, secondary_area, &SecondaryPanel::from_record(record));
        }

        if let Some(footer) = layout.footer {
            self.render_cache_notice(frame, footer);
        }
    }

    fn render_spinner(&self, frame: &mut Frame, area: Rect, message: &str) {
        let rows = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .split(area);

        let line = Line::from(vec![
            Span::styled(self.spinner.symbol(), theme::title()),
            Span::raw(" "),
            Span::styled(message, theme::muted()),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[1]);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect) {
        let block = if self.filter_mode {
            theme::card_focused("Select a Pokémon")
        } else {
            theme::card("Select a Pokémon")
        };
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

        // Trigger line: current selection or placeholder.
        let trigger = match self.selected {
            Some(ref name) => Line::from(Span::styled(capitalize(name), theme::selected())),
            None => Line::from(Span::styled("Choose a Pokémon to explore...", theme::muted())),
        };
        frame.render_widget(Paragraph::new(trigger), rows[0]);

        let filter_line = if self.filter_mode || !self.filter.is_empty() {
            Line::from(vec![
                Span::styled(" / ", theme::filter_badge()),
                Span::raw(" "),
                Span::raw(self.filter.text()),
                Span::styled(if self.filter_mode { "▏" } else { "" }, theme::key_hint()),
            ])
        } else {
            Line::raw("")
        };
        frame.render_widget(Paragraph::new(filter_line), rows[1]);

        if self.visible.is_empty() {
            let message = if self.entries.is_empty() {
                "No Pokémon available"
            } else {
                "No matches"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(message, theme::muted())),
                rows[2],
            );
            return;
        }

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&i| {
                let name = &self.entries[i].name;
                let style = if self.selected.as_deref() == Some(name.as_str()) {
                    theme::selected()
                } else {
                    ratatui::style::Style::default().fg(theme::TEXT)
                };
                ListItem::new(Line::from(Span::styled(capitalize(name), style)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(theme::highlight())
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, rows[2], &mut state);
    }

    fn render_cache_notice(&self, frame: &mut Frame, area: Rect) {
        let block = theme::card("");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Span::styled(cache_notice(self.cache_size()), theme::muted()))
                .alignment(Alignment::Center),
            inner,
        );
    }
}
