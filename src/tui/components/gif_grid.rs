//! # GifGrid Component
//!
//! Scrollable view of the fetched snapshot. Items are identified by their
//! index in the snapshot - the selection survives a refresh by clamping to
//! the new length rather than pointing at stale content.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::portal::account::GifItem;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Selection and scroll state, persistent across renders.
pub struct GifGridState {
    pub selected: Option<usize>,
    list_state: ListState,
}

impl GifGridState {
    pub fn new() -> Self {
        Self {
            selected: None,
            list_state: ListState::default(),
        }
    }

    /// Keeps the selection valid after a snapshot replacement.
    pub fn clamp_to(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }

    fn move_selection(&mut self, delta: i64, len: usize) {
        if len == 0 {
            self.selected = None;
            return;
        }
        let next = match self.selected {
            // First movement lands on the top item.
            None => 0,
            Some(i) => (i as i64 + delta).clamp(0, len as i64 - 1) as usize,
        };
        self.selected = Some(next);
    }
}

impl Default for GifGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for GifGridState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        // Movement needs the item count, which is a render-time prop; the
        // caller follows up with clamp_to().
        match event {
            TuiEvent::ScrollUp => {
                self.move_selection(-1, usize::MAX);
                Some(())
            }
            TuiEvent::ScrollDown => {
                self.move_selection(1, usize::MAX);
                Some(())
            }
            _ => None,
        }
    }
}

/// Stateless renderer over the current snapshot.
pub struct GifGrid<'a> {
    pub items: &'a [GifItem],
}

impl GifGrid<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut GifGridState) {
        state.clamp_to(self.items.len());

        let title = format!(" GIF Collection ({}) ", self.items.len());
        let block = Block::bordered().title(title);

        if self.items.is_empty() {
            let empty = List::new([ListItem::new(Line::from(Span::styled(
                "Nothing here yet - submit the first link!",
                Style::default().fg(Color::DarkGray),
            )))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!("{index:>3}  "), Style::default().fg(Color::DarkGray)),
                        Span::styled(item.gif_link.clone(), Style::default().fg(Color::Cyan)),
                    ]),
                    Line::from(Span::styled(
                        format!("     submitted by {}", item.short_address()),
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        state.list_state.select(state.selected);
        frame.render_stateful_widget(list, area, &mut state.list_state);
    }
}
