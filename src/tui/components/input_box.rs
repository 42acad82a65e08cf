//! # InputBox Component
//!
//! Single-line text entry for the submission form.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing and bracketed paste)
//! - Handle editing (backspace, cursor movement)
//! - Handle submission (Enter)
//!
//! The buffer is internal state. A submit with nothing but whitespace emits
//! no event and leaves the buffer untouched; a real submit hands the text to
//! the parent and clears the field immediately.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// User submitted the text (Enter pressed)
    Submit(String),
    /// Text content changed (optional, if parent needs to know)
    ContentChanged,
}

pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor byte offset into `buffer`
    cursor: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn prev_char_boundary(&self) -> usize {
        self.buffer[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_char_boundary(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.buffer.len())
    }

    /// Visible slice and cursor column for a given inner width, scrolling
    /// horizontally so the cursor stays in view.
    fn visible(&self, inner_width: u16) -> (&str, u16) {
        let inner_width = inner_width as usize;
        if inner_width == 0 {
            return ("", 0);
        }
        let cursor_col = self.buffer[..self.cursor].width();
        if cursor_col < inner_width {
            return (&self.buffer, cursor_col as u16);
        }

        // Drop leading chars until the cursor fits on the last column.
        let mut start = 0;
        let mut dropped = 0;
        for (i, c) in self.buffer.char_indices() {
            if cursor_col - dropped < inner_width {
                break;
            }
            start = i + c.len_utf8();
            dropped += c.width().unwrap_or(0);
        }
        (&self.buffer[start..], (cursor_col - dropped) as u16)
    }
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2);
        let (visible, cursor_col) = self.visible(inner_width);

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .title("Enter gif link!");
        let input = Paragraph::new(visible)
            .block(block)
            .style(Style::default().fg(Color::Green));

        frame.render_widget(input, area);
        frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Links are single-line; drop pasted newlines.
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = self.prev_char_boundary();
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    self.cursor = self.prev_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    self.cursor = self.next_char_boundary();
                    Some(InputEvent::ContentChanged)
                } else {
                    None
                }
            }
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                InputEvent::ContentChanged
            }),
            TuiEvent::Submit => {
                if !self.buffer.trim().is_empty() {
                    let text = std::mem::take(&mut self.buffer);
                    self.cursor = 0;
                    Some(InputEvent::Submit(text))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert!(input.is_empty());
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");

        let res = input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn test_submit_clears_buffer() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("https://giphy.com/a.gif".to_string()));

        let res = input.handle_event(&TuiEvent::Submit);
        match res {
            Some(InputEvent::Submit(text)) => assert_eq!(text, "https://giphy.com/a.gif"),
            _ => panic!("Expected Submit event"),
        }

        assert!(input.buffer.is_empty(), "Buffer should be cleared after submit");
    }

    #[test]
    fn test_empty_submit_emits_nothing_and_keeps_buffer() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::InputChar(' '));

        let res = input.handle_event(&TuiEvent::Submit);
        assert_eq!(res, None);
        assert_eq!(input.buffer, " ");
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("https://a.gif\nhttps://b.gif".to_string()));
        assert_eq!(input.buffer, "https://a.gifhttps://b.gif");
    }

    #[test]
    fn test_cursor_editing_mid_buffer() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("ac".to_string()));
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "abc");

        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::CursorRight);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "bc");
    }

    #[test]
    fn test_long_buffer_scrolls_cursor_into_view() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("x".repeat(50)));

        let (visible, cursor_col) = input.visible(10);
        assert!(cursor_col < 10);
        assert!(visible.len() < 50);
    }

    #[test]
    fn test_render_shows_title() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBox::new();
        terminal
            .draw(|f| {
                input.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("Enter gif link!"));
    }
}
