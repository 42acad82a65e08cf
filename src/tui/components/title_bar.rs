//! # TitleBar Component
//!
//! One-line header: app name, connected address, spinner, status text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct TitleBar<'a> {
    pub address: Option<String>,
    pub status: &'a str,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "GIF Portal",
            Style::default().fg(Color::Magenta),
        )];

        if let Some(address) = &self.address {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(address.clone(), Style::default().fg(Color::Cyan)));
        }

        if self.is_loading {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]));
        }

        if !self.status.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status.to_string(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_renders_status_and_address() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                TitleBar {
                    address: Some("3nFg..9iKp".to_string()),
                    status: "2 item(s)",
                    is_loading: false,
                    spinner_frame: 0,
                }
                .render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("GIF Portal"));
        assert!(text.contains("3nFg..9iKp"));
        assert!(text.contains("2 item(s)"));
    }
}
