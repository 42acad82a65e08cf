//! # Initialize Panel Component
//!
//! Shown when the session is connected but the list account does not exist
//! yet (or could not be read). One action: run the one-time initialization.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct InitPanel {
    pub initializing: bool,
}

impl Component for InitPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt = if self.initializing {
            Line::from(Span::styled(
                "Initializing...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::styled(
                "[Enter] Do One-Time Initialization For GIF Program Account",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        };

        let lines = vec![
            Line::from(Span::styled(
                "No list account found on this cluster.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            prompt,
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_shows_initialize_prompt() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                InitPanel { initializing: false }.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer.content().iter().map(|c| c.symbol()).collect::<String>();
        assert!(text.contains("One-Time Initialization"));
    }
}
