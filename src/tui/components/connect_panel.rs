//! # Connect Panel Component
//!
//! The disconnected landing view: header, tagline, and the connect prompt.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct ConnectPanel {
    /// Dim the prompt while a connect attempt is in flight.
    pub connecting: bool,
}

impl Component for ConnectPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let prompt_style = if self.connecting {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        };
        let prompt = if self.connecting {
            "Connecting..."
        } else {
            "[Enter] Connect to Wallet"
        };

        let lines = vec![
            Line::from(Span::styled(
                "🖼 GIF Portal",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "View your GIF collection in the metaverse ✨",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(prompt, prompt_style)),
        ];

        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}
