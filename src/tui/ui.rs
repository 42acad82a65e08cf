//! Top-level layout: title bar, one of three mutually exclusive panels, and
//! a key-hint line. Which panel shows is a pure function of `App::phase`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::state::{App, Phase};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ConnectPanel, GifGrid, InitPanel, TitleBar};
use crate::wallet::short_pubkey;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hint_area] = layout.areas(frame.area());

    TitleBar {
        address: app.address().map(|a| short_pubkey(&a)),
        status: &app.status_message,
        is_loading: app.is_loading,
        spinner_frame,
    }
    .render(frame, title_area);

    match &app.phase {
        Phase::Disconnected => {
            ConnectPanel {
                connecting: app.is_loading,
            }
            .render(frame, main_area);
            draw_hints(frame, hint_area, "[Enter] connect  [Esc] quit");
        }
        Phase::ConnectedNoAccount => {
            InitPanel {
                initializing: app.is_loading,
            }
            .render(frame, main_area);
            draw_hints(frame, hint_area, "[Enter] initialize  [Ctrl+R] retry fetch  [Esc] quit");
        }
        Phase::ConnectedWithItems(items) => {
            let [grid_area, input_area] = Layout::vertical([Min(0), Length(3)]).areas(main_area);

            GifGrid { items }.render(frame, grid_area, &mut tui.grid);
            tui.input_box.render(frame, input_area);
            draw_hints(
                frame,
                hint_area,
                "[Enter] submit  [↑/↓] browse  [Ctrl+R] refresh  [Esc] quit",
            );
        }
    }
}

fn draw_hints(frame: &mut Frame, area: Rect, hints: &str) {
    let paragraph =
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{test_app, test_session};
    use crate::portal::account::GifItem;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_disconnected_renders_connect_panel() {
        let app = test_app();
        let text = render_to_text(&app);
        assert!(text.contains("Connect to Wallet"));
        assert!(!text.contains("One-Time Initialization"));
        assert!(!text.contains("Enter gif link!"));
    }

    #[test]
    fn test_no_account_renders_initialize_panel() {
        let mut app = test_app();
        update(&mut app, Action::WalletConnected(test_session()));
        update(&mut app, Action::FetchFailed("absent".to_string()));

        let text = render_to_text(&app);
        assert!(text.contains("One-Time Initialization"));
        assert!(!text.contains("Enter gif link!"));
    }

    #[test]
    fn test_empty_snapshot_renders_form_and_empty_grid() {
        let mut app = test_app();
        update(&mut app, Action::WalletConnected(test_session()));
        update(&mut app, Action::ListFetched(Vec::new()));

        let text = render_to_text(&app);
        assert!(text.contains("Enter gif link!"));
        assert!(text.contains("GIF Collection (0)"));
        assert!(!text.contains("One-Time Initialization"));
    }

    #[test]
    fn test_populated_snapshot_renders_items() {
        let mut app = test_app();
        update(&mut app, Action::WalletConnected(test_session()));
        update(
            &mut app,
            Action::ListFetched(vec![GifItem {
                gif_link: "https://media.giphy.com/zoomies.gif".to_string(),
                user_address: [3; 32],
            }]),
        );

        let text = render_to_text(&app);
        assert!(text.contains("https://media.giphy.com/zoomies.gif"));
        assert!(text.contains("GIF Collection (1)"));
    }
}
