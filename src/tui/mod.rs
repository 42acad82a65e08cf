//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Loading** (a remote call in flight): draws every ~80ms so the spinner
//!   animates.
//! - **Idle**: sleeps up to 250ms, only redraws on events, background
//!   actions, or terminal resize.
//!
//! Remote calls never run on this thread. Each `Effect` spawns a background
//! task that reports back as an `Action` over an `mpsc` channel; the loop
//! drains the channel between input polls.

mod component;
mod components;
mod event;
mod ui;

use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use log::{debug, info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Phase};
use crate::portal::client::PortalClient;
use crate::tui::component::EventHandler;
use crate::tui::components::{GifGridState, InputBox, InputEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::wallet::authority::{AuthoritySource, FileAuthority};
use crate::wallet::file::FileWallet;
use crate::wallet::{WalletError, WalletProvider};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub grid: GifGridState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            grid: GifGridState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let wallet: Arc<dyn WalletProvider> = Arc::new(FileWallet::new(
        config.wallet_keypair.clone(),
        config.data_dir.clone(),
    ));
    let authority: Arc<dyn AuthoritySource> =
        Arc::new(FileAuthority::new(config.authority_keypair.clone()));
    run_with(config, wallet, authority)
}

pub fn run_with(
    config: ResolvedConfig,
    wallet: Arc<dyn WalletProvider>,
    authority: Arc<dyn AuthoritySource>,
) -> std::io::Result<()> {
    let mut app = App::new(wallet, authority, config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Silent connect on startup: succeeds only for a previously trusted
    // wallet, exactly like the browser original's on-load probe.
    run_effect(
        Effect::Connect {
            only_if_trusted: true,
        },
        &app,
        &tx,
    );

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 8.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if app.is_loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(250)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for tui_event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = translate_event(tui_event, &app, &mut tui) {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    should_quit = true;
                } else {
                    run_effect(effect, &app, &tx);
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (wallet connects, RPC results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            run_effect(effect, &app, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Maps a terminal event to a core action, given the visible panel.
fn translate_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None, // redraw already flagged
        TuiEvent::Refresh => Some(Action::RefreshRequested),
        TuiEvent::Escape => {
            // Esc first clears a half-typed link, then quits.
            if !tui.input_box.is_empty() {
                tui.input_box.clear();
                None
            } else {
                Some(Action::Quit)
            }
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.grid.handle_event(&event);
            if let Some(items) = app.items() {
                tui.grid.clamp_to(items.len());
            }
            None
        }
        TuiEvent::Submit => match app.phase {
            Phase::Disconnected => Some(Action::ConnectRequested),
            Phase::ConnectedNoAccount => Some(Action::InitializeRequested),
            Phase::ConnectedWithItems(_) => match tui.input_box.handle_event(&event)? {
                InputEvent::Submit(text) => Some(Action::SubmitLink(text)),
                InputEvent::ContentChanged => None,
            },
        },
        // Everything else is text editing, only meaningful on the form panel.
        other => {
            if matches!(app.phase, Phase::ConnectedWithItems(_)) {
                tui.input_box.handle_event(&other);
            }
            None
        }
    }
}

/// Runs one effect by spawning the matching background task.
///
/// `Effect::Quit` is handled by the caller; everything else lands here.
fn run_effect(effect: Effect, app: &App, tx: &mpsc::Sender<Action>) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::Connect { only_if_trusted } => {
            spawn_connect(app.wallet.clone(), only_if_trusted, tx.clone());
        }
        Effect::FetchList => {
            spawn_fetch(app.config.clone(), app.authority.clone(), tx.clone());
        }
        Effect::Initialize => {
            let Some(session) = &app.session else { return };
            spawn_initialize(
                app.config.clone(),
                app.authority.clone(),
                session.signer.clone(),
                tx.clone(),
            );
        }
        Effect::Append(link) => {
            let Some(session) = &app.session else { return };
            spawn_append(
                app.config.clone(),
                app.authority.clone(),
                session.signer.clone(),
                link,
                tx.clone(),
            );
        }
    }
}

/// An absent wallet is the only connect failure the user must see; every
/// other outcome is logged and left for a manual retry.
fn connect_outcome(result: Result<crate::wallet::WalletSession, WalletError>) -> Action {
    match result {
        Ok(session) => Action::WalletConnected(session),
        Err(e @ WalletError::NotFound(_)) => Action::WalletUnavailable(e.to_string()),
        Err(e) => Action::WalletDeclined(e.to_string()),
    }
}

fn spawn_connect(wallet: Arc<dyn WalletProvider>, only_if_trusted: bool, tx: mpsc::Sender<Action>) {
    info!("Spawning wallet connect (only_if_trusted={only_if_trusted})");
    tokio::spawn(async move {
        let action = connect_outcome(wallet.connect(only_if_trusted).await);
        if tx.send(action).is_err() {
            warn!("Failed to send connect result: receiver dropped");
        }
    });
}

fn spawn_fetch(
    config: ResolvedConfig,
    authority: Arc<dyn AuthoritySource>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning list fetch");
    tokio::task::spawn_blocking(move || {
        let action = match authority.authority() {
            Ok(base_account) => {
                use solana_sdk::signature::Signer;
                let client = PortalClient::new(&config);
                match client.fetch_list(&base_account.pubkey()) {
                    Ok(items) => Action::ListFetched(items),
                    Err(e) => Action::FetchFailed(e.to_string()),
                }
            }
            Err(e) => Action::FetchFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
}

fn spawn_initialize(
    config: ResolvedConfig,
    authority: Arc<dyn AuthoritySource>,
    payer: Arc<solana_sdk::signature::Keypair>,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning account initialization");
    tokio::task::spawn_blocking(move || {
        let action = match authority.authority() {
            Ok(base_account) => {
                let client = PortalClient::new(&config);
                match client.initialize_account(&payer, &base_account) {
                    Ok(_) => Action::InitializeSucceeded,
                    Err(e) => Action::InitializeFailed(e.to_string()),
                }
            }
            Err(e) => Action::InitializeFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send initialize result: receiver dropped");
        }
    });
}

fn spawn_append(
    config: ResolvedConfig,
    authority: Arc<dyn AuthoritySource>,
    payer: Arc<solana_sdk::signature::Keypair>,
    link: String,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning link append");
    tokio::task::spawn_blocking(move || {
        let action = match authority.authority() {
            Ok(base_account) => {
                use solana_sdk::signature::Signer;
                let client = PortalClient::new(&config);
                match client.add_gif(&payer, &base_account.pubkey(), &link) {
                    Ok(_) => Action::AppendSucceeded,
                    Err(e) => Action::AppendFailed(e.to_string()),
                }
            }
            Err(e) => Action::AppendFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send append result: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{test_app, test_session};

    #[test]
    fn test_enter_maps_to_panel_action() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        assert_eq!(
            translate_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::ConnectRequested)
        );

        update(&mut app, Action::WalletConnected(test_session()));
        update(&mut app, Action::FetchFailed("absent".to_string()));
        assert_eq!(
            translate_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::InitializeRequested)
        );

        update(&mut app, Action::ListFetched(Vec::new()));
        tui.input_box.handle_event(&TuiEvent::Paste("https://a.gif".to_string()));
        assert_eq!(
            translate_event(TuiEvent::Submit, &app, &mut tui),
            Some(Action::SubmitLink("https://a.gif".to_string()))
        );
    }

    #[test]
    fn test_enter_on_empty_form_emits_nothing() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::WalletConnected(test_session()));
        update(&mut app, Action::ListFetched(Vec::new()));

        assert_eq!(translate_event(TuiEvent::Submit, &app, &mut tui), None);
    }

    #[test]
    fn test_escape_clears_input_before_quitting() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::WalletConnected(test_session()));
        update(&mut app, Action::ListFetched(Vec::new()));
        tui.input_box.handle_event(&TuiEvent::InputChar('x'));

        assert_eq!(translate_event(TuiEvent::Escape, &app, &mut tui), None);
        assert!(tui.input_box.is_empty());
        assert_eq!(
            translate_event(TuiEvent::Escape, &app, &mut tui),
            Some(Action::Quit)
        );
    }

    #[tokio::test]
    async fn test_absent_wallet_surfaces_notice_and_never_connects() {
        use crate::test_support::{MockWallet, MockWalletMode};

        let wallet = MockWallet::new(MockWalletMode::Absent);
        let action = connect_outcome(wallet.connect(true).await);
        assert!(matches!(action, Action::WalletUnavailable(_)));

        let mut app = test_app();
        update(&mut app, action);
        assert!(app.session.is_none());
    }

    #[tokio::test]
    async fn test_untrusted_wallet_declines_silently() {
        use crate::test_support::{MockWallet, MockWalletMode};

        let wallet = MockWallet::new(MockWalletMode::Untrusted);
        let action = connect_outcome(wallet.connect(true).await);
        assert!(matches!(action, Action::WalletDeclined(_)));
    }

    #[test]
    fn test_typing_ignored_outside_form_panel() {
        let app = test_app();
        let mut tui = TuiState::new();

        assert_eq!(translate_event(TuiEvent::InputChar('q'), &app, &mut tui), None);
        assert!(tui.input_box.is_empty());
    }
}
