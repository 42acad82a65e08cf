//! # Actions
//!
//! Everything that can happen in Gifport becomes an `Action`.
//! User hits Enter on the connect panel? That's `Action::ConnectRequested`.
//! A background fetch resolves? That's `Action::ListFetched(items)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect` the caller must run. No I/O here -
//! remote calls happen on background tasks spawned by the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes every view transition testable without a terminal or a
//! network: feed actions, assert on phase and effect.

use log::{error, info, warn};

use crate::core::state::{App, Phase};
use crate::portal::account::GifItem;
use crate::wallet::{WalletSession, short_pubkey};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// User asked to connect (Enter on the connect panel).
    ConnectRequested,
    /// A wallet connect (silent or explicit) succeeded.
    WalletConnected(WalletSession),
    /// No wallet is available. The message is shown to the user.
    WalletUnavailable(String),
    /// A connect attempt failed or a silent connect was refused. Log only.
    WalletDeclined(String),
    /// A fetch replaced the snapshot.
    ListFetched(Vec<GifItem>),
    /// A fetch failed (network, absent account, bad layout).
    FetchFailed(String),
    /// User asked to run the one-time initialization.
    InitializeRequested,
    InitializeSucceeded,
    InitializeFailed(String),
    /// User submitted a link from the input form.
    SubmitLink(String),
    AppendSucceeded,
    AppendFailed(String),
    /// User asked for a manual refresh.
    RefreshRequested,
    Quit,
}

/// What the caller must do after an `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn a wallet connect. `only_if_trusted` is the silent startup probe.
    Connect { only_if_trusted: bool },
    /// Spawn a fetch of the list account.
    FetchList,
    /// Spawn the one-time initialization.
    Initialize,
    /// Spawn an append of the given link.
    Append(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ConnectRequested => {
            if app.session.is_some() || app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Connecting wallet...");
            Effect::Connect {
                only_if_trusted: false,
            }
        }

        Action::WalletConnected(session) => {
            info!("Connected with public key: {}", session.address);
            app.status_message = format!("Connected: {}", short_pubkey(&session.address));
            app.session = Some(session);
            // Mirror the original: an empty snapshot until the first fetch
            // resolves one way or the other.
            app.phase = Phase::ConnectedWithItems(Vec::new());
            app.is_loading = true;
            Effect::FetchList
        }

        Action::WalletUnavailable(msg) => {
            error!("{msg}");
            app.is_loading = false;
            app.status_message = msg;
            Effect::None
        }

        Action::WalletDeclined(msg) => {
            warn!("Wallet connect declined: {msg}");
            app.is_loading = false;
            if app.session.is_none() {
                app.status_message = String::from("Wallet not connected");
            }
            Effect::None
        }

        Action::ListFetched(items) => {
            app.is_loading = false;
            app.status_message = format!("{} item(s)", items.len());
            app.phase = Phase::ConnectedWithItems(items);
            Effect::None
        }

        Action::FetchFailed(msg) => {
            warn!("Fetch failed: {msg}");
            app.is_loading = false;
            if app.session.is_some() {
                app.phase = Phase::ConnectedNoAccount;
                app.status_message = String::from("List account not found");
            }
            Effect::None
        }

        Action::InitializeRequested => {
            if app.is_loading || app.session.is_none() {
                return Effect::None;
            }
            if app.phase != Phase::ConnectedNoAccount {
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Initializing account...");
            Effect::Initialize
        }

        Action::InitializeSucceeded => {
            info!("Account initialized, refreshing");
            app.status_message = String::from("Account initialized");
            Effect::FetchList
        }

        Action::InitializeFailed(msg) => {
            warn!("Initialization failed: {msg}");
            app.is_loading = false;
            app.status_message = String::from("Initialization failed, try again");
            Effect::None
        }

        Action::SubmitLink(link) => {
            if app.session.is_none() {
                return Effect::None;
            }
            if link.trim().is_empty() {
                info!("Empty input. Try again.");
                return Effect::None;
            }
            if app.is_loading {
                app.status_message = String::from("Busy, try again in a moment");
                return Effect::None;
            }
            info!("Gif link: {link}");
            app.is_loading = true;
            app.status_message = String::from("Submitting...");
            Effect::Append(link)
        }

        Action::AppendSucceeded => {
            info!("Link submitted, refreshing");
            Effect::FetchList
        }

        Action::AppendFailed(msg) => {
            warn!("Error sending GIF: {msg}");
            app.is_loading = false;
            app.status_message = String::from("Submit failed, try again");
            Effect::None
        }

        Action::RefreshRequested => {
            if app.session.is_none() || app.is_loading {
                return Effect::None;
            }
            app.is_loading = true;
            app.status_message = String::from("Refreshing...");
            Effect::FetchList
        }

        Action::Quit => Effect::Quit,
    }
}
