//! # Application State
//!
//! Core business state for Gifport. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── wallet: Arc<dyn WalletProvider>      // wallet boundary
//! ├── authority: Arc<dyn AuthoritySource>  // account authority keypair
//! ├── config: ResolvedConfig               // immutable startup config
//! ├── session: Option<WalletSession>       // connected address + signer
//! ├── phase: Phase                         // what the main panel shows
//! ├── status_message: String               // status bar text
//! └── is_loading: bool                     // a remote call is in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;

use crate::core::config::ResolvedConfig;
use crate::portal::account::GifItem;
use crate::wallet::authority::AuthoritySource;
use crate::wallet::{WalletProvider, WalletSession};

/// What the main panel shows. One variant per panel - the original encoded
/// this across two nullable fields, which allowed ambiguous combinations.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// No wallet session. Shows the connect prompt.
    Disconnected,
    /// Connected, but the list account is absent or unreadable. Shows the
    /// one-time initialization prompt.
    ConnectedNoAccount,
    /// Connected with a fetched snapshot (possibly empty). Shows the
    /// submission form and the item grid.
    ConnectedWithItems(Vec<GifItem>),
}

pub struct App {
    pub wallet: Arc<dyn WalletProvider>,
    pub authority: Arc<dyn AuthoritySource>,
    pub config: ResolvedConfig,
    pub session: Option<WalletSession>,
    pub phase: Phase,
    pub status_message: String,
    pub is_loading: bool,
}

impl App {
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        authority: Arc<dyn AuthoritySource>,
        config: ResolvedConfig,
    ) -> Self {
        Self {
            wallet,
            authority,
            config,
            session: None,
            phase: Phase::Disconnected,
            status_message: String::from("Welcome to the GIF portal!"),
            is_loading: false,
        }
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.session.as_ref().map(|s| s.address)
    }

    /// Items of the current snapshot, when there is one.
    pub fn items(&self) -> Option<&[GifItem]> {
        match &self.phase {
            Phase::ConnectedWithItems(items) => Some(items),
            _ => None,
        }
    }
}
