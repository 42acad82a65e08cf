//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::signature::{Keypair, Signer};

use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::wallet::authority::AuthoritySource;
use crate::wallet::{WalletError, WalletProvider, WalletSession};

/// How a [`MockWallet`] responds to connect requests.
pub enum MockWalletMode {
    /// Silent and explicit connects both succeed.
    Trusted,
    /// Silent connects are refused; explicit connects succeed.
    Untrusted,
    /// No wallet available at all.
    Absent,
}

pub struct MockWallet {
    mode: MockWalletMode,
    keypair: Arc<Keypair>,
}

impl MockWallet {
    pub fn new(mode: MockWalletMode) -> Self {
        Self {
            mode,
            keypair: Arc::new(Keypair::new()),
        }
    }

    pub fn session(&self) -> WalletSession {
        WalletSession {
            address: self.keypair.pubkey(),
            signer: self.keypair.clone(),
        }
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    fn name(&self) -> &str {
        "mock"
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError> {
        match self.mode {
            MockWalletMode::Absent => {
                Err(WalletError::NotFound("no mock wallet".to_string()))
            }
            MockWalletMode::Untrusted if only_if_trusted => Err(WalletError::NotTrusted),
            _ => Ok(self.session()),
        }
    }
}

/// Authority source backed by an in-memory keypair.
pub struct StaticAuthority {
    keypair: Arc<Keypair>,
}

impl StaticAuthority {
    pub fn new() -> Self {
        Self {
            keypair: Arc::new(Keypair::new()),
        }
    }
}

impl Default for StaticAuthority {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthoritySource for StaticAuthority {
    fn authority(&self) -> Result<Arc<Keypair>, WalletError> {
        Ok(self.keypair.clone())
    }
}

/// Creates a test App with a trusted mock wallet and an in-memory authority.
pub fn test_app() -> App {
    App::new(
        Arc::new(MockWallet::new(MockWalletMode::Trusted)),
        Arc::new(StaticAuthority::new()),
        ResolvedConfig::for_cluster("http://127.0.0.1:8899".to_string()),
    )
}

/// A ready-made connected session for reducer tests.
pub fn test_session() -> WalletSession {
    let keypair = Keypair::new();
    WalletSession {
        address: keypair.pubkey(),
        signer: Arc::new(keypair),
    }
}
