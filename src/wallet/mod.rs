//! # Wallet Session Management
//!
//! The original front end talked to a browser-injected wallet object; here
//! the same narrow surface is a trait so wallet kinds can be swapped without
//! touching the rest of the app. The file-backed implementation in [`file`]
//! stands in for the injected provider, and [`authority`] isolates the
//! per-deployment account keypair behind its own seam instead of embedding
//! it as a constant.
//!
//! The session is one-way: `disconnected → connected`. Nothing in the app
//! models an explicit disconnect; the session ends with the process.

pub mod authority;
pub mod file;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;

/// Errors from wallet operations.
#[derive(Debug)]
pub enum WalletError {
    /// No wallet is available at all. Surfaced to the user as a notice.
    NotFound(String),
    /// A silent (`only_if_trusted`) connect was refused; an explicit connect
    /// may still succeed. Logged, never surfaced.
    NotTrusted,
    /// The wallet refused the connection.
    Rejected(String),
    /// Keypair file could not be read or written.
    Io(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::NotFound(msg) => write!(f, "wallet not found: {msg}"),
            WalletError::NotTrusted => write!(f, "wallet not previously trusted"),
            WalletError::Rejected(msg) => write!(f, "wallet rejected connection: {msg}"),
            WalletError::Io(msg) => write!(f, "wallet i/o error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

/// A connected wallet: its public address plus signing capability.
///
/// The keypair is shared because signing happens on background tasks while
/// the address lives in UI state.
#[derive(Clone)]
pub struct WalletSession {
    pub address: Pubkey,
    pub signer: Arc<Keypair>,
}

/// Sessions compare by address; the signer is capability, not identity.
impl PartialEq for WalletSession {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material.
        f.debug_struct("WalletSession")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// The narrow wallet surface the app consumes.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Requests a connection.
    ///
    /// With `only_if_trusted` the provider must connect silently or refuse
    /// with [`WalletError::NotTrusted`]; without it the provider may do
    /// whatever user interaction it needs.
    async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError>;
}

/// Shortened base58 address for status lines.
pub fn short_pubkey(pubkey: &Pubkey) -> String {
    let full = pubkey.to_string();
    if full.len() <= 8 {
        return full;
    }
    format!("{}..{}", &full[..4], &full[full.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_pubkey() {
        let pk = Pubkey::new_unique();
        let short = short_pubkey(&pk);
        assert_eq!(short.len(), 10);
        assert!(pk.to_string().starts_with(&short[..4]));
    }

    #[test]
    fn test_session_debug_hides_key_material() {
        let session = WalletSession {
            address: Pubkey::new_unique(),
            signer: Arc::new(Keypair::new()),
        };
        let rendered = format!("{session:?}");
        assert!(rendered.contains("address"));
        assert!(!rendered.contains("signer"));
    }
}
