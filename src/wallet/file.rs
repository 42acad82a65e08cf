//! File-backed wallet provider.
//!
//! Reads a Solana CLI keypair file and maps the injected-provider trust
//! handshake onto the filesystem: an explicit connect drops a trust marker
//! in the app's data directory, and a silent (`only_if_trusted`) connect
//! succeeds only while that marker exists. First launch therefore lands on
//! the connect panel; every later launch connects on its own, which is the
//! behavior users know from the browser original.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};
use solana_keypair::read_keypair_file;
use solana_sdk::signature::Signer;

use crate::wallet::{WalletError, WalletProvider, WalletSession};

const TRUST_MARKER: &str = "trusted";

pub struct FileWallet {
    keypair_path: PathBuf,
    data_dir: PathBuf,
}

impl FileWallet {
    pub fn new(keypair_path: PathBuf, data_dir: PathBuf) -> Self {
        Self {
            keypair_path,
            data_dir,
        }
    }

    fn trust_marker(&self) -> PathBuf {
        self.data_dir.join(TRUST_MARKER)
    }

    fn load_session(&self) -> Result<WalletSession, WalletError> {
        if !self.keypair_path.exists() {
            return Err(WalletError::NotFound(format!(
                "no keypair file at {} - create one with `solana-keygen new`",
                self.keypair_path.display()
            )));
        }
        let keypair = read_keypair_file(&self.keypair_path)
            .map_err(|e| WalletError::Io(format!("{}: {e}", self.keypair_path.display())))?;
        Ok(WalletSession {
            address: keypair.pubkey(),
            signer: Arc::new(keypair),
        })
    }

    fn remember_trust(&self) {
        if let Err(e) = std::fs::create_dir_all(&self.data_dir) {
            warn!("Failed to create data directory: {e}");
            return;
        }
        if let Err(e) = std::fs::write(self.trust_marker(), b"") {
            warn!("Failed to write trust marker: {e}");
        }
    }
}

#[async_trait]
impl WalletProvider for FileWallet {
    fn name(&self) -> &str {
        "file"
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<WalletSession, WalletError> {
        if only_if_trusted && !self.trust_marker().exists() {
            return Err(WalletError::NotTrusted);
        }

        let session = self.load_session()?;
        if !only_if_trusted {
            self.remember_trust();
        }
        info!("Wallet connected: {}", session.address);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_keypair::write_keypair_file;
    use solana_sdk::signature::Keypair;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gifport-wallet-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn wallet_with_keypair(tag: &str) -> (FileWallet, Keypair) {
        let dir = scratch_dir(tag);
        let keypair = Keypair::new();
        let path = dir.join("id.json");
        write_keypair_file(&keypair, &path).unwrap();
        (FileWallet::new(path, dir), keypair)
    }

    #[tokio::test]
    async fn test_missing_keypair_is_not_found() {
        let dir = scratch_dir("absent");
        let wallet = FileWallet::new(dir.join("id.json"), dir);

        let err = wallet.connect(false).await.unwrap_err();
        assert!(matches!(err, WalletError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_silent_connect_refused_without_marker() {
        let (wallet, _) = wallet_with_keypair("untrusted");

        let err = wallet.connect(true).await.unwrap_err();
        assert!(matches!(err, WalletError::NotTrusted));
    }

    #[tokio::test]
    async fn test_explicit_connect_establishes_trust() {
        let (wallet, keypair) = wallet_with_keypair("trust");

        let session = wallet.connect(false).await.unwrap();
        assert_eq!(session.address, keypair.pubkey());

        // Subsequent silent connects succeed.
        let session = wallet.connect(true).await.unwrap();
        assert_eq!(session.address, keypair.pubkey());
    }
}
