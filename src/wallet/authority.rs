//! The per-deployment account authority.
//!
//! The original bundled this keypair into the build - every visitor shipped
//! the secret that owns the shared list account. Here it sits behind a trait
//! so deployments can source it however they like (file, env-injected secret
//! store, hardware). The file-backed source generates a fresh keypair on
//! first use, so each deployment owns its own account.

use std::path::PathBuf;
use std::sync::Arc;

use log::info;
use solana_keypair::{read_keypair_file, write_keypair_file};
use solana_sdk::signature::{Keypair, Signer};

use crate::wallet::WalletError;

/// Source of the keypair that owns the shared list account and co-signs its
/// creation.
pub trait AuthoritySource: Send + Sync {
    fn authority(&self) -> Result<Arc<Keypair>, WalletError>;
}

/// Reads the authority keypair from disk, creating it on first use.
pub struct FileAuthority {
    path: PathBuf,
}

impl FileAuthority {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl AuthoritySource for FileAuthority {
    fn authority(&self) -> Result<Arc<Keypair>, WalletError> {
        if self.path.exists() {
            let keypair = read_keypair_file(&self.path)
                .map_err(|e| WalletError::Io(format!("{}: {e}", self.path.display())))?;
            return Ok(Arc::new(keypair));
        }

        let keypair = Keypair::new();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WalletError::Io(e.to_string()))?;
        }
        write_keypair_file(&keypair, &self.path)
            .map_err(|e| WalletError::Io(format!("{}: {e}", self.path.display())))?;
        info!(
            "Generated new account authority {} at {}",
            keypair.pubkey(),
            self.path.display()
        );
        Ok(Arc::new(keypair))
    }
}
