//! The facade the rest of the app calls for remote portal operations.
//!
//! A `PortalClient` is cheap to construct and built lazily per call from the
//! resolved configuration; nothing here is a process-wide global. All methods
//! are synchronous - the RPC client blocks - so callers run them on blocking
//! tasks off the UI thread.

use log::{debug, info};
use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::instruction::Instruction;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

use crate::core::config::ResolvedConfig;
use crate::portal::account::{BaseAccount, GifItem};
use crate::portal::{PortalError, instruction};

pub struct PortalClient {
    rpc: RpcClient,
    program_id: Pubkey,
}

impl PortalClient {
    /// Binds a client to the configured cluster and program.
    ///
    /// Preflight commitment is `processed`, matching the program's deployed
    /// front end.
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(
                config.cluster_url.clone(),
                CommitmentConfig::processed(),
            ),
            program_id: config.program_id,
        }
    }

    /// Fetches the full list held by the account at `base_account`.
    ///
    /// Every success replaces the caller's snapshot wholesale; there is no
    /// incremental merge. Failure covers network errors, an absent account,
    /// and layout mismatches alike - the caller treats them all as "no
    /// account yet".
    pub fn fetch_list(&self, base_account: &Pubkey) -> Result<Vec<GifItem>, PortalError> {
        debug!("Fetching list account {base_account}");
        let account = self.rpc.get_account(base_account)?;
        let base = BaseAccount::from_account_data(&account.data)?;
        info!(
            "Fetched {} items (total_gifs={})",
            base.gif_list.len(),
            base.total_gifs
        );
        Ok(base.gif_list)
    }

    /// Runs the one-time initialization that creates the list account.
    ///
    /// The connected wallet pays; the account keypair co-signs because the
    /// program creates the account at that address.
    pub fn initialize_account(
        &self,
        payer: &Keypair,
        base_account: &Keypair,
    ) -> Result<Signature, PortalError> {
        info!(
            "Initializing list account {} (payer {})",
            base_account.pubkey(),
            payer.pubkey()
        );
        let ix = instruction::start_stuff_off(
            &self.program_id,
            &base_account.pubkey(),
            &payer.pubkey(),
        );
        self.send(payer, &[base_account], &[ix])
    }

    /// Appends one link to the list account, signed by the submitting wallet.
    ///
    /// An empty link never reaches the network.
    pub fn add_gif(
        &self,
        user: &Keypair,
        base_account: &Pubkey,
        link: &str,
    ) -> Result<Signature, PortalError> {
        if link.is_empty() {
            return Err(PortalError::EmptyLink);
        }
        info!("Appending link to {base_account}");
        let ix = instruction::add_gif(&self.program_id, base_account, &user.pubkey(), link);
        self.send(user, &[], &[ix])
    }

    fn send(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> Result<Signature, PortalError> {
        let blockhash = self.rpc.get_latest_blockhash()?;

        let message = Message::new(instructions, Some(&payer.pubkey()));
        let mut tx = Transaction::new_unsigned(message);
        tx.try_sign(
            &std::iter::once(payer)
                .chain(extra_signers.iter().cloned())
                .collect::<Vec<_>>(),
            blockhash,
        )
        .map_err(|e| PortalError::Signing(e.to_string()))?;

        let signature = self.rpc.send_and_confirm_transaction(&tx)?;
        info!("Confirmed transaction {signature}");
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResolvedConfig;

    #[test]
    fn test_empty_link_rejected_before_any_rpc() {
        // Unroutable URL: if add_gif tried the network this would not return
        // an EmptyLink error.
        let config = ResolvedConfig::for_cluster("http://127.0.0.1:1".to_string());
        let client = PortalClient::new(&config);
        let user = Keypair::new();
        let base = Pubkey::new_unique();

        let err = client.add_gif(&user, &base, "").unwrap_err();
        assert!(matches!(err, PortalError::EmptyLink));
    }
}
