//! Instruction builders for the portal program.
//!
//! The program exposes two instructions, addressed by the first 8 bytes of
//! `sha256("global:<snake_case_name>")`:
//!
//! - `start_stuff_off` - zero-argument; creates and initializes the list
//!   account. Signed by the paying wallet and the new account's keypair.
//! - `add_gif` - one borsh-encoded string argument; appends a record.
//!   Signed by the submitting wallet.

use borsh::BorshSerialize;
use sha2::{Digest, Sha256};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

/// First 8 bytes of `sha256("global:<name>")`.
fn sighash(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{name}").as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

/// Builds the one-time initialization instruction.
///
/// Account order is fixed by the program: the new list account (signer,
/// writable), the paying wallet (signer, writable), the system program.
pub fn start_stuff_off(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(solana_system_interface::program::id(), false),
        ],
        data: sighash("start_stuff_off").to_vec(),
    }
}

/// Builds the append instruction carrying one link.
pub fn add_gif(program_id: &Pubkey, base_account: &Pubkey, user: &Pubkey, link: &str) -> Instruction {
    let mut data = sighash("add_gif").to_vec();
    link.to_string()
        .serialize(&mut data)
        .expect("borsh into Vec cannot fail");
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*base_account, false),
            AccountMeta::new(*user, true),
        ],
        data,
    }
}
