//! On-chain layout of the shared list account.
//!
//! The account is created once per deployment with a fixed allocation, so the
//! borsh-encoded content is followed by zero padding. Deserialization must
//! therefore tolerate trailing bytes instead of requiring an exact fit.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::portal::PortalError;

/// `sha256("account:BaseAccount")[..8]` - the account discriminator written
/// by the program at initialization.
pub const BASE_ACCOUNT_DISCRIMINATOR: [u8; 8] = [16, 90, 130, 242, 159, 10, 232, 133];

/// One submitted record: a link and the wallet that submitted it.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct GifItem {
    pub gif_link: String,
    /// Raw 32-byte key; borsh has no native `Pubkey` field here so the bytes
    /// are stored directly and exposed through [`GifItem::user_address`].
    pub user_address: [u8; 32],
}

impl GifItem {
    pub fn user_address(&self) -> Pubkey {
        Pubkey::new_from_array(self.user_address)
    }

    /// Shortened base58 form for display, e.g. `3nFg..9iKp`.
    pub fn short_address(&self) -> String {
        let full = self.user_address().to_string();
        if full.len() <= 8 {
            return full;
        }
        format!("{}..{}", &full[..4], &full[full.len() - 4..])
    }
}

/// The list account's borsh content, after the discriminator.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct BaseAccount {
    pub total_gifs: u64,
    pub gif_list: Vec<GifItem>,
}

impl BaseAccount {
    /// Parses raw account data as fetched from the cluster.
    ///
    /// Checks the discriminator, then deserializes the borsh content while
    /// ignoring the zero padding that follows it.
    pub fn from_account_data(data: &[u8]) -> Result<Self, PortalError> {
        if data.len() < BASE_ACCOUNT_DISCRIMINATOR.len() {
            return Err(PortalError::Account(format!(
                "account data too short: {} bytes",
                data.len()
            )));
        }
        let (discriminator, rest) = data.split_at(BASE_ACCOUNT_DISCRIMINATOR.len());
        if discriminator != BASE_ACCOUNT_DISCRIMINATOR {
            return Err(PortalError::Account(
                "account discriminator mismatch".to_string(),
            ));
        }
        BaseAccount::deserialize(&mut &rest[..])
            .map_err(|e| PortalError::Account(format!("borsh decode failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-assembles account bytes the way the program lays them out:
    /// discriminator, u64 count, vec of (string, 32-byte key), zero padding.
    fn raw_account(links: &[(&str, [u8; 32])], padding: usize) -> Vec<u8> {
        let mut data = BASE_ACCOUNT_DISCRIMINATOR.to_vec();
        data.extend_from_slice(&(links.len() as u64).to_le_bytes());
        data.extend_from_slice(&(links.len() as u32).to_le_bytes());
        for (link, addr) in links {
            data.extend_from_slice(&(link.len() as u32).to_le_bytes());
            data.extend_from_slice(link.as_bytes());
            data.extend_from_slice(addr);
        }
        data.extend(std::iter::repeat(0u8).take(padding));
        data
    }

    #[test]
    fn test_parses_populated_account_with_padding() {
        let submitter = [7u8; 32];
        let data = raw_account(
            &[
                ("https://media.giphy.com/a.gif", submitter),
                ("https://media.giphy.com/b.gif", submitter),
            ],
            512,
        );

        let parsed = BaseAccount::from_account_data(&data).unwrap();
        assert_eq!(parsed.total_gifs, 2);
        assert_eq!(parsed.gif_list.len(), 2);
        assert_eq!(parsed.gif_list[0].gif_link, "https://media.giphy.com/a.gif");
        assert_eq!(parsed.gif_list[1].gif_link, "https://media.giphy.com/b.gif");
        assert_eq!(parsed.gif_list[0].user_address(), Pubkey::new_from_array(submitter));
    }

    #[test]
    fn test_parses_empty_list() {
        let data = raw_account(&[], 256);
        let parsed = BaseAccount::from_account_data(&data).unwrap();
        assert_eq!(parsed.total_gifs, 0);
        assert!(parsed.gif_list.is_empty());
    }

    #[test]
    fn test_rejects_short_data() {
        let err = BaseAccount::from_account_data(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, PortalError::Account(_)));
    }

    #[test]
    fn test_rejects_wrong_discriminator() {
        let mut data = raw_account(&[], 0);
        data[0] ^= 0xff;
        let err = BaseAccount::from_account_data(&data).unwrap_err();
        assert!(matches!(err, PortalError::Account(_)));
    }

    #[test]
    fn test_short_address_format() {
        let item = GifItem {
            gif_link: "x".to_string(),
            user_address: Pubkey::new_unique().to_bytes(),
        };
        let short = item.short_address();
        assert_eq!(short.len(), 10);
        assert!(short.contains(".."));
    }
}
