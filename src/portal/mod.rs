//! # Portal Program Client
//!
//! Everything that talks to the on-chain GIF portal program lives here.
//! The program is a pre-deployed black box on a public cluster; this module
//! only knows its wire format:
//!
//! - instructions carry an 8-byte discriminator (`sha256("global:<name>")[..8]`)
//!   followed by borsh-serialized arguments,
//! - the list account starts with an 8-byte account discriminator followed by
//!   borsh-serialized fields, padded with zeros up to the allocated space.
//!
//! [`client::PortalClient`] is the facade the rest of the app calls. It is
//! constructed per call from a [`crate::core::config::ResolvedConfig`] and
//! issues exactly three operations: fetch the list account, run the one-time
//! initialization, and append one link.

pub mod account;
pub mod client;
pub mod instruction;

use std::fmt;

use solana_client::client_error::ClientError;

/// Errors from portal operations.
///
/// Callers map these to state, never panic on them: a failed fetch collapses
/// to the "needs initialization" phase, a failed write leaves the current
/// panel in place.
#[derive(Debug)]
pub enum PortalError {
    /// RPC transport or node-side failure (includes "account not found").
    Rpc(String),
    /// Account data did not match the expected layout or discriminator.
    Account(String),
    /// Submitted link was empty; rejected before any remote call.
    EmptyLink,
    /// Transaction could not be signed with the provided keypairs.
    Signing(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Rpc(msg) => write!(f, "rpc error: {msg}"),
            PortalError::Account(msg) => write!(f, "account error: {msg}"),
            PortalError::EmptyLink => write!(f, "empty link rejected"),
            PortalError::Signing(msg) => write!(f, "signing error: {msg}"),
        }
    }
}

impl std::error::Error for PortalError {}

impl From<ClientError> for PortalError {
    fn from(e: ClientError) -> Self {
        PortalError::Rpc(e.to_string())
    }
}
