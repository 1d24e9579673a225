//! Wallet directory: where `getWallet(domainHash, sender)` is answered.
//!
//! Implemented on-chain (JSON-RPC `eth_call`) for the running gateway and in memory for tests.

#[cfg(test)]
mod mock;
mod onchain;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use gateway_types::WalletLookup;

pub use onchain::{is_not_registered, OnchainWalletDirectory, NOT_REGISTERED_REASON};

#[cfg(test)]
pub(crate) use mock::MockWalletDirectory;
#[cfg(test)]
pub(crate) use onchain::{classify_call_error, decode_wallet};

/// Directory abstraction, implemented differently on-chain vs off-chain.
///
/// Implementations classify failures themselves; the handler only branches on [`WalletLookup`].
#[async_trait]
pub trait WalletDirectory: Send + Sync {
    async fn get_wallet(&self, domain_hash: B256, sender: Address) -> WalletLookup;
}
