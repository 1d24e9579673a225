use std::{collections::HashMap, time::Duration};

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use gateway_types::{namehash, WalletLookup};

use super::WalletDirectory;

/// In-memory directory used by the handler and HTTP tests.
///
/// Pairs without an entry answer `NotRegistered`, like the contract does.
#[derive(Clone, Debug, Default)]
pub struct MockWalletDirectory {
    wallets: HashMap<(B256, Address), Address>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockWalletDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `wallet` for `(namehash(name), sender)`.
    pub fn with_wallet(mut self, name: &str, sender: Address, wallet: Address) -> Self {
        self.wallets.insert((namehash(name), sender), wallet);
        self
    }

    /// Make every lookup fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    /// Sleep before answering (exercises the lookup timeout).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl WalletDirectory for MockWalletDirectory {
    async fn get_wallet(&self, domain_hash: B256, sender: Address) -> WalletLookup {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref reason) = self.failure {
            return WalletLookup::CallFailed(reason.clone());
        }
        match self.wallets.get(&(domain_hash, sender)) {
            Some(wallet) => WalletLookup::Found(*wallet),
            None => WalletLookup::NotRegistered,
        }
    }
}
