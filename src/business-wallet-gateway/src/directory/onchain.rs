use alloy_primitives::{Address, B256};
use alloy_sol_types::{Revert, SolCall, SolError};
use anyhow::Context;
use async_trait::async_trait;
use ethers::{
    providers::{Http, JsonRpcError, Middleware, Provider, ProviderError, RpcError},
    types::{transaction::eip2718::TypedTransaction, TransactionRequest, H160},
};
use gateway_types::WalletLookup;
use tracing::debug;

use super::WalletDirectory;
use crate::interfaces::IBusinessWalletsResolver;

/// `require` message the business wallets resolver reverts with for unknown businesses.
pub const NOT_REGISTERED_REASON: &str = "Business not registered";

/// Directory backed by `getWallet` on the business wallets resolver, read via `eth_call`.
pub struct OnchainWalletDirectory {
    provider: Provider<Http>,
    contract: Address,
}

impl OnchainWalletDirectory {
    pub fn new(provider: Provider<Http>, contract: Address) -> Self {
        Self { provider, contract }
    }

    /// Build an HTTP JSON-RPC provider for `rpc_url`. No request is sent until the first lookup.
    pub fn connect(rpc_url: &str, contract: Address) -> anyhow::Result<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .with_context(|| format!("invalid RPC URL `{rpc_url}`"))?;
        Ok(Self::new(provider, contract))
    }
}

#[async_trait]
impl WalletDirectory for OnchainWalletDirectory {
    async fn get_wallet(&self, domain_hash: B256, sender: Address) -> WalletLookup {
        let calldata = IBusinessWalletsResolver::getWalletCall {
            domainHash: domain_hash,
            sender,
        }
        .abi_encode();

        let tx: TypedTransaction = TransactionRequest::new()
            .to(H160::from_slice(self.contract.as_slice()))
            .data(calldata)
            .into();

        match self.provider.call(&tx, None).await {
            Ok(ret) => decode_wallet(&ret),
            Err(err) => classify_call_error(&err),
        }
    }
}

/// Decode `getWallet` return data. The zero address means "no relationship".
pub(crate) fn decode_wallet(ret: &[u8]) -> WalletLookup {
    match IBusinessWalletsResolver::getWalletCall::abi_decode_returns(ret, true) {
        Ok(decoded) if decoded._0 == Address::ZERO => WalletLookup::NotRegistered,
        Ok(decoded) => WalletLookup::Found(decoded._0),
        Err(err) => WalletLookup::CallFailed(format!(
            "malformed getWallet return data (0x{}): {err}",
            hex::encode(ret)
        )),
    }
}

/// Split an `eth_call` error into "not registered" and everything else.
///
/// Nodes that report a revert without data yield empty revert bytes, which stay a failure.
pub(crate) fn classify_call_error(err: &ProviderError) -> WalletLookup {
    let revert = err
        .as_error_response()
        .and_then(JsonRpcError::as_revert_data)
        .filter(|data| !data.is_empty());

    match revert {
        Some(data) if is_not_registered(&data) => {
            debug!("getWallet reverted: business not registered");
            WalletLookup::NotRegistered
        }
        Some(data) => {
            WalletLookup::CallFailed(format!("getWallet reverted with 0x{}", hex::encode(&data)))
        }
        None => WalletLookup::CallFailed(err.to_string()),
    }
}

/// Whether revert data signals an unregistered business.
///
/// Recognises the `BusinessNotRegistered()` custom error and `Error("Business not registered")`.
pub fn is_not_registered(revert_data: &[u8]) -> bool {
    if revert_data.len() >= 4
        && revert_data[..4] == IBusinessWalletsResolver::BusinessNotRegistered::SELECTOR
    {
        return true;
    }
    match Revert::abi_decode(revert_data, true) {
        Ok(revert) => revert.reason == NOT_REGISTERED_REASON,
        Err(_) => false,
    }
}
