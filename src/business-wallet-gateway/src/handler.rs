//! CCIP-Read request handling: decode, look up, attest.
//!
//! Each request is independent; the only shared state is the read-only signer and the
//! directory's RPC client.

use std::{
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{SolCall, SolValue};
use gateway_types::{decode_dns_name, namehash, WalletLookup};
use tracing::{debug, error, info, warn};

use crate::{
    config::Config,
    digest::signature_digest,
    directory::WalletDirectory,
    errors::GatewayError,
    interfaces::IResolverService,
    resolver::encode_answer,
    signer::{GatewaySigner, SignerError},
};

/// A CCIP-Read call as delivered by the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CcipRequest {
    /// Contract that raised `OffchainLookup` (the `sender` of the lookup).
    pub to: Address,
    /// Full calldata, starting with the function selector.
    pub data: Bytes,
}

/// Signed answer, returned to the caller as `abi.encode(result, validUntil, sig)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedResponse {
    pub result: Bytes,
    pub valid_until: u64,
    /// `r || s || v`, 65 bytes.
    pub signature: Bytes,
}

impl SignedResponse {
    pub fn abi_encode(&self) -> Vec<u8> {
        (self.result.clone(), self.valid_until, self.signature.clone()).abi_encode_params()
    }
}

/// Resolution handler wiring a directory and a signer together.
pub struct Gateway {
    signer: GatewaySigner,
    directory: Arc<dyn WalletDirectory>,
    ttl: Duration,
    lookup_timeout: Duration,
}

impl Gateway {
    pub fn new(
        signer: GatewaySigner,
        directory: Arc<dyn WalletDirectory>,
        ttl: Duration,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            signer,
            directory,
            ttl,
            lookup_timeout,
        }
    }

    pub fn from_config(
        config: &Config,
        directory: Arc<dyn WalletDirectory>,
    ) -> Result<Self, SignerError> {
        let signer = GatewaySigner::from_hex(&config.private_key)?;
        Ok(Self::new(
            signer,
            directory,
            config.ttl(),
            config.lookup_timeout(),
        ))
    }

    pub fn signer(&self) -> &GatewaySigner {
        &self.signer
    }

    /// Dispatch a CCIP-Read call by selector. Only `resolve(bytes,bytes)` is served.
    pub async fn handle(&self, request: &CcipRequest) -> Result<SignedResponse, GatewayError> {
        let selector = selector_of(&request.data)?;
        if selector != IResolverService::resolveCall::SELECTOR {
            return Err(GatewayError::UnknownSelector(selector));
        }
        let call = IResolverService::resolveCall::abi_decode(&request.data, true)?;
        self.resolve(request, &call.name, &call.data).await
    }

    /// `resolve(name, data)`: the sender is the contract that raised the lookup (`request.to`).
    pub async fn resolve(
        &self,
        request: &CcipRequest,
        encoded_name: &[u8],
        data: &[u8],
    ) -> Result<SignedResponse, GatewayError> {
        let sender = request.to;
        let name = decode_dns_name(encoded_name)?;
        debug!(%name, %sender, "decoded resolve request");

        let result = self.lookup(&name, sender, data).await?;
        self.attest(request, result)
    }

    /// Look up the wallet for `(namehash(name), sender)` and encode it for the inner call.
    ///
    /// An unregistered business resolves to the zero address; any other failure is returned.
    pub async fn lookup(
        &self,
        name: &str,
        sender: Address,
        data: &[u8],
    ) -> Result<Bytes, GatewayError> {
        let domain_hash = namehash(name);
        let outcome = tokio::time::timeout(
            self.lookup_timeout,
            self.directory.get_wallet(domain_hash, sender),
        )
        .await
        .unwrap_or_else(|_| {
            WalletLookup::CallFailed(format!(
                "getWallet timed out after {}s",
                self.lookup_timeout.as_secs_f64()
            ))
        });

        let wallet = match outcome {
            WalletLookup::Found(wallet) => {
                info!(%name, %sender, %wallet, "resolved business wallet");
                wallet
            }
            WalletLookup::NotRegistered => {
                info!(%name, %sender, "no wallet registered, answering zero address");
                Address::ZERO
            }
            WalletLookup::CallFailed(reason) => {
                warn!(%name, %sender, %reason, "wallet lookup failed");
                return Err(GatewayError::Lookup(reason));
            }
        };

        Ok(encode_answer(data, wallet))
    }

    /// Sign `result` for `request`, valid for the configured TTL from now.
    pub fn attest(
        &self,
        request: &CcipRequest,
        result: Bytes,
    ) -> Result<SignedResponse, GatewayError> {
        let now = unix_now();
        let valid_until = now
            .checked_add(self.ttl.as_secs())
            .ok_or(GatewayError::Expiry { now, ttl: self.ttl.as_secs() })?;
        let digest = signature_digest(request.to, valid_until, &request.data, &result);
        let signature = self.signer.sign_digest(digest).map_err(|err| {
            error!(%err, "failed to sign resolver response");
            err
        })?;

        Ok(SignedResponse {
            result,
            valid_until,
            signature: Bytes::copy_from_slice(&signature),
        })
    }
}

fn selector_of(data: &[u8]) -> Result<[u8; 4], GatewayError> {
    if data.len() < 4 {
        return Err(GatewayError::InvalidRequest(format!(
            "call data is {} bytes, shorter than a selector",
            data.len()
        )));
    }
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&data[..4]);
    Ok(selector)
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
