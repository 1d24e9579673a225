//! CCIP-Read (EIP-3668) gateway for ENS business names.
//!
//! The business wallet resolver contract reverts with `OffchainLookup`; clients forward the
//! `resolve(bytes name, bytes data)` call here. The gateway looks the wallet up on the
//! business-wallets resolver contract and answers with `(result, validUntil, signature)`, which
//! the contract verifies on-chain against the gateway's signing address.

pub mod config;
pub mod digest;
pub mod directory;
pub mod errors;
pub mod handler;
pub mod interfaces;
pub mod resolver;
pub mod server;
pub mod signer;

pub use config::Config;
pub use directory::{OnchainWalletDirectory, WalletDirectory};
pub use errors::GatewayError;
pub use handler::{CcipRequest, Gateway, SignedResponse};
pub use signer::GatewaySigner;
