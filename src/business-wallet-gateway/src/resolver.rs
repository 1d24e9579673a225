//! Shape the resolved wallet the way the inner resolver call expects it.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};

use crate::interfaces::IAddressResolver;

/// SLIP-44 coin type for Ether.
pub const COIN_TYPE_ETH: u64 = 60;

/// Return shape requested by the `data` argument of `resolve(name, data)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerShape {
    /// `addr(bytes32) returns (address)`, also used for any call we do not recognise.
    Address,
    /// `addr(bytes32,uint256) returns (bytes)`.
    CoinAddress { coin_type: U256 },
}

/// Classify the inner call by selector.
pub fn answer_shape(data: &[u8]) -> AnswerShape {
    if data.len() >= 4 && data[..4] == IAddressResolver::addrCall::SELECTOR {
        if let Ok(call) = IAddressResolver::addrCall::abi_decode(data, true) {
            return AnswerShape::CoinAddress {
                coin_type: call.coinType,
            };
        }
    }
    AnswerShape::Address
}

/// ABI-encode `wallet` as the return value of the inner call.
///
/// For multicoin lookups only the Ether coin type carries the wallet; other coin types and
/// the zero address answer with empty bytes, which ENS clients read as "no record".
pub fn encode_answer(data: &[u8], wallet: Address) -> Bytes {
    let encoded = match answer_shape(data) {
        AnswerShape::Address => (wallet,).abi_encode_params(),
        AnswerShape::CoinAddress { coin_type } => {
            let raw = if coin_type == U256::from(COIN_TYPE_ETH) && wallet != Address::ZERO {
                Bytes::copy_from_slice(wallet.as_slice())
            } else {
                Bytes::new()
            };
            (raw,).abi_encode_params()
        }
    };
    Bytes::from(encoded)
}
