//! Digest signed by the gateway, as recomputed by the resolver's signature verifier.

use alloy_primitives::{keccak256, Address, B256};

/// EIP-191 version 0 prefix ("data with intended validator").
pub const SIGNATURE_PREFIX: [u8; 2] = [0x19, 0x00];

/// `keccak256(abi.encodePacked(hex"1900", target, expires, keccak256(request), keccak256(result)))`
///
/// - `target` is the contract that raised `OffchainLookup` (the request sender).
/// - `expires` is packed as a big-endian `uint64`.
/// - `request` is the full calldata the gateway received; `result` is the encoded answer.
pub fn signature_digest(target: Address, expires: u64, request: &[u8], result: &[u8]) -> B256 {
    let mut buf = Vec::with_capacity(2 + 20 + 8 + 32 + 32);
    buf.extend_from_slice(&SIGNATURE_PREFIX);
    buf.extend_from_slice(target.as_slice());
    buf.extend_from_slice(&expires.to_be_bytes());
    buf.extend_from_slice(keccak256(request).as_slice());
    buf.extend_from_slice(keccak256(result).as_slice());
    keccak256(buf)
}
