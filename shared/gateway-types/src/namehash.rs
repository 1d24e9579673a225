//! ENS namehash (EIP-137).

use alloy_primitives::{keccak256, B256};

/// Compute the ENS namehash of a dotted name.
///
/// `namehash("") = 0x00..00`, and `namehash(label.rest) = keccak256(namehash(rest) || keccak256(label))`.
/// The name is hashed as given; normalisation is the caller's job.
pub fn namehash(name: &str) -> B256 {
    let mut node = B256::ZERO;
    if name.is_empty() {
        return node;
    }

    let mut buf = [0u8; 64];
    for label in name.rsplit('.') {
        buf[0..32].copy_from_slice(node.as_slice());
        buf[32..64].copy_from_slice(labelhash(label).as_slice());
        node = keccak256(buf);
    }
    node
}

/// keccak256 of a single label.
pub fn labelhash(label: &str) -> B256 {
    keccak256(label.as_bytes())
}
