//! Gateway signing key.
//!
//! Responses are authorised by a single secp256k1 key; the resolver contract recovers the
//! signer from `(digest, signature)` and compares it against its configured signer set.

use std::fmt;

use alloy_primitives::{keccak256, Address, B256};
use k256::{
    ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey},
    elliptic_curve::sec1::ToEncodedPoint,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("private key is not valid hex")]
    InvalidHex,
    #[error("private key must be 32 bytes, got {0}")]
    InvalidLength(usize),
    #[error("private key is not a valid secp256k1 scalar")]
    InvalidKey,
    #[error("signature must be 65 bytes (r||s||v)")]
    MalformedSignature,
    #[error(transparent)]
    Ecdsa(#[from] k256::ecdsa::Error),
}

/// Long-lived signer for the process. Key material is never printed.
pub struct GatewaySigner {
    key: SigningKey,
    address: Address,
}

impl GatewaySigner {
    pub fn new(key: SigningKey) -> Self {
        let address = address_of(key.verifying_key());
        Self { key, address }
    }

    /// Parse a hex-encoded private key (`0x` prefix optional).
    pub fn from_hex(private_key: &str) -> Result<Self, SignerError> {
        let trimmed = private_key.trim();
        let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(stripped).map_err(|_| SignerError::InvalidHex)?;
        if bytes.len() != 32 {
            return Err(SignerError::InvalidLength(bytes.len()));
        }
        let key = SigningKey::from_slice(&bytes).map_err(|_| SignerError::InvalidKey)?;
        Ok(Self::new(key))
    }

    /// Ethereum address of the signing key.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a 32-byte digest, returning `r || s || v` with `v` in {27, 28}.
    ///
    /// RFC 6979 nonces make the output deterministic; `s` is normalised to the lower half order.
    pub fn sign_digest(&self, digest: B256) -> Result<[u8; 65], SignerError> {
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(digest.as_slice())?;

        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&signature.to_bytes());
        out[64] = 27 + recovery_id.to_byte();
        Ok(out)
    }
}

impl fmt::Debug for GatewaySigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewaySigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Recover the signing address from a digest and a 65-byte `r || s || v` signature.
///
/// Accepts `v` in {0, 1, 27, 28}.
pub fn recover_signer(digest: B256, sig: &[u8]) -> Result<Address, SignerError> {
    if sig.len() != 65 {
        return Err(SignerError::MalformedSignature);
    }
    let signature = Signature::from_slice(&sig[..64])?;
    let v = match sig[64] {
        27 | 28 => sig[64] - 27,
        0 | 1 => sig[64],
        _ => return Err(SignerError::MalformedSignature),
    };
    let recovery_id = RecoveryId::from_byte(v).ok_or(SignerError::MalformedSignature)?;
    let key = VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id)?;
    Ok(address_of(&key))
}

/// address = keccak256(uncompressed pubkey without the 0x04 tag)[12..].
fn address_of(key: &VerifyingKey) -> Address {
    let point = key.as_affine().to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}
