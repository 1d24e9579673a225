//! Shared types for DNS-encoded names, namehashes and wallet lookups.

pub mod dns;
pub mod lookup;
pub mod namehash;

pub use dns::{decode_dns_name, encode_dns_name, DnsDecodeError, DnsEncodeError};
pub use lookup::WalletLookup;
pub use namehash::{labelhash, namehash};

#[cfg(test)]
mod tests;
