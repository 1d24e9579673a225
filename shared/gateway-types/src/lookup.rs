use alloy_primitives::Address;

/// Outcome of a `getWallet(domainHash, sender)` lookup.
///
/// Absence is a value, not an error: the handler answers `NotRegistered` with the zero address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletLookup {
    /// The contract returned a wallet for the pair.
    Found(Address),
    /// The business has no wallet relationship for this sender.
    NotRegistered,
    /// The call failed for any other reason (revert, transport, malformed return).
    CallFailed(String),
}

