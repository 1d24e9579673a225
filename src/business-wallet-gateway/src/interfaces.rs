//! Solidity ABI surface the gateway speaks.

use alloy_sol_types::sol;

sol! {
    /// Offchain resolver service: the callData carried by `OffchainLookup`.
    interface IResolverService {
        function resolve(bytes name, bytes data) external view returns (bytes result, uint64 expires, bytes sig);
    }

    /// Business wallets resolver: maps (namehash, sender) to a business wallet.
    interface IBusinessWalletsResolver {
        error BusinessNotRegistered();

        function getWallet(bytes32 domainHash, address sender) external view returns (address);
    }

    /// ENS `addr(bytes32)` (EIP-137).
    interface IAddrResolver {
        function addr(bytes32 node) external view returns (address);
    }

    /// ENS multicoin `addr(bytes32,uint256)` (ENSIP-9).
    interface IAddressResolver {
        function addr(bytes32 node, uint256 coinType) external view returns (bytes);
    }
}
