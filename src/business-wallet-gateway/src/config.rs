use std::{
    fmt,
    net::{IpAddr, SocketAddr},
    time::Duration,
};

use alloy_primitives::Address;
use clap::Parser;

/// Longest accepted `TTL`, in seconds (about 136 years). Keeps `now + ttl` far from `u64::MAX`.
pub const MAX_TTL_SECS: u64 = u32::MAX as u64;

/// Gateway configuration, read once at startup from flags or the environment.
///
/// Every flag has an environment equivalent so the gateway can be configured purely via `.env`.
#[derive(Parser, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Hex-encoded secp256k1 key used to sign responses (0x prefix optional).
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    /// JSON-RPC endpoint of the chain hosting the business wallets resolver.
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: String,

    /// Address of the business wallets resolver contract (`getWallet(bytes32,address)`).
    #[arg(long = "resolver-address", env = "BUSINESS_WALLETS_RESOLVER_ADDRESS")]
    pub resolver_address: Address,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Interface to bind.
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: IpAddr,

    /// Seconds a signed response stays valid.
    #[arg(
        long,
        env = "TTL",
        default_value_t = 300,
        value_parser = clap::value_parser!(u64).range(1..=MAX_TTL_SECS)
    )]
    pub ttl: u64,

    /// Path prefix the CCIP-Read routes are mounted under.
    #[arg(long = "gateway-path", env = "GATEWAY_PATH", default_value = "/gateway")]
    pub gateway_path: String,

    /// Upper bound, in seconds, on the upstream `getWallet` call.
    #[arg(long, env = "LOOKUP_TIMEOUT", default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub lookup_timeout: u64,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout)
    }

    /// Mount path normalised to a leading slash and no trailing slash.
    pub fn mount_path(&self) -> String {
        let trimmed = self.gateway_path.trim_matches('/');
        format!("/{trimmed}")
    }
}

// Hand-written so the signing key never reaches logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("resolver_address", &self.resolver_address)
            .field("port", &self.port)
            .field("bind_address", &self.bind_address)
            .field("ttl", &self.ttl)
            .field("gateway_path", &self.gateway_path)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}
