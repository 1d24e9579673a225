use std::sync::Arc;

use alloy_primitives::keccak256;
use anyhow::{ensure, Context, Result};
use business_wallet_gateway::{
    server, signer::recover_signer, Config, Gateway, OnchainWalletDirectory,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // `.env` is optional; real environment variables take precedence.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let directory = OnchainWalletDirectory::connect(&config.rpc_url, config.resolver_address)?;
    let gateway = Gateway::from_config(&config, Arc::new(directory))
        .context("invalid PRIVATE_KEY")?;

    let probe = keccak256(b"business-wallet-gateway self-check");
    let sig = gateway.signer().sign_digest(probe)?;
    ensure!(
        recover_signer(probe, &sig)? == gateway.signer().address(),
        "signer self-check failed"
    );

    info!(
        signer = %gateway.signer().address(),
        resolver = %config.resolver_address,
        ttl = config.ttl,
        lookup_timeout = config.lookup_timeout,
        "gateway configured"
    );

    let mount_path = config.mount_path();
    let app = server::router(Arc::new(gateway), &mount_path);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed binding {addr}"))?;

    info!(%addr, path = %mount_path, "Gateway server running");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
