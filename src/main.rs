//! Testnet Safe funding faucet.
//!
//! A minimal relay that funds addresses on a test network: fixed ether
//! sends and fixed ERC-20 transfers, broadcast through a JSON-RPC node.
//!
//! ```text
//!     POST {"text": ...}        ┌──────────────────────────────────┐
//!     ─────────────────────────▶│  http     (validate boundary)    │
//!                               │    │                             │
//!                               │    ▼                             │
//!                               │  funding  (nonce → build → sign) │
//!                               │    │                             │
//!                               │    ▼                             │
//!     "Watch on <explorer>/tx/" │  blockchain (RPC broadcast)      │──▶ node
//!     ◀─────────────────────────┴──────────────────────────────────┘
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use safe_faucet::blockchain::{FaucetWallet, RpcClient};
use safe_faucet::config::{loader::load_config, FaucetConfig};
use safe_faucet::funding::{FundingService, TokenTable};
use safe_faucet::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "safe_faucet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("safe-faucet v0.1.0 starting");

    // Load configuration: first CLI argument is a TOML file path,
    // defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => FaucetConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        node_url = %config.node.url,
        token_count = config.tokens.len(),
        "Configuration loaded"
    );

    // Derive the signing identity once; failure is fatal
    let wallet = FaucetWallet::from_env()?;

    let rpc = RpcClient::new(config.node.url.parse()?);
    let tokens = TokenTable::from_config(&config.tokens)?;
    let service = Arc::new(FundingService::new(
        rpc,
        wallet,
        tokens,
        config.funding.clone(),
    ));

    tracing::info!(sender = %service.sender(), "Funding service ready");

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    // Create and run HTTP server
    let server = HttpServer::new(&config, service);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
