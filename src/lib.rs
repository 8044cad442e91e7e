//! Testnet Safe funding faucet library.

pub mod blockchain;
pub mod config;
pub mod funding;
pub mod http;

pub use config::FaucetConfig;
pub use funding::FundingService;
pub use http::HttpServer;
