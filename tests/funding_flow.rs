//! End-to-end funding flow tests against a mocked JSON-RPC node.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use safe_faucet::blockchain::{FaucetWallet, RpcClient};
use safe_faucet::config::FaucetConfig;
use safe_faucet::funding::{FundingService, TokenTable};
use safe_faucet::http::HttpServer;

const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

fn rpc_result(value: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": 1, "jsonrpc": "2.0", "result": value
    }))
}

/// Boot the faucet against the given mock node; returns its address.
async fn start_faucet(node: &MockServer) -> SocketAddr {
    let mut config = FaucetConfig::default();
    config.node.url = node.uri();

    let service = Arc::new(FundingService::new(
        RpcClient::new(config.node.url.parse().unwrap()),
        FaucetWallet::from_mnemonic(TEST_MNEMONIC).unwrap(),
        TokenTable::from_config(&config.tokens).unwrap(),
        config.funding.clone(),
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = HttpServer::new(&config, service).into_router();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn post_text(addr: SocketAddr, route: &str, text: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("http://{addr}{route}"))
        .json(&serde_json::json!({ "text": text }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fund_account_end_to_end() {
    let node = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("eth_getTransactionCount"))
        .respond_with(rpc_result(serde_json::json!("0x5")))
        .mount(&node)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("eth_sendRawTransaction"))
        .respond_with(rpc_result(serde_json::json!("0xdead")))
        .mount(&node)
        .await;

    let addr = start_faucet(&node).await;
    let response = post_text(addr, "/fund/account", &format!("0x{}", "a".repeat(40))).await;

    assert_eq!(response.status(), 200);
    let message: String = response.json().await.unwrap();
    assert_eq!(message, "Watch on https://rinkeby.etherscan.io/tx/0xdead");
}

#[tokio::test]
async fn test_fund_account_rejects_bad_address() {
    let node = MockServer::start().await;
    let addr = start_faucet(&node).await;

    let response = post_text(addr, "/fund/account", "0x1234").await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid safe address (format: <40 hex chars>)");
    assert!(node.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fund_safe_selects_second_token() {
    let node = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("eth_getTransactionCount"))
        .respond_with(rpc_result(serde_json::json!("0x5")))
        .mount(&node)
        .await;
    // the estimate must target the second configured token contract
    Mock::given(method("POST"))
        .and(body_string_contains("eth_estimateGas"))
        .and(body_string_contains("b3a4bc89d8517e0e2c9b66703d09d3029ffa1e6d"))
        .respond_with(rpc_result(serde_json::json!("0xc350")))
        .mount(&node)
        .await;
    Mock::given(method("POST"))
        .and(body_string_contains("eth_sendRawTransaction"))
        .respond_with(rpc_result(serde_json::json!("0xdead")))
        .mount(&node)
        .await;

    let addr = start_faucet(&node).await;
    let response = post_text(addr, "/fund/safe", &format!("0x{} 1", "b".repeat(40))).await;

    assert_eq!(response.status(), 200);
    let message: String = response.json().await.unwrap();
    assert_eq!(message, "Watch on https://rinkeby.etherscan.io/tx/0xdead");
}

#[tokio::test]
async fn test_fund_safe_validation_errors() {
    let node = MockServer::start().await;
    let addr = start_faucet(&node).await;
    let good = format!("0x{}", "b".repeat(40));

    let response = post_text(addr, "/fund/safe", &good).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid param number");

    let response = post_text(addr, "/fund/safe", &format!("{good} 3")).await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid token index");

    let response = post_text(addr, "/fund/safe", "0xnope 1").await;
    assert_eq!(response.status(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "invalid safe address (format: <40 hex chars>)");

    assert!(node.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_node_error_maps_to_bad_gateway() {
    let node = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1, "jsonrpc": "2.0", "error": "insufficient funds"
        })))
        .mount(&node)
        .await;

    let addr = start_faucet(&node).await;
    let response = post_text(addr, "/fund/account", &format!("0x{}", "a".repeat(40))).await;

    assert_eq!(response.status(), 502);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("insufficient funds"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let node = MockServer::start().await;
    let addr = start_faucet(&node).await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "ok");
}
