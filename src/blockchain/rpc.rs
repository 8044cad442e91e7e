//! JSON-RPC client for the funding node.
//!
//! # Responsibilities
//! - Build JSON-RPC 2.0 envelopes and POST them to one fixed endpoint
//! - Extract the `result` field, or surface the response `error`
//! - Propagate transport failures unmodified
//!
//! # Design Decisions
//! - A single attempt per call: no retry, no backoff, no timeout override.
//!   A failed call fails the whole funding request.
//! - The client is stateless; it mutates no local state.

use reqwest::header;
use serde_json::{json, Value};
use url::Url;

use crate::blockchain::types::{ChainError, ChainResult};

/// Stateless JSON-RPC 2.0 client bound to a single node endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl RpcClient {
    /// Create a client for the given node endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// The endpoint this client talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue a single JSON-RPC call and return its `result` field.
    ///
    /// Fails with [`ChainError::Rpc`] when the response carries no usable
    /// result, attaching the node's `error` field when present and
    /// `"Unknown error"` otherwise.
    pub async fn call(&self, method: &str, params: Value) -> ChainResult<Value> {
        let envelope = json!({
            "id": 1,
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json; UTF-8")
            .json(&envelope)
            .send()
            .await?;
        let body: Value = response.json().await?;

        match body.get("result") {
            Some(result) if !is_falsy(result) => Ok(result.clone()),
            _ => Err(ChainError::Rpc(error_message(&body))),
        }
    }
}

/// An absent, null, false, zero, or empty result counts as a failure.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_u64() == Some(0),
        _ => false,
    }
}

fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "Unknown error".to_string(),
    }
}

/// Parse an RPC quantity that may be hex (`0x...`) or decimal.
pub fn parse_quantity(value: &Value) -> ChainResult<u64> {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Number(n) => {
            return n
                .as_u64()
                .ok_or_else(|| ChainError::InvalidQuantity(n.to_string()))
        }
        other => return Err(ChainError::InvalidQuantity(other.to_string())),
    };

    let parsed = match text.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|_| ChainError::InvalidQuantity(text.to_string()))
}
