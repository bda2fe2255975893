use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};

use crate::{
    error::ChainError,
    types::{AccountInfo, KeyedAccount, TokenAmount},
};

/// SPL token program; owner-scoped account listings are filtered to it.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

/// Per-request ceiling for node round-trips; a stalled node must not hang
/// the caller.
const RPC_TIMEOUT: Duration = Duration::from_secs(15);

/// Account data encoding requested from the node. `jsonParsed` is needed to
/// read a token account's owner field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    JsonParsed,
}

impl Encoding {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base64 => "base64",
            Self::JsonParsed => "jsonParsed",
        }
    }
}

/// Read-only JSON-RPC client for one Solana node.
///
/// Holds a shared `reqwest::Client` (the outbound connection pool) plus the
/// endpoint URL; every operation is a single POST with the standard
/// `{jsonrpc, id, method, params}` envelope.
pub struct SolanaRpcClient {
    http_client: Client,
    rpc_url: String,
}

impl SolanaRpcClient {
    pub fn new(http_client: Client, rpc_url: &str) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.to_string(),
        }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn call(&self, method: &'static str, params: Value) -> Result<Value, ChainError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        tracing::debug!(method, url = %self.rpc_url, "sending RPC request");

        let response = self
            .http_client
            .post(&self.rpc_url)
            .timeout(RPC_TIMEOUT)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.json::<Value>().await?;
        extract_result(body)
    }

    /// Raw account lookup; `None` when the chain reports no account at the
    /// address.
    pub async fn get_account_info(
        &self,
        address: &str,
        encoding: Encoding,
    ) -> Result<Option<AccountInfo>, ChainError> {
        let result = self
            .call(
                "getAccountInfo",
                json!([address, { "encoding": encoding.as_str() }]),
            )
            .await?;
        parse_value(&result)
    }

    /// Decimal-adjusted balance of one token account. Absence of an account
    /// or of a balance is a valid zero, not an error.
    pub async fn get_token_balance(&self, token_account: &str) -> Result<f64, ChainError> {
        let result = self
            .call("getTokenAccountBalance", json!([token_account]))
            .await?;
        let amount: Option<TokenAmount> = parse_value(&result)?;
        Ok(amount.and_then(|a| a.ui_amount).unwrap_or(0.0))
    }

    /// Decimal-adjusted total supply of a fungible-token mint; zero under
    /// the same absence condition as [`Self::get_token_balance`].
    pub async fn get_token_supply(&self, mint: &str) -> Result<f64, ChainError> {
        let result = self.call("getTokenSupply", json!([mint])).await?;
        let amount: Option<TokenAmount> = parse_value(&result)?;
        Ok(amount.and_then(|a| a.ui_amount).unwrap_or(0.0))
    }

    /// All SPL token accounts whose token-program owner equals `owner`;
    /// empty when there are none.
    pub async fn get_token_accounts_by_owner(
        &self,
        owner: &str,
    ) -> Result<Vec<KeyedAccount>, ChainError> {
        let result = self
            .call(
                "getTokenAccountsByOwner",
                json!([
                    owner,
                    { "programId": TOKEN_PROGRAM_ID },
                    { "encoding": Encoding::JsonParsed.as_str() },
                ]),
            )
            .await?;
        let accounts: Option<Vec<KeyedAccount>> = parse_value(&result)?;
        Ok(accounts.unwrap_or_default())
    }
}

/// Shared outbound HTTP client. No global timeout on purpose: call sites
/// apply their own per-request ceilings.
pub fn http_client() -> Result<Client, ChainError> {
    Ok(Client::builder().build()?)
}

/// Splits the JSON-RPC envelope: an `error` member fails the call with the
/// raw payload, otherwise the `result` member is handed back as-is.
fn extract_result(mut body: Value) -> Result<Value, ChainError> {
    if let Some(error) = body.get("error") {
        return Err(ChainError::Rpc(error.clone()));
    }
    Ok(body
        .get_mut("result")
        .map(Value::take)
        .unwrap_or(Value::Null))
}

/// Pulls `result.value` out and deserializes it, treating JSON null (the
/// node's none-found sentinel) as absent.
fn parse_value<T: serde::de::DeserializeOwned>(result: &Value) -> Result<Option<T>, ChainError> {
    match result.get("value") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
    }
}
