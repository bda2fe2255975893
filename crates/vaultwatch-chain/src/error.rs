use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("RPC request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered with an explicit `error` body; the raw payload is
    /// kept for diagnostics.
    #[error("RPC error: {0}")]
    Rpc(serde_json::Value),

    #[error("unexpected RPC response: {0}")]
    Json(#[from] serde_json::Error),
}
