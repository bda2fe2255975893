use thiserror::Error;

use vaultwatch_chain::ChainError;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("RPC error: {0}")]
    Rpc(String),

    /// The protocol API answered 200 but flagged the request as failed; the
    /// raw body is kept so callers can see what the backend complained about.
    #[error("{api} API returned error: {body}")]
    Api { api: &'static str, body: String },

    #[error("{0} adapter not implemented yet")]
    NotImplemented(&'static str),

    #[error("config error: {0}")]
    Config(String),
}

impl From<ChainError> for MonitorError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Transport(e) => Self::Transport(e),
            // ChainError::Rpc already prefixes its Display with "RPC error:",
            // so unwrap the payload instead of nesting the message.
            ChainError::Rpc(payload) => Self::Rpc(payload.to_string()),
            ChainError::Json(e) => Self::Rpc(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_rpc_errors_keep_their_payload() {
        let chain_err = ChainError::Rpc(serde_json::json!({"code": -32602}));
        let err = MonitorError::from(chain_err);

        assert_eq!(err.to_string(), r#"RPC error: {"code":-32602}"#);
    }

    #[test]
    fn api_errors_name_the_backend() {
        let err = MonitorError::Api {
            api: "Voltr",
            body: r#"{"success":false}"#.to_string(),
        };

        assert_eq!(
            err.to_string(),
            r#"Voltr API returned error: {"success":false}"#
        );
    }

    #[test]
    fn stub_errors_name_the_adapter() {
        let err = MonitorError::NotImplemented("yearn");

        assert_eq!(err.to_string(), "yearn adapter not implemented yet");
    }
}
