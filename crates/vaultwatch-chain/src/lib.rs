pub mod client;
pub mod error;
pub mod types;

pub use client::{Encoding, SolanaRpcClient, TOKEN_PROGRAM_ID, http_client};
pub use error::ChainError;
pub use types::{AccountInfo, KeyedAccount, ParsedTokenInfo, TokenAmount};
