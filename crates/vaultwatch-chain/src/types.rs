use serde::{Deserialize, Serialize};

/// One account as reported by `getAccountInfo` / `getTokenAccountsByOwner`.
///
/// `data` stays untyped because its shape depends on the requested encoding:
/// a `[data, "base64"]` pair for raw bytes, a parsed object for `jsonParsed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    #[serde(default)]
    pub rent_epoch: Option<u64>,
    #[serde(default)]
    pub space: Option<u64>,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl AccountInfo {
    /// Token-program view of the account, available under `jsonParsed`
    /// encoding only.
    pub fn parsed_token_info(&self) -> Option<ParsedTokenInfo> {
        let info = self.data.get("parsed")?.get("info")?;
        serde_json::from_value(info.clone()).ok()
    }
}

/// `data.parsed.info` of an SPL token account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTokenInfo {
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub token_amount: Option<TokenAmount>,
}

/// Decimal-adjusted token quantity as the node reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub amount: String,
    pub decimals: u8,
    #[serde(default)]
    pub ui_amount: Option<f64>,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}

/// Entry of an owner-scoped account listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyedAccount {
    pub pubkey: String,
    pub account: AccountInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_amount_parses_camel_case_fields() {
        let amount: TokenAmount = serde_json::from_value(json!({
            "amount": "229064411",
            "decimals": 6,
            "uiAmount": 229.064411,
            "uiAmountString": "229.064411"
        }))
        .unwrap();

        assert_eq!(amount.decimals, 6);
        assert_eq!(amount.ui_amount, Some(229.064_411));
        assert_eq!(amount.amount, "229064411");
    }

    #[test]
    fn token_amount_tolerates_null_ui_amount() {
        let amount: TokenAmount = serde_json::from_value(json!({
            "amount": "0",
            "decimals": 9,
            "uiAmount": null
        }))
        .unwrap();

        assert_eq!(amount.ui_amount, None);
    }

    #[test]
    fn parsed_token_info_reads_owner_from_json_parsed_data() {
        let account: AccountInfo = serde_json::from_value(json!({
            "lamports": 2_039_280u64,
            "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
            "executable": false,
            "rentEpoch": 361,
            "data": {
                "program": "spl-token",
                "parsed": {
                    "type": "account",
                    "info": {
                        "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                        "owner": "8jApnATxDfBbbJFf9rTvgqyC3bwTYmD6CetE9WMlWRfc",
                        "tokenAmount": {
                            "amount": "1000000",
                            "decimals": 6,
                            "uiAmount": 1.0,
                            "uiAmountString": "1"
                        }
                    }
                }
            }
        }))
        .unwrap();

        let parsed = account.parsed_token_info().unwrap();
        assert_eq!(
            parsed.owner.as_deref(),
            Some("8jApnATxDfBbbJFf9rTvgqyC3bwTYmD6CetE9WMlWRfc")
        );
        assert_eq!(
            parsed.token_amount.and_then(|a| a.ui_amount),
            Some(1.0)
        );
    }

    #[test]
    fn parsed_token_info_is_absent_for_base64_data() {
        let account: AccountInfo = serde_json::from_value(json!({
            "lamports": 2_039_280u64,
            "owner": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA",
            "executable": false,
            "data": ["dGVzdA==", "base64"]
        }))
        .unwrap();

        assert!(account.parsed_token_info().is_none());
    }
}
