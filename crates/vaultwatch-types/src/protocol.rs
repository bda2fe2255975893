use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Protocol family a risk model (and its adapters) applies to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ToSchema,
    Hash,
    Eq,
    PartialEq,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProtocolKind {
    #[strum(serialize = "lend", serialize = "money-market", to_string = "lending")]
    Lending,
    #[strum(serialize = "amm", serialize = "pool", to_string = "lp")]
    Lp,
    #[default]
    Vault,
}

impl ProtocolKind {
    /// Parses a free-form protocol tag. Tags outside the known set mean
    /// the vault model, so this never fails.
    pub fn from_tag(tag: &str) -> Self {
        Self::from_str(tag.trim()).unwrap_or_default()
    }
}

/// Chain family an adapter reads from.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Hash, Eq, PartialEq, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Sol,
    Evm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_tags_map_to_their_family() {
        assert_eq!(ProtocolKind::from_tag("lending"), ProtocolKind::Lending);
        assert_eq!(ProtocolKind::from_tag("lend"), ProtocolKind::Lending);
        assert_eq!(ProtocolKind::from_tag("money-market"), ProtocolKind::Lending);
        assert_eq!(ProtocolKind::from_tag("lp"), ProtocolKind::Lp);
        assert_eq!(ProtocolKind::from_tag("amm"), ProtocolKind::Lp);
        assert_eq!(ProtocolKind::from_tag("pool"), ProtocolKind::Lp);
        assert_eq!(ProtocolKind::from_tag("vault"), ProtocolKind::Vault);
    }

    #[test]
    fn unknown_tags_default_to_vault() {
        assert_eq!(ProtocolKind::from_tag(""), ProtocolKind::Vault);
        assert_eq!(ProtocolKind::from_tag("perp-dex"), ProtocolKind::Vault);
        assert_eq!(ProtocolKind::from_tag("  staking "), ProtocolKind::Vault);
    }

    #[test]
    fn tags_are_case_insensitive() {
        assert_eq!(ProtocolKind::from_tag("LENDING"), ProtocolKind::Lending);
        assert_eq!(ProtocolKind::from_tag("Money-Market"), ProtocolKind::Lending);
        assert_eq!(ProtocolKind::from_tag("AMM"), ProtocolKind::Lp);
    }

    #[test]
    fn display_uses_canonical_names() {
        assert_eq!(ProtocolKind::Lending.to_string(), "lending");
        assert_eq!(ProtocolKind::Lp.to_string(), "lp");
        assert_eq!(ProtocolKind::Vault.to_string(), "vault");
        assert_eq!(Chain::Sol.to_string(), "sol");
        assert_eq!(Chain::Evm.to_string(), "evm");
    }
}
