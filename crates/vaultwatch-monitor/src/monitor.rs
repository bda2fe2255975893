use std::sync::Arc;

use crate::config::{UserConfig, VaultConfig};
use crate::dto::{Snapshot, SnapshotDebug, SnapshotMeta, SourceResult, Sources};
use crate::error::MonitorError;
use crate::traits::VaultAdapter;

/// Aggregates every data source of one adapter into a single snapshot.
pub struct VaultMonitor {
    adapter: Arc<dyn VaultAdapter>,
}

impl VaultMonitor {
    pub fn new(adapter: Arc<dyn VaultAdapter>) -> Self {
        Self { adapter }
    }

    /// Fetches all sources concurrently and never fails: a source that errors
    /// is recorded in its slot while the others still land.
    pub async fn snapshot(
        &self,
        cfg: &VaultConfig,
        user_cfg: &UserConfig,
        include_token_accounts: bool,
    ) -> Snapshot {
        let (onchain, offchain, debug) = tokio::join!(
            self.adapter.onchain_snapshot(cfg, user_cfg),
            self.adapter.offchain_snapshot(cfg, user_cfg),
            self.debug_listing(cfg, include_token_accounts),
        );

        Snapshot {
            timestamp: chrono::Utc::now().timestamp(),
            vault: cfg.into(),
            user: user_cfg.into(),
            sources: Sources {
                onchain_idle: capture(&cfg.vault_pubkey, "onchain_idle", onchain),
                offchain: capture(&cfg.vault_pubkey, "offchain", offchain),
            },
            meta: SnapshotMeta {
                adapter: self.adapter.name().to_string(),
                rpc_url: cfg.rpc_url.clone(),
                api_base: cfg.api_base.clone(),
            },
            debug,
        }
    }

    async fn debug_listing(&self, cfg: &VaultConfig, include: bool) -> Option<SnapshotDebug> {
        if !include {
            return None;
        }

        let debug = match self.adapter.list_token_accounts(cfg).await {
            Ok(accounts) => SnapshotDebug {
                token_accounts: Some(accounts),
                token_accounts_error: None,
            },
            Err(err) => {
                tracing::warn!(vault = %cfg.vault_pubkey, error = %err, "token account listing failed");
                SnapshotDebug {
                    token_accounts: None,
                    token_accounts_error: Some(err.to_string()),
                }
            }
        };
        Some(debug)
    }
}

fn capture<T>(vault: &str, source: &'static str, result: Result<T, MonitorError>) -> SourceResult<T> {
    if let Err(err) = &result {
        tracing::warn!(vault = %vault, source, error = %err, "source fetch failed");
    }
    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use vaultwatch_types::Chain;

    use crate::adapters::YearnAdapter;
    use crate::dto::{OffchainData, OnchainIdleData, TokenAccountEntry};

    #[derive(Debug)]
    struct MockAdapter {
        fail_offchain: bool,
        fail_listing: bool,
    }

    impl MockAdapter {
        const fn healthy() -> Self {
            Self {
                fail_offchain: false,
                fail_listing: false,
            }
        }
    }

    #[async_trait]
    impl VaultAdapter for MockAdapter {
        fn name(&self) -> &'static str {
            "mock"
        }

        fn chain(&self) -> Chain {
            Chain::Sol
        }

        async fn onchain_snapshot(
            &self,
            _cfg: &VaultConfig,
            _user_cfg: &UserConfig,
        ) -> Result<OnchainIdleData, MonitorError> {
            Ok(OnchainIdleData {
                vault_nav_idle: 1_000.0,
                lp_supply: 500.0,
                user_lp: 50.0,
                lp_price_idle: 2.0,
                share_idle: 0.1,
                withdrawable_idle: 100.0,
                idle_ratio: 1.0,
            })
        }

        async fn offchain_snapshot(
            &self,
            _cfg: &VaultConfig,
            _user_cfg: &UserConfig,
        ) -> Result<OffchainData, MonitorError> {
            if self.fail_offchain {
                return Err(MonitorError::Api {
                    api: "Voltr",
                    body: r#"{"success":false}"#.to_string(),
                });
            }
            Ok(OffchainData {
                withdrawable: 99.5,
                raw: serde_json::json!({"success": true}),
            })
        }

        async fn list_token_accounts(
            &self,
            _cfg: &VaultConfig,
        ) -> Result<Vec<TokenAccountEntry>, MonitorError> {
            if self.fail_listing {
                return Err(MonitorError::Rpc("node unreachable".to_string()));
            }
            Ok(vec![TokenAccountEntry {
                address: "acc1".to_string(),
                mint: Some("mint1".to_string()),
                amount: Some(1.5),
                decimals: Some(6),
            }])
        }
    }

    fn monitor(adapter: MockAdapter) -> VaultMonitor {
        VaultMonitor::new(Arc::new(adapter))
    }

    #[tokio::test]
    async fn healthy_adapter_fills_both_sources() {
        let snapshot = monitor(MockAdapter::healthy())
            .snapshot(&VaultConfig::demo(), &UserConfig::demo(), false)
            .await;

        assert!(snapshot.sources.onchain_idle.ok);
        assert!(snapshot.sources.offchain.ok);
        assert!(snapshot.debug.is_none());
        assert_eq!(snapshot.meta.adapter, "mock");
        assert!(snapshot.timestamp > 0);
    }

    #[tokio::test]
    async fn failed_source_does_not_take_down_the_others() {
        let snapshot = monitor(MockAdapter {
            fail_offchain: true,
            fail_listing: false,
        })
        .snapshot(&VaultConfig::demo(), &UserConfig::demo(), false)
        .await;

        assert!(snapshot.sources.onchain_idle.ok);
        assert!(!snapshot.sources.offchain.ok);
        assert!(
            snapshot
                .sources
                .offchain
                .error
                .as_deref()
                .unwrap()
                .starts_with("Voltr API returned error:")
        );
    }

    #[tokio::test]
    async fn snapshot_shape_is_stable_across_outcomes() {
        let cfg = VaultConfig::demo();
        let user = UserConfig::demo();

        let healthy = monitor(MockAdapter::healthy()).snapshot(&cfg, &user, false).await;
        let degraded = monitor(MockAdapter {
            fail_offchain: true,
            fail_listing: false,
        })
        .snapshot(&cfg, &user, false)
        .await;

        let keys = |snapshot: &Snapshot| {
            let json = serde_json::to_value(snapshot).unwrap();
            let top: Vec<String> = json.as_object().unwrap().keys().cloned().collect();
            let sources: Vec<String> = json["sources"].as_object().unwrap().keys().cloned().collect();
            (top, sources)
        };

        assert_eq!(keys(&healthy), keys(&degraded));
    }

    #[tokio::test]
    async fn listing_failure_lands_in_the_debug_slot() {
        let snapshot = monitor(MockAdapter {
            fail_offchain: false,
            fail_listing: true,
        })
        .snapshot(&VaultConfig::demo(), &UserConfig::demo(), true)
        .await;

        let debug = snapshot.debug.unwrap();
        assert!(debug.token_accounts.is_none());
        assert_eq!(
            debug.token_accounts_error.as_deref(),
            Some("RPC error: node unreachable")
        );
        // Source slots are untouched by the debug failure.
        assert!(snapshot.sources.onchain_idle.ok);
    }

    #[tokio::test]
    async fn token_accounts_appear_when_requested() {
        let snapshot = monitor(MockAdapter::healthy())
            .snapshot(&VaultConfig::demo(), &UserConfig::demo(), true)
            .await;

        let debug = snapshot.debug.unwrap();
        let accounts = debug.token_accounts.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].address, "acc1");
    }

    #[tokio::test]
    async fn stub_adapters_degrade_every_source() {
        let snapshot = VaultMonitor::new(Arc::new(YearnAdapter))
            .snapshot(&VaultConfig::demo(), &UserConfig::demo(), false)
            .await;

        assert!(!snapshot.sources.onchain_idle.ok);
        assert!(!snapshot.sources.offchain.ok);
        assert_eq!(
            snapshot.sources.onchain_idle.error.as_deref(),
            Some("yearn adapter not implemented yet")
        );
    }
}
