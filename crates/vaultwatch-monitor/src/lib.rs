pub mod adapters;
pub mod config;
pub mod dto;
pub mod error;
pub mod monitor;
pub mod traits;

pub use adapters::{AdapterRegistry, DriftVaultAdapter, VoltrAdapter, YearnAdapter};
pub use config::{
    DEFAULT_API_BASE, DEFAULT_RPC_URL, DEMO_VAULT_NAME, RegisteredVault, UserConfig, VaultConfig,
    VaultRegistry,
};
pub use dto::{
    OffchainData, OnchainIdleData, Snapshot, SnapshotDebug, SnapshotMeta, SourceResult, Sources,
    TokenAccountEntry, UserIdentity, VaultIdentity,
};
pub use error::MonitorError;
pub use monitor::VaultMonitor;
pub use traits::VaultAdapter;

pub use vaultwatch_chain::http_client;
