pub mod health;
pub mod risk;
pub mod snapshot;
pub mod vaults;

pub use health::health;
pub use risk::evaluate_risk;
pub use snapshot::{create_snapshot, default_snapshot, snapshot_summary};
pub use vaults::{list_vaults, vault_snapshot};
