pub mod drift_vault;
pub mod voltr;
pub mod yearn;

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Client;

pub use drift_vault::DriftVaultAdapter;
pub use voltr::VoltrAdapter;
pub use yearn::YearnAdapter;

use crate::traits::VaultAdapter;

/// Adapters keyed by name; lookups are case-insensitive.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: BTreeMap<String, Arc<dyn VaultAdapter>>,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every known adapter, stubs included.
    pub fn with_defaults(http_client: Client) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(VoltrAdapter::new(http_client)));
        registry.register(Arc::new(DriftVaultAdapter));
        registry.register(Arc::new(YearnAdapter));
        registry
    }

    pub fn register(&mut self, adapter: Arc<dyn VaultAdapter>) {
        self.adapters.insert(adapter.name().to_string(), adapter);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn VaultAdapter>> {
        self.adapters.get(&name.to_lowercase()).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }
}
