use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::config::AppConfig;
use crate::ids::IdGenerator;
use crate::storage::{JsonFileStore, MemoryStore, StoreBackend};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StoreBackend>,
    pub config: Arc<AppConfig>,
    pub ids: Arc<IdGenerator>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Arc::new(AppConfig::from_env()?);
        let store = Arc::new(
            JsonFileStore::new(config.store_dir.clone())
                .await
                .context("open backing store")?,
        ) as Arc<dyn StoreBackend>;

        Ok(Self::from_parts(store, config))
    }

    pub fn from_parts(store: Arc<dyn StoreBackend>, config: Arc<AppConfig>) -> Self {
        Self {
            store,
            config,
            ids: Arc::new(IdGenerator::new()),
        }
    }

    /// State over an in-memory store with zero delay. The seed directory
    /// points nowhere, so seeds resolve empty; tests that need seed rows
    /// build their own config through `from_parts`.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            seed_dir: "/nonexistent".into(),
            store_dir: "/nonexistent".into(),
            simulated_delay_ms: 0,
        });
        Self::from_parts(Arc::new(MemoryStore::default()), config)
    }

    pub(crate) async fn simulate_latency(&self) {
        let ms = self.config.simulated_delay_ms;
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
