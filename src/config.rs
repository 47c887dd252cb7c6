use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory holding the read-only seed documents.
    pub seed_dir: PathBuf,
    /// Directory the backing store writes its collections to.
    pub store_dir: PathBuf,
    /// Artificial latency injected in front of every facade operation.
    pub simulated_delay_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let seed_dir = std::env::var("CITTAFUTURA_SEED_DIR")
            .unwrap_or_else(|_| "data".into())
            .into();
        let store_dir = std::env::var("CITTAFUTURA_STORE_DIR")
            .unwrap_or_else(|_| ".cittafutura".into())
            .into();
        let simulated_delay_ms = std::env::var("CITTAFUTURA_DELAY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(200);
        Ok(Self {
            seed_dir,
            store_dir,
            simulated_delay_ms,
        })
    }
}
