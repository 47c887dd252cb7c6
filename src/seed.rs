use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::warn;

pub(crate) const USERS_SEED: &str = "users.json";
pub(crate) const HOUSES_SEED: &str = "houses.json";
pub(crate) const RESERVATIONS_SEED: &str = "reservations.json";

/// Load one seed document. A missing or malformed file degrades to an empty
/// list; upstream only ever sees the merged dataset.
pub(crate) async fn load_seed<T: DeserializeOwned>(seed_dir: &Path, name: &str) -> Vec<T> {
    let path = seed_dir.join(name);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "seed document unavailable, using empty seed");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(rows) => rows,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "seed document malformed, using empty seed");
            Vec::new()
        }
    }
}
