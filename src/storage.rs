use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

/// Well-known collection keys in the backing store. Part of the persisted
/// format; renaming them orphans existing data.
pub const USERS_KEY: &str = "cittafutura_users";
pub const HOUSES_KEY: &str = "cittafutura_houses";
pub const RESERVATIONS_KEY: &str = "cittafutura_reservations";
pub const DELETED_HOUSES_KEY: &str = "cittafutura_deleted_houses";

/// Durable key-value port the repositories write through. Swapping the
/// backing store never touches call sites.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// File-backed store: one JSON document per key under `dir`.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub async fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("create store directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StoreBackend for JsonFileStore {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path_for(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
        }
    }

    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.path_for(key);
        tokio::fs::write(&path, value)
            .await
            .with_context(|| format!("write {}", path.display()))
    }
}

/// In-memory store backing `AppState::fake` and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl StoreBackend for MemoryStore {
    async fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a JSON collection. Any storage or decode failure is logged and
/// degrades to an empty collection; callers never see it.
pub(crate) async fn read_collection<T: DeserializeOwned>(
    store: &dyn StoreBackend,
    key: &str,
) -> Vec<T> {
    let raw = match store.read(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            error!(key, error = %e, "failed to read collection, falling back to empty");
            return Vec::new();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(rows) => rows,
        Err(e) => {
            error!(key, error = %e, "failed to decode collection, falling back to empty");
            Vec::new()
        }
    }
}

/// Persist a JSON collection. Write failures are logged and swallowed; the
/// caller proceeds with its in-memory result either way.
pub(crate) async fn write_collection<T: Serialize>(
    store: &dyn StoreBackend,
    key: &str,
    rows: &[T],
) {
    let raw = match serde_json::to_string(rows) {
        Ok(raw) => raw,
        Err(e) => {
            error!(key, error = %e, "failed to encode collection, skipping write");
            return;
        }
    };
    if let Err(e) = store.write(key, &raw).await {
        error!(key, error = %e, "failed to persist collection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_store_roundtrip() {
        let store = MemoryStore::default();
        assert!(store.read("missing").await.unwrap().is_none());
        store.write("k", "[1,2]").await.unwrap();
        assert_eq!(store.read("k").await.unwrap().as_deref(), Some("[1,2]"));
    }

    #[tokio::test]
    async fn json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert!(store.read(USERS_KEY).await.unwrap().is_none());
        store.write(USERS_KEY, r#"[{"a":1}]"#).await.unwrap();
        assert_eq!(
            store.read(USERS_KEY).await.unwrap().as_deref(),
            Some(r#"[{"a":1}]"#)
        );
    }

    #[tokio::test]
    async fn corrupt_collection_degrades_to_empty() {
        let store = MemoryStore::default();
        store.write(HOUSES_KEY, "{ not json").await.unwrap();
        let rows: Vec<i64> = read_collection(&store, HOUSES_KEY).await;
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn write_then_read_collection() {
        let store = MemoryStore::default();
        write_collection(&store, DELETED_HOUSES_KEY, &[1i64, 2, 3]).await;
        let rows: Vec<i64> = read_collection(&store, DELETED_HOUSES_KEY).await;
        assert_eq!(rows, vec![1, 2, 3]);
    }
}
