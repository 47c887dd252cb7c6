use crate::houses::repo_types::House;
use crate::storage::{self, StoreBackend, DELETED_HOUSES_KEY, HOUSES_KEY};

pub(crate) async fn local_houses(store: &dyn StoreBackend) -> Vec<House> {
    storage::read_collection(store, HOUSES_KEY).await
}

pub(crate) async fn upsert_local(store: &dyn StoreBackend, house: &House) {
    let mut rows = local_houses(store).await;
    match rows.iter_mut().find(|h| h.id == house.id) {
        Some(slot) => *slot = house.clone(),
        None => rows.push(house.clone()),
    }
    storage::write_collection(store, HOUSES_KEY, &rows).await;
}

pub(crate) async fn remove_local(store: &dyn StoreBackend, id: i64) {
    let mut rows = local_houses(store).await;
    rows.retain(|h| h.id != id);
    storage::write_collection(store, HOUSES_KEY, &rows).await;
}

pub(crate) async fn tombstones(store: &dyn StoreBackend) -> Vec<i64> {
    storage::read_collection(store, DELETED_HOUSES_KEY).await
}

/// Record a deletion marker. Already-present ids are not duplicated.
pub(crate) async fn add_tombstone(store: &dyn StoreBackend, id: i64) {
    let mut ids = tombstones(store).await;
    if !ids.contains(&id) {
        ids.push(id);
        storage::write_collection(store, DELETED_HOUSES_KEY, &ids).await;
    }
}

pub(crate) async fn clear_tombstone(store: &dyn StoreBackend, id: i64) {
    let mut ids = tombstones(store).await;
    if ids.contains(&id) {
        ids.retain(|t| *t != id);
        storage::write_collection(store, DELETED_HOUSES_KEY, &ids).await;
    }
}
