//! Reconciles seed data, local overrides, and tombstones into one logical
//! dataset per entity collection.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::auth::repo_types::User;
use crate::houses::repo_types::House;
use crate::reservations::repo_types::Reservation;
use crate::seed;
use crate::state::AppState;
use crate::storage::{self, DELETED_HOUSES_KEY, HOUSES_KEY, RESERVATIONS_KEY, USERS_KEY};

/// The full merged dataset, the only view callers ever read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub houses: Vec<House>,
    pub reservations: Vec<Reservation>,
}

/// Merge two row lists keyed by natural identity. Local rows replace
/// same-key seed rows in place; rows with new keys are appended. The result
/// preserves first-insertion order, so a fixed seed file always produces the
/// same ordering.
fn merge_by_key<T, K, F>(seed: Vec<T>, local: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut rows: Vec<T> = Vec::with_capacity(seed.len() + local.len());
    let mut index: HashMap<K, usize> = HashMap::new();
    for row in seed.into_iter().chain(local) {
        match index.entry(key(&row)) {
            Entry::Occupied(slot) => rows[*slot.get()] = row,
            Entry::Vacant(slot) => {
                slot.insert(rows.len());
                rows.push(row);
            }
        }
    }
    rows
}

/// Users merge on lowercased email, the collection's natural identity.
pub(crate) async fn merged_users(state: &AppState) -> Vec<User> {
    let seeded = seed::load_seed(&state.config.seed_dir, seed::USERS_SEED).await;
    let local = storage::read_collection(state.store.as_ref(), USERS_KEY).await;
    merge_by_key(seeded, local, |u: &User| u.email.to_lowercase())
}

/// Houses merge on id, then tombstoned ids are removed. Tombstones exist
/// because the seed source itself cannot be mutated.
pub(crate) async fn merged_houses(state: &AppState) -> Vec<House> {
    let seeded = seed::load_seed(&state.config.seed_dir, seed::HOUSES_SEED).await;
    let local = storage::read_collection(state.store.as_ref(), HOUSES_KEY).await;
    let deleted: Vec<i64> =
        storage::read_collection(state.store.as_ref(), DELETED_HOUSES_KEY).await;
    let mut houses = merge_by_key(seeded, local, |h: &House| h.id);
    houses.retain(|h| !deleted.contains(&h.id));
    houses
}

pub(crate) async fn merged_reservations(state: &AppState) -> Vec<Reservation> {
    let seeded = seed::load_seed(&state.config.seed_dir, seed::RESERVATIONS_SEED).await;
    let local = storage::read_collection(state.store.as_ref(), RESERVATIONS_KEY).await;
    merge_by_key(seeded, local, |r: &Reservation| r.id)
}

/// Load the merged dataset. Over an empty local store this returns exactly
/// the seed, which is how first-access seeding happens.
#[instrument(skip(state))]
pub async fn fetch_all(state: &AppState) -> Snapshot {
    state.simulate_latency().await;
    Snapshot {
        users: merged_users(state).await,
        houses: merged_houses(state).await,
        reservations: merged_reservations(state).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
    }

    fn row(id: i64, label: &'static str) -> Row {
        Row { id, label }
    }

    #[test]
    fn local_rows_replace_seed_rows_in_place() {
        let seed = vec![row(1, "seed-1"), row(2, "seed-2"), row(3, "seed-3")];
        let local = vec![row(2, "local-2")];
        let merged = merge_by_key(seed, local, |r| r.id);
        assert_eq!(
            merged,
            vec![row(1, "seed-1"), row(2, "local-2"), row(3, "seed-3")]
        );
    }

    #[test]
    fn new_local_rows_append_after_seed() {
        let seed = vec![row(1, "seed-1")];
        let local = vec![row(9, "local-9"), row(4, "local-4")];
        let merged = merge_by_key(seed, local, |r| r.id);
        assert_eq!(
            merged,
            vec![row(1, "seed-1"), row(9, "local-9"), row(4, "local-4")]
        );
    }

    #[test]
    fn later_duplicate_keys_win_within_local() {
        let local = vec![row(5, "first"), row(5, "second")];
        let merged = merge_by_key(Vec::new(), local, |r| r.id);
        assert_eq!(merged, vec![row(5, "second")]);
    }

    #[tokio::test]
    async fn tombstoned_house_is_hidden() {
        use crate::houses::repo;

        let state = AppState::fake();
        let house = crate::houses::repo_types::House {
            id: 7,
            name: "Casa del Borgo".into(),
            description: "two rooms".into(),
            long_description: "two rooms over the piazza".into(),
            capacity: 4,
            images: vec![],
            amenities: vec![],
            blocked_dates: vec![],
        };
        repo::upsert_local(state.store.as_ref(), &house).await;
        assert_eq!(merged_houses(&state).await.len(), 1);

        repo::add_tombstone(state.store.as_ref(), 7).await;
        assert!(merged_houses(&state).await.is_empty());
    }
}
