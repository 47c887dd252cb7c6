use crate::auth::repo_types::User;
use crate::storage::{self, StoreBackend, USERS_KEY};

pub(crate) async fn local_users(store: &dyn StoreBackend) -> Vec<User> {
    storage::read_collection(store, USERS_KEY).await
}

pub(crate) async fn append_local(store: &dyn StoreBackend, user: &User) {
    let mut rows = local_users(store).await;
    rows.push(user.clone());
    storage::write_collection(store, USERS_KEY, &rows).await;
}

/// Replace the local row matching the user's id or email, or append one.
/// Seeded users get their first local row here when they change a password.
pub(crate) async fn upsert_local(store: &dyn StoreBackend, user: &User) {
    let mut rows = local_users(store).await;
    let email = user.email.to_lowercase();
    match rows
        .iter_mut()
        .find(|u| u.id == user.id || u.email.to_lowercase() == email)
    {
        Some(slot) => *slot = user.clone(),
        None => rows.push(user.clone()),
    }
    storage::write_collection(store, USERS_KEY, &rows).await;
}
