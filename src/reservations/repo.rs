use crate::reservations::repo_types::Reservation;
use crate::storage::{self, StoreBackend, RESERVATIONS_KEY};

pub(crate) async fn local_reservations(store: &dyn StoreBackend) -> Vec<Reservation> {
    storage::read_collection(store, RESERVATIONS_KEY).await
}

pub(crate) async fn append_local(store: &dyn StoreBackend, reservation: &Reservation) {
    let mut rows = local_reservations(store).await;
    rows.push(reservation.clone());
    storage::write_collection(store, RESERVATIONS_KEY, &rows).await;
}

/// Replace the local row with the reservation's id, or append one. Seeded
/// reservations get their first local row here when their status changes.
pub(crate) async fn upsert_local(store: &dyn StoreBackend, reservation: &Reservation) {
    let mut rows = local_reservations(store).await;
    match rows.iter_mut().find(|r| r.id == reservation.id) {
        Some(slot) => *slot = reservation.clone(),
        None => rows.push(reservation.clone()),
    }
    storage::write_collection(store, RESERVATIONS_KEY, &rows).await;
}
