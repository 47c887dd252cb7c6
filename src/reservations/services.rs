use tracing::{info, instrument, warn};

use crate::auth::dto::Actor;
use crate::auth::services::require_admin;
use crate::catalog;
use crate::error::{Error, Result};
use crate::reservations::dto::NewReservation;
use crate::reservations::repo;
use crate::reservations::repo_types::{Reservation, ReservationStatus};
use crate::state::AppState;

/// Submit a stay request. Open to any caller; every new request starts out
/// pending.
#[instrument(skip(state, payload))]
pub async fn add_reservation(state: &AppState, payload: NewReservation) -> Result<Reservation> {
    state.simulate_latency().await;

    let reservation = payload.into_reservation(state.ids.next());
    repo::append_local(state.store.as_ref(), &reservation).await;

    info!(
        reservation_id = reservation.id,
        house_id = reservation.house_id,
        "reservation submitted"
    );
    Ok(reservation)
}

/// Replace the status of an existing reservation, leaving every other field
/// untouched. There is no transition guard: a decided reservation can be
/// re-decided.
#[instrument(skip(state, actor))]
pub async fn update_reservation_status(
    state: &AppState,
    actor: &Actor,
    id: i64,
    status: ReservationStatus,
) -> Result<Reservation> {
    require_admin(actor)?;
    state.simulate_latency().await;

    let reservations = catalog::merged_reservations(state).await;
    let Some(mut reservation) = reservations.into_iter().find(|r| r.id == id) else {
        warn!(reservation_id = id, "status update for unknown reservation");
        return Err(Error::ReservationNotFound { id });
    };

    reservation.status = status;
    repo::upsert_local(state.store.as_ref(), &reservation).await;

    info!(reservation_id = id, status = ?status, "reservation status updated");
    Ok(reservation)
}
