use tracing::{info, instrument, warn};

use crate::auth::dto::Actor;
use crate::auth::services::require_admin;
use crate::catalog;
use crate::error::{Error, Result};
use crate::houses::dto::NewHouse;
use crate::houses::repo;
use crate::houses::repo_types::House;
use crate::state::AppState;

#[instrument(skip(state, actor, payload))]
pub async fn add_house(state: &AppState, actor: &Actor, payload: NewHouse) -> Result<House> {
    require_admin(actor)?;
    state.simulate_latency().await;

    let house = payload.into_house(state.ids.next());
    repo::clear_tombstone(state.store.as_ref(), house.id).await;
    repo::upsert_local(state.store.as_ref(), &house).await;

    info!(house_id = house.id, name = %house.name, "house added");
    Ok(house)
}

/// Upsert: an id unknown to local storage is stored as a new override, which
/// is also how seeded houses receive their first edit.
#[instrument(skip(state, actor, house))]
pub async fn edit_house(state: &AppState, actor: &Actor, house: House) -> Result<House> {
    require_admin(actor)?;
    state.simulate_latency().await;

    repo::upsert_local(state.store.as_ref(), &house).await;

    info!(house_id = house.id, "house edited");
    Ok(house)
}

/// Drop the local override and record a tombstone so the seed row stays
/// hidden across reloads. Idempotent; unknown ids are not an error.
#[instrument(skip(state, actor))]
pub async fn delete_house(state: &AppState, actor: &Actor, id: i64) -> Result<()> {
    require_admin(actor)?;
    state.simulate_latency().await;

    repo::remove_local(state.store.as_ref(), id).await;
    repo::add_tombstone(state.store.as_ref(), id).await;

    info!(house_id = id, "house deleted");
    Ok(())
}

/// Replace the blocked-date list wholesale.
#[instrument(skip(state, actor, dates))]
pub async fn update_blocked_dates(
    state: &AppState,
    actor: &Actor,
    house_id: i64,
    dates: Vec<String>,
) -> Result<House> {
    require_admin(actor)?;
    state.simulate_latency().await;

    let houses = catalog::merged_houses(state).await;
    let Some(mut house) = houses.into_iter().find(|h| h.id == house_id) else {
        warn!(house_id, "blocked-date update for unknown house");
        return Err(Error::HouseNotFound { id: house_id });
    };

    house.blocked_dates = dates;
    repo::upsert_local(state.store.as_ref(), &house).await;

    info!(house_id, blocked = house.blocked_dates.len(), "blocked dates replaced");
    Ok(house)
}
