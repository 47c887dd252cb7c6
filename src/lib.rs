//! Data layer for the Città Futura vacation-stays demo.
//!
//! Every operation goes through an asynchronous facade over a key-value
//! store holding JSON collections of users, houses and reservations. Reads
//! reconcile three sources into one logical dataset: an immutable seed
//! shipped with the application, locally persisted overrides, and a
//! tombstone list of deleted house ids. A configurable artificial delay in
//! front of each operation lets embedding UIs exercise their loading states.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod houses;
pub mod ids;
pub mod logging;
pub mod reservations;
mod seed;
pub mod state;
pub mod storage;

pub use auth::dto::{Actor, NewUser};
pub use auth::repo_types::{Role, User};
pub use catalog::{fetch_all, Snapshot};
pub use error::{Error, Result};
pub use houses::dto::NewHouse;
pub use houses::repo_types::House;
pub use reservations::dto::NewReservation;
pub use reservations::repo_types::{Reservation, ReservationStatus};
pub use state::AppState;
