use thiserror::Error;

/// Typed failures surfaced by the facade services.
///
/// Storage failures never appear here: collection reads degrade to empty
/// lists and writes are logged and swallowed at the repository layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no user registered under {email}")]
    UserNotFound { email: String },

    #[error("house {id} does not exist")]
    HouseNotFound { id: i64 },

    #[error("reservation {id} does not exist")]
    ReservationNotFound { id: i64 },

    #[error("{email} is already registered")]
    DuplicateEmail { email: String },

    #[error("{email} is not a valid email address")]
    InvalidEmail { email: String },

    #[error("this operation requires the admin role")]
    PermissionDenied,
}

pub type Result<T> = std::result::Result<T, Error>;
