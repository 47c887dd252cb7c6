use serde::Deserialize;

use crate::auth::repo_types::{Role, User};

/// Payload for user registration. Id, role and hash are assigned by the
/// service; registration always produces a regular user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Caller identity the mutating services check roles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub role: Role,
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            role: user.role,
        }
    }
}
