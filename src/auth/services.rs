use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::auth::dto::{Actor, NewUser};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo;
use crate::auth::repo_types::{Role, User};
use crate::catalog;
use crate::error::{Error, Result};
use crate::state::AppState;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Precondition for the privileged house and reservation-status mutations.
pub(crate) fn require_admin(actor: &Actor) -> Result<()> {
    if actor.role != Role::Admin {
        warn!(user_id = actor.user_id, "privileged operation refused");
        return Err(Error::PermissionDenied);
    }
    Ok(())
}

/// Case-insensitive email lookup plus password check. Unknown email and
/// wrong password both come back as `None`; no distinction is surfaced.
#[instrument(skip(state, password))]
pub async fn authenticate(state: &AppState, email: &str, password: &str) -> Option<User> {
    state.simulate_latency().await;

    let email = email.trim().to_lowercase();
    let users = catalog::merged_users(state).await;
    let user = users.into_iter().find(|u| u.email.to_lowercase() == email);

    match user {
        Some(u) if verify_password(password, &u.password_hash) => {
            info!(user_id = u.id, "login succeeded");
            Some(u)
        }
        _ => {
            warn!(%email, "invalid credentials");
            None
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn register(state: &AppState, mut payload: NewUser) -> Result<User> {
    state.simulate_latency().await;

    payload.email = payload.email.trim().to_string();
    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(Error::InvalidEmail {
            email: payload.email,
        });
    }

    let lowered = payload.email.to_lowercase();
    let users = catalog::merged_users(state).await;
    if users.iter().any(|u| u.email.to_lowercase() == lowered) {
        warn!(email = %payload.email, "email already registered");
        return Err(Error::DuplicateEmail {
            email: payload.email,
        });
    }

    let user = User {
        id: state.ids.next(),
        name: payload.name,
        email: payload.email,
        password_hash: hash_password(&payload.password),
        role: Role::User,
    };
    repo::append_local(state.store.as_ref(), &user).await;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(user)
}

#[instrument(skip(state, new_password))]
pub async fn update_password(state: &AppState, email: &str, new_password: &str) -> Result<User> {
    state.simulate_latency().await;

    let lowered = email.trim().to_lowercase();
    let users = catalog::merged_users(state).await;
    let Some(mut user) = users.into_iter().find(|u| u.email.to_lowercase() == lowered) else {
        warn!(%email, "password update for unknown email");
        return Err(Error::UserNotFound {
            email: email.to_string(),
        });
    };

    user.password_hash = hash_password(new_password);
    repo::upsert_local(state.store.as_ref(), &user).await;

    info!(user_id = user.id, "password updated");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Anna Bianchi".into(),
            email: email.into(),
            password: "vicolo-stretto-7".into(),
        }
    }

    #[tokio::test]
    async fn register_then_authenticate() {
        let state = AppState::fake();
        let user = register(&state, new_user("anna@example.com")).await.unwrap();
        assert_eq!(user.role, Role::User);

        let found = authenticate(&state, "anna@example.com", "vicolo-stretto-7").await;
        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn duplicate_email_differing_only_by_case_is_rejected() {
        let state = AppState::fake();
        register(&state, new_user("anna@example.com")).await.unwrap();

        let err = register(&state, new_user("ANNA@Example.COM"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateEmail { .. }));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let state = AppState::fake();
        let err = register(&state, new_user("not-an-email")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidEmail { .. }));
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_both_yield_none() {
        let state = AppState::fake();
        register(&state, new_user("anna@example.com")).await.unwrap();

        assert!(authenticate(&state, "anna@example.com", "wrong").await.is_none());
        assert!(authenticate(&state, "nobody@example.com", "x").await.is_none());
    }

    #[tokio::test]
    async fn authenticate_matches_email_case_insensitively() {
        let state = AppState::fake();
        register(&state, new_user("anna@example.com")).await.unwrap();

        let found = authenticate(&state, "  Anna@EXAMPLE.com ", "vicolo-stretto-7").await;
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn update_password_for_unknown_email_fails() {
        let state = AppState::fake();
        let err = update_password(&state, "ghost@example.com", "pw")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UserNotFound { .. }));
    }

    #[tokio::test]
    async fn update_password_replaces_only_the_hash() {
        let state = AppState::fake();
        let before = register(&state, new_user("anna@example.com")).await.unwrap();

        let after = update_password(&state, "anna@example.com", "nuova-parola")
            .await
            .unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.name, before.name);
        assert_ne!(after.password_hash, before.password_hash);

        assert!(authenticate(&state, "anna@example.com", "nuova-parola").await.is_some());
        assert!(authenticate(&state, "anna@example.com", "vicolo-stretto-7").await.is_none());
    }

    #[tokio::test]
    async fn require_admin_refuses_regular_users() {
        let actor = Actor {
            user_id: 1,
            role: Role::User,
        };
        assert!(matches!(
            require_admin(&actor).unwrap_err(),
            Error::PermissionDenied
        ));

        let admin = Actor {
            user_id: 2,
            role: Role::Admin,
        };
        assert!(require_admin(&admin).is_ok());
    }
}
