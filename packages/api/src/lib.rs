//! # API crate — shared fullstack server functions for the social login demo
//!
//! This crate sits between the web frontend and the OAuth providers. It defines
//! the server functions the frontend calls, along with the supporting modules
//! they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | OAuth handlers (GitHub, Google), provider configuration, session key |
//! | [`models`] | — | The [`UserProfile`] stored in the session and sent to the client |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` or `#[post(...)]` and compiled twice: once with full
//! server logic (behind `#[cfg(feature = "server")]`) and once as a thin client
//! stub that simply forwards the call over HTTP.
//!
//! - `get_current_user` — the session profile, or `None` when unauthenticated
//! - `logout` — destroys the session
//!
//! The OAuth login and callback routes are plain axum handlers in the `web`
//! crate; they are redirect flows, not fetchable endpoints.

use dioxus::prelude::*;

pub mod auth;
pub mod models;

pub use models::UserProfile;

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/user", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserProfile>, ServerFnError> {
    let user: Option<UserProfile> = session
        .get(auth::SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

#[cfg(not(feature = "server"))]
#[get("/api/user")]
pub async fn get_current_user() -> Result<Option<UserProfile>, ServerFnError> {
    Ok(None)
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}
