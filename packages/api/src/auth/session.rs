//! Session key for the authenticated profile.

/// Key under which the [`UserProfile`](crate::models::UserProfile) is stored
/// in the server-side session.
pub const SESSION_USER_KEY: &str = "user";
