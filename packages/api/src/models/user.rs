//! # User profile for authenticated users
//!
//! There is no user database in this demo: the profile fetched from the OAuth
//! provider during the callback is the whole record. It lives in the
//! server-side session for the lifetime of the cookie and crosses the
//! server/client boundary as-is via the `get_current_user` server function.

use serde::{Deserialize, Serialize};

/// Profile of a logged-in user, as reported by the OAuth provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Provider-assigned identifier. GitHub's numeric id is stringified so
    /// both providers share one shape.
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    /// Which provider authenticated this user: `"google"` or `"github"`.
    pub provider: String,
}

impl UserProfile {
    /// Get display name, falling back to email and then to the raw id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: "42".to_string(),
            name: Some("Octo Cat".to_string()),
            email: Some("octo@example.com".to_string()),
            avatar_url: None,
            provider: "github".to_string(),
        }
    }

    #[test]
    fn test_display_name_prefers_name() {
        assert_eq!(profile().display_name(), "Octo Cat");
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut p = profile();
        p.name = None;
        assert_eq!(p.display_name(), "octo@example.com");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut p = profile();
        p.name = None;
        p.email = None;
        assert_eq!(p.display_name(), "42");
    }

    #[test]
    fn test_round_trips_through_session_json() {
        let p = profile();
        let json = serde_json::to_string(&p).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
