//! Error type for the OAuth login flow.

use thiserror::Error;

/// Errors produced while logging a user in with an OAuth provider.
///
/// The callback handlers in the `web` crate log these and map every variant
/// to a `/login?error=...` redirect; nothing here reaches the client as-is.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} not set")]
    MissingEnv(&'static str),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] oauth2::url::ParseError),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The token endpoint rejected the code, timed out, or answered with an
    /// `error` field instead of a token.
    #[error("token exchange failed: {0}")]
    TokenExchange(String),

    #[error("profile request failed: {0}")]
    Profile(#[source] reqwest::Error),
}

/// Restrict a provider-supplied error code to something safe to embed in a
/// `Location` header. RFC 6749 error codes are plain snake_case tokens;
/// anything outside that shape (control characters included) collapses to a
/// generic `oauth_error`.
pub fn error_tag(raw: &str) -> &str {
    let valid = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.');

    if valid {
        raw
    } else {
        "oauth_error"
    }
}
