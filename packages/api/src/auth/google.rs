//! # Google OAuth 2.0 implementation
//!
//! Implements the plain Google Authorization Code flow for the demo. The
//! structure mirrors [`super::github`] but targets Google's endpoints and
//! scopes.
//!
//! ## Types
//!
//! - [`GoogleUser`] — deserialization target for the Google userinfo API
//!   response (`googleapis.com/oauth2/v2/userinfo`).
//! - [`ConfiguredClient`] — a fully-typed `oauth2::Client` alias with auth and
//!   token endpoints set.
//! - [`GoogleOAuth`] — the public handler that wraps an [`OAuthConfig`].
//!
//! ## Flow
//!
//! 1. **[`authorize_url`](GoogleOAuth::authorize_url)** — builds an
//!    authorization URL requesting the `openid`, `email`, and `profile`
//!    scopes. The `state` parameter is a fixed provider tag, not a CSRF
//!    token; the callback does not validate it.
//!
//! 2. **[`exchange_code`](GoogleOAuth::exchange_code)** — called by the
//!    `/auth/google/callback` route in the `web` crate. It exchanges the
//!    authorization code for an access token, fetches the user's profile from
//!    the Google userinfo endpoint, and maps it into a [`UserProfile`].

use oauth2::basic::BasicClient;
use oauth2::{AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, Scope, TokenResponse};
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use super::error::AuthError;
use crate::models::UserProfile;

/// Fixed `state` tag identifying the provider in the callback.
const STATE_TAG: &str = "google";

/// Google user info from API.
#[derive(Debug, Deserialize)]
struct GoogleUser {
    id: String,
    email: String,
    name: Option<String>,
    picture: Option<String>,
}

/// OAuth client type with auth URL and token URL set.
type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Google OAuth handler.
pub struct GoogleOAuth {
    config: OAuthConfig,
}

impl GoogleOAuth {
    /// Create a new Google OAuth handler from the environment.
    pub fn new() -> Result<Self, AuthError> {
        let config = OAuthConfig::google()?;
        Ok(Self { config })
    }

    /// Create a handler from an explicit configuration.
    pub fn from_config(config: OAuthConfig) -> Self {
        Self { config }
    }

    fn create_client(&self) -> ConfiguredClient {
        BasicClient::new(self.config.client_id.clone())
            .set_client_secret(self.config.client_secret.clone())
            .set_auth_uri(self.config.auth_url.clone())
            .set_token_uri(self.config.token_url.clone())
            .set_redirect_uri(self.config.redirect_url.clone())
    }

    /// Build the authorization URL the login route redirects to.
    pub fn authorize_url(&self) -> String {
        let (auth_url, _) = self
            .create_client()
            .authorize_url(|| CsrfToken::new(STATE_TAG.to_string()))
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        auth_url.to_string()
    }

    /// Exchange the authorization code for a token and fetch the user profile.
    pub async fn exchange_code(&self, code: &str) -> Result<UserProfile, AuthError> {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(AuthError::HttpClient)?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token_result.access_token().secret();

        // Fetch user info from the Google userinfo endpoint
        let api_client = Client::new();

        let google_user: GoogleUser = api_client
            .get("https://www.googleapis.com/oauth2/v2/userinfo")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await
            .map_err(AuthError::Profile)?
            .error_for_status()
            .map_err(AuthError::Profile)?
            .json()
            .await
            .map_err(AuthError::Profile)?;

        Ok(UserProfile {
            id: google_user.id,
            name: google_user.name,
            email: Some(google_user.email),
            avatar_url: google_user.picture,
            provider: STATE_TAG.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

    fn test_config() -> OAuthConfig {
        OAuthConfig {
            client_id: ClientId::new("test-id".to_string()),
            client_secret: ClientSecret::new("test-secret".to_string()),
            auth_url: AuthUrl::new("https://accounts.google.com/o/oauth2/v2/auth".to_string())
                .unwrap(),
            token_url: TokenUrl::new("https://oauth2.googleapis.com/token".to_string()).unwrap(),
            redirect_url: RedirectUrl::new(
                "http://localhost:8080/auth/google/callback".to_string(),
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_authorize_url_contents() {
        let oauth = GoogleOAuth::from_config(test_config());
        let url = oauth.authorize_url();

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=test-id"));
        assert!(url.contains("scope=openid+email+profile"));
        assert!(url.contains("state=google"));
    }

    #[test]
    fn test_user_deserialization() {
        let json = r#"{
            "id": "110248495921238986420",
            "email": "ada@example.com",
            "verified_email": true,
            "name": "Ada Lovelace",
            "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
        }"#;
        let user: GoogleUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "110248495921238986420");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.name.as_deref(), Some("Ada Lovelace"));
        assert!(user.picture.is_some());
    }
}
