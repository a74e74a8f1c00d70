//! # GitHub OAuth 2.0 implementation
//!
//! Implements the plain GitHub Authorization Code flow for the demo.
//!
//! ## Types
//!
//! - [`GitHubUser`] — deserialization target for the GitHub REST API response
//!   (`/user`).
//! - [`ConfiguredClient`] — a fully-typed `oauth2::Client` alias with auth and
//!   token endpoints set.
//! - [`GitHubOAuth`] — the public handler that wraps an [`OAuthConfig`].
//!
//! ## Flow
//!
//! 1. **[`authorize_url`](GitHubOAuth::authorize_url)** — builds an
//!    authorization URL requesting the `user:email` scope. The `state`
//!    parameter is a fixed provider tag, not a CSRF token; the callback does
//!    not validate it.
//!
//! 2. **[`exchange_code`](GitHubOAuth::exchange_code)** — called by the
//!    `/auth/github/callback` route in the `web` crate. It:
//!    - Exchanges the authorization code for an access token. GitHub's token
//!      endpoint occasionally hangs, so this single call carries a 10-second
//!      timeout; there are no retries. A `200` response whose body holds an
//!      `error` field instead of a token surfaces as a failed exchange.
//!    - Fetches the user's profile from `api.github.com/user` (GitHub rejects
//!      requests without a `User-Agent`) and maps it into a [`UserProfile`],
//!      falling back from `name` to `login`. The email may be absent when the
//!      user keeps it private.

use std::time::Duration;

use oauth2::basic::BasicClient;
use oauth2::{AuthorizationCode, CsrfToken, EndpointNotSet, EndpointSet, Scope, TokenResponse};
use reqwest::Client;
use serde::Deserialize;

use super::config::OAuthConfig;
use super::error::AuthError;
use crate::models::UserProfile;

/// Fixed `state` tag identifying the provider in the callback.
const STATE_TAG: &str = "github";

/// `User-Agent` sent to the GitHub API, which requires one.
const USER_AGENT: &str = "social-login-demo";

/// Single bounded attempt against the token endpoint.
const TOKEN_EXCHANGE_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub user info from API.
#[derive(Debug, Deserialize)]
struct GitHubUser {
    id: i64,
    login: String,
    email: Option<String>,
    name: Option<String>,
    avatar_url: Option<String>,
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

/// GitHub OAuth handler.
pub struct GitHubOAuth {
    config: OAuthConfig,
}

impl GitHubOAuth {
    /// Create a new GitHub OAuth handler from the environment.
    pub fn new() -> Result<Self, AuthError> {
        let config = OAuthConfig::github()?;
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
            .add_scope(Scope::new("user:email".to_string()))
            .url();

        auth_url.to_string()
    }

    /// Exchange the authorization code for a token and fetch the user profile.
    pub async fn exchange_code(&self, code: &str) -> Result<UserProfile, AuthError> {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(TOKEN_EXCHANGE_TIMEOUT)
            .build()
            .map_err(AuthError::HttpClient)?;

        let token_result = self
            .create_client()
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let access_token = token_result.access_token().secret();

        // Fetch user info from GitHub API
        let api_client = Client::new();

        let github_user: GitHubUser = api_client
            .get("https://api.github.com/user")
            .header("Authorization", format!("Bearer {}", access_token))
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(AuthError::Profile)?
            .error_for_status()
            .map_err(AuthError::Profile)?
            .json()
            .await
            .map_err(AuthError::Profile)?;

        Ok(UserProfile {
            id: github_user.id.to_string(),
            name: github_user.name.or(Some(github_user.login)),
            email: github_user.email,
            avatar_url: github_user.avatar_url,
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
            auth_url: AuthUrl::new("https://github.com/login/oauth/authorize".to_string())
                .unwrap(),
            token_url: TokenUrl::new("https://github.com/login/oauth/access_token".to_string())
                .unwrap(),
            redirect_url: RedirectUrl::new(
                "http://localhost:8080/auth/github/callback".to_string(),
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_authorize_url_contents() {
        let oauth = GitHubOAuth::from_config(test_config());
        let url = oauth.authorize_url();

        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("client_id=test-id"));
        assert!(url.contains("scope=user%3Aemail"));
        // Fixed provider tag, not a random CSRF token.
        assert!(url.contains("state=github"));
        assert!(url.contains("redirect_uri="));
    }

    #[test]
    fn test_user_deserialization_with_private_email() {
        let json = r#"{
            "id": 583231,
            "login": "octocat",
            "email": null,
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231"
        }"#;
        let user: GitHubUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 583231);
        assert_eq!(user.login, "octocat");
        assert!(user.email.is_none());
        assert!(user.name.is_none());
    }

    #[test]
    fn test_profile_falls_back_to_login() {
        let user = GitHubUser {
            id: 583231,
            login: "octocat".to_string(),
            email: None,
            name: None,
            avatar_url: None,
        };
        let profile = UserProfile {
            id: user.id.to_string(),
            name: user.name.or(Some(user.login)),
            email: user.email,
            avatar_url: user.avatar_url,
            provider: STATE_TAG.to_string(),
        };

        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.id, "583231");
        assert_eq!(profile.provider, "github");
    }
}
