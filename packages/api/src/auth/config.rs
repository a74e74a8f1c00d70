//! OAuth configuration from environment variables.

use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};

use super::error::AuthError;

/// OAuth provider configuration.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
    pub auth_url: AuthUrl,
    pub token_url: TokenUrl,
    pub redirect_url: RedirectUrl,
}

impl OAuthConfig {
    /// Create GitHub OAuth config from environment variables.
    pub fn github() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let client_id = std::env::var("GITHUB_CLIENT_ID")
            .map_err(|_| AuthError::MissingEnv("GITHUB_CLIENT_ID"))?;
        let client_secret = std::env::var("GITHUB_CLIENT_SECRET")
            .map_err(|_| AuthError::MissingEnv("GITHUB_CLIENT_SECRET"))?;
        let redirect_uri = std::env::var("GITHUB_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/github/callback".to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new("https://github.com/login/oauth/authorize".to_string())?,
            token_url: TokenUrl::new("https://github.com/login/oauth/access_token".to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri)?,
        })
    }

    /// Create Google OAuth config from environment variables.
    pub fn google() -> Result<Self, AuthError> {
        dotenvy::dotenv().ok();

        let client_id = std::env::var("GOOGLE_CLIENT_ID")
            .map_err(|_| AuthError::MissingEnv("GOOGLE_CLIENT_ID"))?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
            .map_err(|_| AuthError::MissingEnv("GOOGLE_CLIENT_SECRET"))?;
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:8080/auth/google/callback".to_string());

        Ok(Self {
            client_id: ClientId::new(client_id),
            client_secret: ClientSecret::new(client_secret),
            auth_url: AuthUrl::new("https://accounts.google.com/o/oauth2/v2/auth".to_string())?,
            token_url: TokenUrl::new("https://oauth2.googleapis.com/token".to_string())?,
            redirect_url: RedirectUrl::new(redirect_uri)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_github_config_from_env() {
        set_var("GITHUB_CLIENT_ID", "gh-id");
        set_var("GITHUB_CLIENT_SECRET", "gh-secret");
        let config = OAuthConfig::github().unwrap();
        assert_eq!(config.client_id.as_str(), "gh-id");
        assert_eq!(
            config.redirect_url.as_str(),
            "http://localhost:8080/auth/github/callback"
        );
        assert_eq!(
            config.auth_url.as_str(),
            "https://github.com/login/oauth/authorize"
        );
    }

    #[test]
    fn test_google_config_from_env() {
        set_var("GOOGLE_CLIENT_ID", "goog-id");
        set_var("GOOGLE_CLIENT_SECRET", "goog-secret");
        set_var("GOOGLE_REDIRECT_URI", "http://localhost:4000/auth/google/callback");
        let config = OAuthConfig::google().unwrap();
        assert_eq!(config.client_id.as_str(), "goog-id");
        assert_eq!(
            config.redirect_url.as_str(),
            "http://localhost:4000/auth/google/callback"
        );
        assert_eq!(
            config.token_url.as_str(),
            "https://oauth2.googleapis.com/token"
        );
    }
}
