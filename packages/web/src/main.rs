use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Home, Login};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use axum::routing::get;
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Sessions live in memory and vanish on restart; good enough for a demo.
    let session_store = MemoryStore::default();

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24).try_into().unwrap(),
        )); // 24 hours

    // Build the Dioxus app with custom routes
    let router = axum::Router::new()
        // OAuth login routes redirect the browser to the provider
        .route("/auth/github", get(github_login))
        .route("/auth/google", get(google_login))
        // Callback routes complete the flow and set the session
        .route("/auth/github/callback", get(github_callback))
        .route("/auth/google/callback", get(google_callback))
        // Then serve the Dioxus application
        .serve_dioxus_application(ServeConfig::new(), App)
        // Add session layer to all routes
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "server")]
async fn github_login() -> axum::response::Redirect {
    use axum::response::Redirect;

    match api::auth::GitHubOAuth::new() {
        Ok(oauth) => {
            tracing::info!("Redirecting to GitHub for authorization");
            Redirect::to(&oauth.authorize_url())
        }
        Err(e) => {
            tracing::error!("Failed to create GitHub OAuth: {}", e);
            Redirect::to("/login?error=config_error")
        }
    }
}

#[cfg(feature = "server")]
async fn google_login() -> axum::response::Redirect {
    use axum::response::Redirect;

    match api::auth::GoogleOAuth::new() {
        Ok(oauth) => {
            tracing::info!("Redirecting to Google for authorization");
            Redirect::to(&oauth.authorize_url())
        }
        Err(e) => {
            tracing::error!("Failed to create Google OAuth: {}", e);
            Redirect::to("/login?error=config_error")
        }
    }
}

/// Check callback query parameters before the token exchange: a provider
/// `error` or a missing `code` short-circuits to a `/login?error=...` path.
///
/// The provider error is filtered through [`api::auth::error_tag`] because
/// `Query` percent-decodes and `Redirect::to` panics on header-invalid input.
#[cfg(feature = "server")]
fn callback_code<'a>(
    provider: &str,
    params: &'a std::collections::HashMap<String, String>,
) -> Result<&'a str, String> {
    if let Some(error) = params.get("error") {
        tracing::error!("{} authorization error: {}", provider, error);
        return Err(format!("/login?error={}", api::auth::error_tag(error)));
    }
    match params.get("code") {
        Some(code) => Ok(code),
        None => {
            tracing::error!("{} callback missing code", provider);
            Err("/login?error=no_code".to_string())
        }
    }
}

#[cfg(feature = "server")]
async fn github_callback(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let code = match callback_code("GitHub", &params) {
        Ok(code) => code,
        Err(path) => return Redirect::to(&path),
    };

    match api::auth::GitHubOAuth::new() {
        Ok(oauth) => match oauth.exchange_code(code).await {
            Ok(profile) => {
                if let Err(e) = session.insert(api::auth::SESSION_USER_KEY, &profile).await {
                    tracing::error!("Failed to set session: {}", e);
                    return Redirect::to("/login?error=session_error");
                }
                tracing::info!("{} logged in via GitHub", profile.display_name());
                Redirect::to("/")
            }
            Err(e) => {
                tracing::error!("GitHub OAuth error: {}", e);
                Redirect::to("/login?error=oauth_error")
            }
        },
        Err(e) => {
            tracing::error!("Failed to create GitHub OAuth: {}", e);
            Redirect::to("/login?error=config_error")
        }
    }
}

#[cfg(feature = "server")]
async fn google_callback(
    axum::extract::Query(params): axum::extract::Query<std::collections::HashMap<String, String>>,
    session: tower_sessions::Session,
) -> axum::response::Redirect {
    use axum::response::Redirect;

    let code = match callback_code("Google", &params) {
        Ok(code) => code,
        Err(path) => return Redirect::to(&path),
    };

    match api::auth::GoogleOAuth::new() {
        Ok(oauth) => match oauth.exchange_code(code).await {
            Ok(profile) => {
                if let Err(e) = session.insert(api::auth::SESSION_USER_KEY, &profile).await {
                    tracing::error!("Failed to set session: {}", e);
                    return Redirect::to("/login?error=session_error");
                }
                tracing::info!("{} logged in via Google", profile.display_name());
                Redirect::to("/")
            }
            Err(e) => {
                tracing::error!("Google OAuth exchange error: {}", e);
                Redirect::to("/login?error=oauth_error")
            }
        },
        Err(e) => {
            tracing::error!("Failed to create Google OAuth: {}", e);
            Redirect::to("/login?error=config_error")
        }
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_callback_code_returns_code() {
        let params = params(&[("code", "abc123"), ("state", "github")]);
        assert_eq!(callback_code("GitHub", &params), Ok("abc123"));
    }

    #[test]
    fn test_callback_passes_through_provider_error_tag() {
        let params = params(&[("error", "access_denied")]);
        assert_eq!(
            callback_code("Google", &params),
            Err("/login?error=access_denied".to_string())
        );
    }

    #[test]
    fn test_callback_collapses_header_invalid_error() {
        // Query extraction percent-decodes, so ?error=x%0d%0ay arrives as a
        // CRLF-bearing value; it must not reach the Location header raw.
        let params = params(&[("error", "x\r\ny")]);
        assert_eq!(
            callback_code("GitHub", &params),
            Err("/login?error=oauth_error".to_string())
        );
    }

    #[test]
    fn test_callback_without_code_redirects_no_code() {
        let params = params(&[("state", "github")]);
        assert_eq!(
            callback_code("GitHub", &params),
            Err("/login?error=no_code".to_string())
        );
    }
}
