//! Login page view with OAuth buttons.

use dioxus::prelude::*;
use ui::{use_auth, LoginButton};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let error = use_signal(read_error_param);

    // If already logged in, go straight to the profile
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Home {});
    }

    rsx! {
        div {
            class: "login-container",

            h1 { class: "login-title", "Social Login Demo" }

            p { class: "login-subtitle", "Choose your preferred sign-in method:" }

            if let Some(err) = error() {
                div {
                    class: "error-banner",
                    "Authentication failed: {err}"
                }
            }

            div {
                class: "login-buttons",

                LoginButton {
                    provider: "github",
                    label: "Continue with GitHub",
                    class: "login-btn github-btn",
                }

                LoginButton {
                    provider: "google",
                    label: "Continue with Google",
                    class: "login-btn google-btn",
                }
            }
        }
    }
}

/// Read the `?error=` parameter left by a failed OAuth callback, then strip
/// the query string so a reload does not resurface the error.
fn read_error_param() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let search = location.search().ok()?;
        if search.is_empty() {
            return None;
        }
        let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
        let error = params.get("error")?;

        if let (Ok(history), Ok(path)) = (window.history(), location.pathname()) {
            let _ = history.replace_state_with_url(
                &web_sys::wasm_bindgen::JsValue::NULL,
                "",
                Some(&path),
            );
        }

        Some(error)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
