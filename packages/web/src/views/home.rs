//! Home view: the profile page for authenticated users.

use dioxus::prelude::*;
use ui::{use_auth, LoadingSpinner, LogoutButton, ProfileCard};

use crate::Route;

/// Shows the profile of the logged-in user, or bounces to the login page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().loading {
        return rsx! {
            LoadingSpinner { message: "Checking authentication..." }
        };
    }

    let Some(user) = auth().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    rsx! {
        div {
            class: "profile-page",

            ProfileCard { user }

            LogoutButton {
                label: "Sign out",
                class: "logout-btn",
            }
        }
    }
}
