//! Card showing the logged-in user's profile.

use api::UserProfile;
use dioxus::prelude::*;

/// Profile card with avatar, display name, email, and provider badge.
#[component]
pub fn ProfileCard(user: UserProfile) -> Element {
    let display_name = user.display_name().to_string();
    let provider_label = match user.provider.as_str() {
        "github" => "GitHub",
        "google" => "Google",
        other => other,
    };

    rsx! {
        div {
            class: "profile-card",

            if let Some(avatar_url) = &user.avatar_url {
                img {
                    class: "profile-avatar",
                    src: "{avatar_url}",
                    alt: "Avatar of {display_name}",
                }
            }

            h2 { class: "profile-name", "{display_name}" }

            if let Some(email) = &user.email {
                p { class: "profile-email", "{email}" }
            }

            span { class: "profile-provider", "Signed in with {provider_label}" }
        }
    }
}
