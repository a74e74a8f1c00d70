//! Loading indicator shown while the session check is in flight.

use dioxus::prelude::*;

/// Centered spinner with a message underneath.
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading-container",
            div { class: "loading-spinner" }
            p { class: "loading-message", "{message}" }
        }
    }
}
