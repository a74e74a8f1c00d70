//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LoginButton, LogoutButton};

mod profile_card;
pub use profile_card::ProfileCard;

mod spinner;
pub use spinner::LoadingSpinner;
