//! Data models shared between server and client.

mod user;

pub use user::UserProfile;
