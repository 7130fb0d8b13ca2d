//! Typed shapes of Raider.IO JSON responses.
//!
//! Field names follow the upstream payloads exactly; unknown fields are ignored so
//! additions on the provider side do not break decoding.

pub mod character;
pub mod realm;

pub use character::CharacterProfile;
pub use realm::{ConnectedRealmsResponse, RealmEntry};
