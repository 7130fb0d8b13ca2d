//! Raider.IO API client.
//!
//! Wraps the two endpoints the bot needs:
//!
//! - `GET {api_url}/connected-realms` - realm listing per region, flattened into
//!   [`RealmEntry`] records and cached in memory per region
//! - `GET {api_url}/{version}/characters/profile` - a character profile with an
//!   explicit set of optional [`ProfileFields`] selectors
//!
//! Every request is bounded by the configured timeout. Nothing is retried; callers
//! see a [`RaiderIoError`](crate::error::raiderio::RaiderIoError) per failure class.

pub mod cache;
pub mod client;
pub mod field;
pub mod model;

#[cfg(test)]
mod test;

pub use client::RaiderIoClient;
pub use field::ProfileFields;
pub use model::{CharacterProfile, RealmEntry};
