//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. They provide
//! in-memory entity models and the JSON payloads served by the mock Raider.IO server.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // In-memory entity model (no DB)
//! let character = fixture::wow_character::entity();
//!
//! // Raider.IO payload
//! let body = fixture::raiderio::character_profile_json();
//! ```

pub mod raiderio;
pub mod wow_character;

pub use wow_character::entity as wow_character_entity;
