//! Mythicbot Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the
//! bot. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, entity factories, fixtures and a mock Raider.IO server.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **MockRaiderIo**: Local HTTP server standing in for the Raider.IO API
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::WowCharacter;
//!
//! #[tokio::test]
//! async fn test_character_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(WowCharacter)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod raiderio;
