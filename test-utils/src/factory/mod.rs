//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible
//! defaults, reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::create_guild(&db).await?;
//!     let character = factory::wow_character::WowCharacterFactory::new(&db)
//!         .guild_id(&guild.guild_id)
//!         .user_id("123")
//!         .character_name("Jaina")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `discord_guild` - Create Discord guild entities
//! - `wow_character` - Create registered character entities
//! - `helpers` - Shared ID generation

pub mod discord_guild;
pub mod helpers;
pub mod wow_character;

pub use discord_guild::create_guild;
pub use wow_character::create_character;
