//! Registered character factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for inserting registered characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::wow_character::WowCharacterFactory;
///
/// let character = WowCharacterFactory::new(&db)
///     .guild_id("987654321")
///     .user_id("123456789")
///     .character_name("Jaina")
///     .region("eu")
///     .realm("silvermoon")
///     .build()
///     .await?;
/// ```
pub struct WowCharacterFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    character_name: String,
    region: String,
    realm: String,
    registered_at: DateTime<Utc>,
}

impl<'a> WowCharacterFactory<'a> {
    /// Creates a new WowCharacterFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"987654321"`
    /// - user_id: `"123456789"`
    /// - character_name: `"Character{id}"` where id is auto-incremented
    /// - region: `"us"`
    /// - realm: `"area-52"`
    /// - registered_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: "987654321".to_string(),
            user_id: "123456789".to_string(),
            character_name: format!("Character{}", id),
            region: "us".to_string(),
            realm: "area-52".to_string(),
            registered_at: Utc::now(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn character_name(mut self, character_name: impl Into<String>) -> Self {
        self.character_name = character_name.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = realm.into();
        self
    }

    /// Sets the registration timestamp, useful for ordering tests.
    pub fn registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::wow_character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate key)
    pub async fn build(self) -> Result<entity::wow_character::Model, DbErr> {
        entity::wow_character::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            character_name: ActiveValue::Set(self.character_name),
            region: ActiveValue::Set(self.region),
            realm: ActiveValue::Set(self.realm),
            registered_at: ActiveValue::Set(self.registered_at),
        }
        .insert(self.db)
        .await
    }
}

/// Registers a character for the given guild and user with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Guild the registration belongs to
/// - `user_id` - Discord user owning the character
pub async fn create_character(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::wow_character::Model, DbErr> {
    WowCharacterFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .build()
        .await
}
