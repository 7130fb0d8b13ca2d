//! Registered character persistence.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::character::{CharacterRegistration, RegisterCharacterParam};

use entity::wow_character::Column;

pub struct WowCharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WowCharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a character for a user in a guild.
    ///
    /// A (guild, user, character) triple is stored once. Registering it again
    /// overwrites region and realm while the original `registered_at` is kept.
    ///
    /// # Arguments
    /// - `param` - Guild, user, character name, region and realm slug
    ///
    /// # Returns
    /// - `Ok(CharacterRegistration)` - The stored registration
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn register(
        &self,
        param: RegisterCharacterParam,
    ) -> Result<CharacterRegistration, DbErr> {
        let character =
            entity::prelude::WowCharacter::insert(entity::wow_character::ActiveModel {
                guild_id: ActiveValue::Set(param.guild_id),
                user_id: ActiveValue::Set(param.user_id),
                character_name: ActiveValue::Set(param.character_name),
                region: ActiveValue::Set(param.region),
                realm: ActiveValue::Set(param.realm),
                registered_at: ActiveValue::Set(Utc::now()),
            })
            .on_conflict(
                OnConflict::columns([Column::GuildId, Column::UserId, Column::CharacterName])
                    .update_columns([Column::Region, Column::Realm])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(CharacterRegistration::from_entity(character))
    }

    /// Lists every character a user registered in a guild.
    ///
    /// Ordered by registration time, then by name for registrations sharing a
    /// timestamp.
    pub async fn list(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Vec<CharacterRegistration>, DbErr> {
        let characters = entity::prelude::WowCharacter::find()
            .filter(Column::GuildId.eq(guild_id))
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::RegisteredAt)
            .order_by_asc(Column::CharacterName)
            .all(self.db)
            .await?;

        Ok(characters
            .into_iter()
            .map(CharacterRegistration::from_entity)
            .collect())
    }

    /// Finds a single registration by character name.
    ///
    /// # Returns
    /// - `Ok(Some(CharacterRegistration))` - Registration exists
    /// - `Ok(None)` - The user has no character with that name in the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        guild_id: &str,
        user_id: &str,
        character_name: &str,
    ) -> Result<Option<CharacterRegistration>, DbErr> {
        let character = entity::prelude::WowCharacter::find_by_id((
            guild_id.to_string(),
            user_id.to_string(),
            character_name.to_string(),
        ))
        .one(self.db)
        .await?;

        Ok(character.map(CharacterRegistration::from_entity))
    }

    /// Checks whether a user registered at least one character in a guild.
    pub async fn has_any(&self, guild_id: &str, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::WowCharacter::find()
            .filter(Column::GuildId.eq(guild_id))
            .filter(Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
