use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild::DiscordGuild;

pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a guild or refreshes the name of an existing one.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's identifier for the guild
    /// - `name` - Current guild name
    ///
    /// # Returns
    /// - `Ok(DiscordGuild)` - The stored guild
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, guild_id: &str, name: &str) -> Result<DiscordGuild, DbErr> {
        let guild = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            name: ActiveValue::Set(name.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_column(entity::discord_guild::Column::Name)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DiscordGuild::from_entity(guild))
    }

    /// Finds a guild by its Discord guild ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordGuild))`: Guild found in database
    /// - `Ok(None)`: Bot has never seen this guild
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: &str) -> Result<Option<DiscordGuild>, DbErr> {
        let guild = entity::prelude::DiscordGuild::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        Ok(guild.map(DiscordGuild::from_entity))
    }
}
