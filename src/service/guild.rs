use sea_orm::DatabaseConnection;

use crate::{data::DiscordGuildRepository, error::AppError, model::guild::DiscordGuild};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a guild the bot joined or reconnected to, refreshing its name.
    pub async fn register_guild(&self, guild_id: &str, name: &str) -> Result<DiscordGuild, AppError> {
        let guild = DiscordGuildRepository::new(self.db)
            .upsert(guild_id, name)
            .await?;

        Ok(guild)
    }

    /// Looks up a stored guild, used to name guilds the cache no longer holds.
    pub async fn find_guild(&self, guild_id: &str) -> Result<Option<DiscordGuild>, AppError> {
        let guild = DiscordGuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(guild)
    }
}
