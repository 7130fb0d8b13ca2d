//! Discord guild domain model.

/// A Discord guild the bot is a member of.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuild {
    pub guild_id: String,
    pub name: String,
}

impl DiscordGuild {
    pub fn from_entity(entity: entity::discord_guild::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            name: entity.name,
        }
    }
}
