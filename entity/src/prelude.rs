pub use super::discord_guild::Entity as DiscordGuild;
pub use super::wow_character::Entity as WowCharacter;
