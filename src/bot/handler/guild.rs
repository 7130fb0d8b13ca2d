//! Guild lifecycle handlers.
//!
//! `guild_create` fires on startup for every guild the bot is already in, when it
//! joins a new guild and when a guild recovers from an outage. Each occurrence
//! upserts the guild so its stored name stays current. Leaving a guild keeps the
//! stored registrations.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::service::GuildService;

/// Handles the guild_create event by upserting the guild.
///
/// # Arguments
/// - `db` - Database connection for storing guild data
/// - `_ctx` - Discord context (unused)
/// - `guild` - Guild data from Discord
/// - `is_new` - Whether the bot just joined this guild
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get().to_string();

    match GuildService::new(db)
        .register_guild(&guild_id, &guild.name)
        .await
    {
        Ok(stored) if is_new == Some(true) => {
            tracing::info!("Joined guild {} ({})", stored.name, stored.guild_id)
        }
        Ok(stored) => tracing::debug!("Guild available: {} ({})", stored.name, stored.guild_id),
        Err(e) => tracing::error!("Failed to upsert guild {}: {}", guild_id, e),
    }
}

/// Handles the guild_delete event.
///
/// `unavailable` distinguishes an outage from the bot being removed. The guild name
/// comes from the cache when serenity still holds the guild, otherwise from the
/// stored row.
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    full: Option<Guild>,
) {
    let name = match full {
        Some(guild) => guild.name,
        None => stored_guild_name(db, &incomplete.id.get().to_string()).await,
    };

    if incomplete.unavailable {
        tracing::warn!("Guild {} ({}) became unavailable", name, incomplete.id);
    } else {
        tracing::info!("Removed from guild {} ({})", name, incomplete.id);
    }
}

async fn stored_guild_name(db: &DatabaseConnection, guild_id: &str) -> String {
    match GuildService::new(db).find_guild(guild_id).await {
        Ok(Some(guild)) => guild.name,
        Ok(None) => "unknown".to_string(),
        Err(e) => {
            tracing::error!("Failed to look up guild {}: {}", guild_id, e);
            "unknown".to_string()
        }
    }
}
