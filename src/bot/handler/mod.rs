use serenity::all::{Context, EventHandler, Guild, Interaction, Ready, UnavailableGuild};
use serenity::async_trait;

use crate::state::AppState;

pub mod guild;
pub mod interaction;
pub mod ready;

/// Where and whether slash commands are registered on `ready`.
#[derive(Debug, Clone)]
pub struct CommandSync {
    pub enabled: bool,
    /// Guilds to register in; empty registers globally
    pub guild_ids: Vec<u64>,
}

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub command_sync: CommandSync,
}

impl Handler {
    pub fn new(state: AppState, command_sync: CommandSync) -> Self {
        Self {
            state,
            command_sync,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.command_sync, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.state.db, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.state.db, ctx, incomplete, full).await;
    }

    /// Called for slash commands and autocomplete requests
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, ctx, interaction).await;
    }
}
