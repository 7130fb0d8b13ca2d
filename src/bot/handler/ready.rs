//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the handshake. Logs the connected user
//! and registers the slash commands when command sync is enabled.

use serenity::all::{Command, Context, GuildId, Ready};

use crate::bot::{command, handler::CommandSync};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `sync` - Whether and where to register slash commands
/// - `ctx` - Discord context used for the registration calls
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(sync: &CommandSync, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    if !sync.enabled {
        tracing::debug!("Command sync disabled, keeping existing registrations");
        return;
    }

    if sync.guild_ids.is_empty() {
        match Command::set_global_commands(&ctx.http, command::definitions()).await {
            Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
            Err(e) => tracing::error!("Failed to register global commands: {:?}", e),
        }
        return;
    }

    for guild_id in &sync.guild_ids {
        let guild_id = GuildId::new(*guild_id);

        match guild_id
            .set_commands(&ctx.http, command::definitions())
            .await
        {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            ),
            Err(e) => tracing::error!(
                "Failed to register commands in guild {}: {:?}",
                guild_id,
                e
            ),
        }
    }
}
