use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::{CommandSync, Handler},
    config::Config,
    error::AppError,
    state::AppState,
};

/// Builds the Discord client and runs it until shutdown.
///
/// Blocks until the gateway connection ends. Ctrl+C (or SIGTERM on unix) shuts all
/// shards down gracefully, after which this returns `Ok(())`.
///
/// # Arguments
/// - `config` - Application configuration (token and command sync settings)
/// - `state` - Shared state passed to every event handler
///
/// # Returns
/// - `Ok(())` - Bot stopped after a shutdown signal
/// - `Err(AppError::DiscordErr)` - Client construction or gateway connection failed
pub async fn start_bot(config: &Config, state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(
        state,
        CommandSync {
            enabled: config.sync_commands,
            guild_ids: config.discord_guild_ids.clone(),
        },
    );

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, disconnecting from Discord");
        shard_manager.shutdown_all().await;
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    tracing::info!("Discord bot stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
