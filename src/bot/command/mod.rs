//! Slash command table.
//!
//! Every command lives in its own module exposing `NAME`, `register()` for the
//! definition sent to Discord, and `run()`. Commands with autocomplete options also
//! expose `autocomplete()`. Adding a command means adding it to [`definitions`],
//! [`dispatch`] and, if needed, [`autocomplete`].

pub mod option;
pub mod ping;
pub mod wow;

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateInteractionResponse};

use crate::{bot::embed, error::AppError, state::AppState};

/// Definitions of every slash command, registered on `ready`.
pub fn definitions() -> Vec<CreateCommand> {
    vec![ping::register(), wow::register()]
}

/// Runs the handler registered under the invoked command name.
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    match command.data.name.as_str() {
        ping::NAME => ping::run(ctx, command).await,
        wow::NAME => wow::run(state, ctx, command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            command
                .create_response(
                    &ctx.http,
                    CreateInteractionResponse::Message(embed::error(format!(
                        "Unknown command: {}",
                        other
                    ))),
                )
                .await?;
            Ok(())
        }
    }
}

/// Answers an autocomplete request for the focused option.
pub async fn autocomplete(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    match interaction.data.name.as_str() {
        wow::NAME => wow::autocomplete(state, ctx, interaction).await,
        other => {
            tracing::debug!("No autocomplete for /{}", other);
            Ok(())
        }
    }
}
