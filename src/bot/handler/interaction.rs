use serenity::all::{Context, Interaction};

use crate::{bot::command, state::AppState};

/// Routes slash commands and autocomplete requests to the command table.
///
/// Command handlers answer users themselves; errors reaching this point could not
/// be reported to Discord and are only logged.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => {
            tracing::debug!(
                "/{} invoked by {} in guild {:?}",
                command.data.name,
                command.user.id,
                command.guild_id
            );

            if let Err(e) = command::dispatch(state, &ctx, &command).await {
                tracing::error!("Failed to handle /{}: {}", command.data.name, e);
            }
        }
        Interaction::Autocomplete(autocomplete) => {
            if let Err(e) = command::autocomplete(state, &ctx, &autocomplete).await {
                tracing::error!(
                    "Failed to answer autocomplete for /{}: {}",
                    autocomplete.data.name,
                    e
                );
            }
        }
        _ => {}
    }
}
