use serenity::all::{CommandInteraction, Context, CreateCommand, CreateInteractionResponse};

use crate::{bot::embed, error::AppError};

pub const NAME: &str = "ping";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description("Check whether the bot is responding")
}

pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(embed::message("Pong!")),
        )
        .await?;

    Ok(())
}
