//! `/wow` command: character registration and Mythic+ stats.
//!
//! Subcommands:
//! - `reg-character region realm character` - verifies the character on Raider.IO,
//!   stores it for the invoking user and shows its profile
//! - `char-stats character` - shows the current profile of a registered character;
//!   only available once the user registered at least one character in the guild

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateAutocompleteResponse, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{
    bot::{command::option, embed},
    error::AppError,
    model::character::RegisterCharacterParam,
    service::{CharacterService, RealmService},
    state::AppState,
};

pub const NAME: &str = "wow";

const REG_CHARACTER: &str = "reg-character";
const CHAR_STATS: &str = "char-stats";

const NO_CHARACTER_MESSAGE: &str =
    "No character found. Please register a character using /wow reg-character";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("World of Warcraft features and character management")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                REG_CHARACTER,
                "Register a WoW character",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "region",
                    "Region of the character",
                )
                .required(true)
                .add_string_choice("EU", "eu")
                .add_string_choice("US", "us"),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "realm",
                    "Realm of the character",
                )
                .required(true)
                .set_autocomplete(true),
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "character",
                    "Name of the character",
                )
                .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                CHAR_STATS,
                "View character statistics",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "character",
                    "Name of the character",
                )
                .required(true)
                .set_autocomplete(true),
            ),
        )
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let response = match command.guild_id {
        Some(guild_id) => {
            let guild_id = guild_id.get().to_string();
            let user_id = command.user.id.get().to_string();
            let options = command.data.options();

            match option::subcommand(&options) {
                Some((REG_CHARACTER, options)) => {
                    let param = RegisterCharacterParam {
                        guild_id,
                        user_id,
                        character_name: option::string(options, "character")
                            .unwrap_or_default()
                            .to_string(),
                        region: option::string(options, "region")
                            .unwrap_or_default()
                            .to_string(),
                        realm: option::string(options, "realm")
                            .unwrap_or_default()
                            .to_string(),
                    };
                    register_character(state, param).await
                }
                Some((CHAR_STATS, options)) => {
                    let character = option::string(options, "character").unwrap_or_default();
                    character_stats(state, &guild_id, &user_id, character).await
                }
                Some((other, _)) => embed::error(format!("Unknown WoW subcommand: {}", other)),
                None => embed::error("No subcommand provided"),
            }
        }
        None => embed::error("This command can only be used in a server."),
    };

    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(response))
        .await?;

    Ok(())
}

async fn register_character(
    state: &AppState,
    param: RegisterCharacterParam,
) -> CreateInteractionResponseMessage {
    let service = CharacterService::new(&state.db, &state.raiderio);
    let (region, realm, name) = (
        param.region.clone(),
        param.realm.clone(),
        param.character_name.clone(),
    );

    match service.register_character(param).await {
        Ok(stats) => embed::character_message(&stats),
        Err(e) => {
            match &e {
                AppError::RaiderIoErr(_) => tracing::warn!(
                    "Character {} ({}/{}) not found: {}",
                    name,
                    region,
                    realm,
                    e
                ),
                _ => tracing::error!("Failed to register character {}: {}", name, e),
            }
            embed::error(registration_error_message(&e))
        }
    }
}

async fn character_stats(
    state: &AppState,
    guild_id: &str,
    user_id: &str,
    character: &str,
) -> CreateInteractionResponseMessage {
    let service = CharacterService::new(&state.db, &state.raiderio);

    if let Err(response) = ensure_registered(&service, guild_id, user_id).await {
        return response;
    }

    match service.character_stats(guild_id, user_id, character).await {
        Ok(stats) => embed::character_message(&stats),
        Err(e) => {
            match &e {
                AppError::NotFound(_) | AppError::RaiderIoErr(_) => {
                    tracing::warn!("Character stats for {} unavailable: {}", character, e)
                }
                _ => tracing::error!("Failed to fetch character stats for {}: {}", character, e),
            }
            embed::error(stats_error_message(&e))
        }
    }
}

/// Guard for commands that need at least one registered character.
async fn ensure_registered(
    service: &CharacterService<'_>,
    guild_id: &str,
    user_id: &str,
) -> Result<(), CreateInteractionResponseMessage> {
    tracing::debug!(
        "Checking character registration of user {} in guild {}",
        user_id,
        guild_id
    );

    match service.has_any_character(guild_id, user_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(embed::error(NO_CHARACTER_MESSAGE)),
        Err(e) => {
            tracing::error!("Failed to check character registration: {}", e);
            Err(embed::error(
                "Failed to check character registration. Please try again later.",
            ))
        }
    }
}

fn registration_error_message(err: &AppError) -> String {
    match err {
        AppError::DbErr(_) => "Failed to register character. Please try again later.".to_string(),
        _ => err.user_message(),
    }
}

fn stats_error_message(err: &AppError) -> String {
    match err {
        AppError::RaiderIoErr(_) => {
            "Character not found. Please check if the character still exists.".to_string()
        }
        AppError::DbErr(_) => {
            "Failed to fetch character stats. Please try again later.".to_string()
        }
        _ => err.user_message(),
    }
}

/// Answers autocomplete for `reg-character realm` and `char-stats character`.
///
/// Lookup failures are logged and answered with an empty choice list so the
/// user's client does not show a stale error.
pub async fn autocomplete(
    state: &AppState,
    ctx: &Context,
    interaction: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(focused) = interaction.data.autocomplete() else {
        return Ok(());
    };
    let options = interaction.data.options();

    tracing::debug!("Processing /wow autocomplete for option {}", focused.name);

    let choices: Vec<(String, String)> = match (option::subcommand(&options), interaction.guild_id)
    {
        (Some((REG_CHARACTER, options)), _) if focused.name == "realm" => {
            let region = option::string(options, "region").unwrap_or_default();

            match RealmService::new(&state.raiderio)
                .autocomplete_realms(region, focused.value)
                .await
            {
                Ok(realms) => realms
                    .into_iter()
                    .map(|realm| (realm.realm, realm.slug))
                    .collect(),
                Err(e) => {
                    tracing::error!("Failed to fetch connected realms for {}: {}", region, e);
                    Vec::new()
                }
            }
        }
        (Some((CHAR_STATS, _)), Some(guild_id)) if focused.name == "character" => {
            let guild_id = guild_id.get().to_string();
            let user_id = interaction.user.id.get().to_string();

            match CharacterService::new(&state.db, &state.raiderio)
                .autocomplete_characters(&guild_id, &user_id, focused.value)
                .await
            {
                Ok(names) => names.into_iter().map(|name| (name.clone(), name)).collect(),
                Err(e) => {
                    tracing::error!("Failed to fetch registered characters: {}", e);
                    Vec::new()
                }
            }
        }
        _ => Vec::new(),
    };

    let response = choices
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, (name, value)| {
            response.add_string_choice(name, value)
        });

    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await?;

    Ok(())
}
