use super::*;
use crate::service::CharacterService;

mod autocomplete_characters;
mod character_stats;
mod get_character;
mod register_character;

fn register_param(name: &str) -> RegisterCharacterParam {
    RegisterCharacterParam {
        guild_id: fixture::wow_character::DEFAULT_GUILD_ID.to_string(),
        user_id: fixture::wow_character::DEFAULT_USER_ID.to_string(),
        character_name: name.to_string(),
        region: "US".to_string(),
        realm: "area-52".to_string(),
    }
}
