use crate::{data::WowCharacterRepository, model::character::RegisterCharacterParam};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, fixture};

mod find;
mod has_any;
mod list;
mod register;

fn register_param(name: &str) -> RegisterCharacterParam {
    RegisterCharacterParam {
        guild_id: fixture::wow_character::DEFAULT_GUILD_ID.to_string(),
        user_id: fixture::wow_character::DEFAULT_USER_ID.to_string(),
        character_name: name.to_string(),
        region: "eu".to_string(),
        realm: "silvermoon".to_string(),
    }
}
