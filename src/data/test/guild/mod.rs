use crate::data::DiscordGuildRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;
