//! SeaORM entity models for the bot's relational store.

pub mod prelude;

pub mod discord_guild;
pub mod wow_character;
