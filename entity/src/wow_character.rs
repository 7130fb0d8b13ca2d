use sea_orm::entity::prelude::*;

/// A World of Warcraft character registered by a Discord user within a guild.
///
/// The composite primary key makes a (guild, user, character) triple unique, so
/// registering the same character twice updates the stored region and realm.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wow_character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub character_name: String,
    pub region: String,
    /// Realm slug as used by the Raider.IO API (e.g. `area-52`)
    pub realm: String,
    pub registered_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
