use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_table()).await?;

        // Listing a user's characters filters on (guild_id, user_id) only
        manager
            .create_index(
                Index::create()
                    .name("idx_wow_character_guild_user")
                    .table(WowCharacter::Table)
                    .col(WowCharacter::GuildId)
                    .col(WowCharacter::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WowCharacter::Table).to_owned())
            .await
    }
}

/// One row per (guild, user, character). The key is named so it reads the same
/// on SQLite and Postgres.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(WowCharacter::Table)
        .if_not_exists()
        .col(string(WowCharacter::GuildId))
        .col(string(WowCharacter::UserId))
        .col(string(WowCharacter::CharacterName))
        .col(string(WowCharacter::Region))
        .col(string(WowCharacter::Realm))
        .col(
            timestamp_with_time_zone(WowCharacter::RegisteredAt)
                .default(Expr::current_timestamp())
                .not_null(),
        )
        .primary_key(
            Index::create()
                .name("pk_wow_character")
                .col(WowCharacter::GuildId)
                .col(WowCharacter::UserId)
                .col(WowCharacter::CharacterName),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum WowCharacter {
    Table,
    GuildId,
    UserId,
    CharacterName,
    Region,
    Realm,
    RegisteredAt,
}
