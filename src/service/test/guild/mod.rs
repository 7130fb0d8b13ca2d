use super::*;
use crate::service::GuildService;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests that registering a guild twice keeps one row with the latest name.
///
/// Expected: one row named after the second call
#[tokio::test]
async fn register_guild_refreshes_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildService::new(db);
    service.register_guild("321", "Before").await?;
    let guild = service.register_guild("321", "After").await?;

    assert_eq!(guild.name, "After");
    assert_eq!(entity::prelude::DiscordGuild::find().count(db).await?, 1);

    Ok(())
}

/// Tests looking up a stored guild through the service.
///
/// Expected: Some for a registered guild, None for an unknown one
#[tokio::test]
async fn find_guild_returns_stored_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildService::new(db);
    service.register_guild("654", "Mythic Pushers").await?;

    let found = service.find_guild("654").await?;
    assert_eq!(found.map(|guild| guild.name), Some("Mythic Pushers".to_string()));
    assert!(service.find_guild("655").await?.is_none());

    Ok(())
}
