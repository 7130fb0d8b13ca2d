use super::*;

/// Tests finding a stored guild.
///
/// Expected: Ok(Some) with matching name
#[tokio::test]
async fn finds_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("555")
        .name("Mythic Pushers")
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let found = repo.find_by_guild_id(&guild.guild_id).await?;

    assert_eq!(found.map(|g| g.name), Some("Mythic Pushers".to_string()));

    Ok(())
}

/// Tests looking up a guild the bot has never seen.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let found = repo.find_by_guild_id("999").await?;

    assert!(found.is_none());

    Ok(())
}
