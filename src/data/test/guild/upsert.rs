use super::*;

/// Tests upserting a new Discord guild.
///
/// Expected: Ok with guild created
#[tokio::test]
async fn upserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let guild = repo.upsert("123456789", "Test Guild").await?;

    assert_eq!(guild.guild_id, "123456789");
    assert_eq!(guild.name, "Test Guild");

    let db_guild = entity::prelude::DiscordGuild::find_by_id("123456789".to_string())
        .one(db)
        .await?;
    assert!(db_guild.is_some());

    Ok(())
}

/// Tests that upserting an existing guild updates its name instead of inserting
/// a second row.
///
/// Expected: one row holding the second name
#[tokio::test]
async fn updates_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    repo.upsert("123456789", "Old Name").await?;
    let updated = repo.upsert("123456789", "New Name").await?;

    assert_eq!(updated.name, "New Name");

    let count = entity::prelude::DiscordGuild::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting one guild leaves other guilds untouched.
///
/// Expected: existing guild keeps its name
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_guild(db).await?;

    let repo = DiscordGuildRepository::new(db);
    repo.upsert("42", "Another Guild").await?;

    let stored = repo.find_by_guild_id(&existing.guild_id).await?.unwrap();
    assert_eq!(stored.name, existing.name);
    assert_eq!(entity::prelude::DiscordGuild::find().count(db).await?, 2);

    Ok(())
}
