use super::*;

/// Tests registering a character and reading it back.
///
/// Expected: listing yields exactly the inserted registration
#[tokio::test]
async fn registers_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WowCharacterRepository::new(db);
    let registered = repo.register(register_param("Jaina")).await?;

    assert_eq!(registered.character_name, "Jaina");
    assert_eq!(registered.region, "eu");
    assert_eq!(registered.realm, "silvermoon");

    let listed = repo
        .list(
            fixture::wow_character::DEFAULT_GUILD_ID,
            fixture::wow_character::DEFAULT_USER_ID,
        )
        .await?;
    assert_eq!(listed, vec![registered]);

    Ok(())
}

/// Tests registering the same character twice.
///
/// Expected: one row, region/realm from the second call, original registered_at
#[tokio::test]
async fn re_registration_updates_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WowCharacterRepository::new(db);
    let first = repo.register(register_param("Jaina")).await?;
    let second = repo
        .register(RegisterCharacterParam {
            region: "us".to_string(),
            realm: "area-52".to_string(),
            ..register_param("Jaina")
        })
        .await?;

    assert_eq!(second.region, "us");
    assert_eq!(second.realm, "area-52");
    assert_eq!(second.registered_at, first.registered_at);
    assert_eq!(entity::prelude::WowCharacter::find().count(db).await?, 1);

    Ok(())
}

/// Tests that the same character name can be registered by different users and
/// in different guilds.
///
/// Expected: three separate rows
#[tokio::test]
async fn same_name_for_other_user_or_guild_is_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WowCharacterRepository::new(db);
    repo.register(register_param("Jaina")).await?;
    repo.register(RegisterCharacterParam {
        user_id: "other-user".to_string(),
        ..register_param("Jaina")
    })
    .await?;
    repo.register(RegisterCharacterParam {
        guild_id: "other-guild".to_string(),
        ..register_param("Jaina")
    })
    .await?;

    assert_eq!(entity::prelude::WowCharacter::find().count(db).await?, 3);

    Ok(())
}
