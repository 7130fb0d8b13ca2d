use super::*;

/// Tests finding a registration by name.
///
/// Expected: Ok(Some) with the stored region and realm
#[tokio::test]
async fn finds_registered_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::wow_character::WowCharacterFactory::new(db)
        .character_name("Thrall")
        .build()
        .await?;

    let repo = WowCharacterRepository::new(db);
    let found = repo
        .find(&stored.guild_id, &stored.user_id, "Thrall")
        .await?
        .unwrap();

    assert_eq!(found.region, stored.region);
    assert_eq!(found.realm, stored.realm);

    Ok(())
}

/// Tests that another user's registration is not visible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_other_users_character() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db, "g1", "u1").await?;

    let repo = WowCharacterRepository::new(db);
    let found = repo.find("g1", "u2", &stored.character_name).await?;

    assert!(found.is_none());

    Ok(())
}
