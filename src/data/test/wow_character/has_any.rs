use super::*;

/// Tests the registration guard before and after registering.
///
/// Expected: false, then true
#[tokio::test]
async fn reflects_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WowCharacterRepository::new(db);
    let guild_id = fixture::wow_character::DEFAULT_GUILD_ID;
    let user_id = fixture::wow_character::DEFAULT_USER_ID;

    assert!(!repo.has_any(guild_id, user_id).await?);

    repo.register(register_param("Jaina")).await?;

    assert!(repo.has_any(guild_id, user_id).await?);

    Ok(())
}

/// Tests that registrations in another guild do not count.
///
/// Expected: false
#[tokio::test]
async fn ignores_other_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_character(db, "g2", "u1").await?;

    let repo = WowCharacterRepository::new(db);

    assert!(!repo.has_any("g1", "u1").await?);

    Ok(())
}
