use super::*;

/// Tests loading a registration that does not exist.
///
/// Expected: Err(NotFound) naming the character
#[tokio::test]
async fn missing_character_is_not_found() {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CharacterService::new(db, &client)
        .get_character("g1", "u1", "Ghost")
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert!(message.contains("Ghost")),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

/// Tests loading a stored registration.
///
/// Expected: Ok with the stored realm
#[tokio::test]
async fn loads_registered_character() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::wow_character::WowCharacterFactory::new(db)
        .guild_id("g1")
        .user_id("u1")
        .character_name("Jaina")
        .region("eu")
        .realm("silvermoon")
        .build()
        .await?;

    let character = CharacterService::new(db, &client)
        .get_character("g1", "u1", "Jaina")
        .await?;

    assert_eq!(character.realm, "silvermoon");

    Ok(())
}
