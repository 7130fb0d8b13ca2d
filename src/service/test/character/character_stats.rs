use super::*;

/// Tests fetching stats for a registered character.
///
/// Expected: profile requested with the stored region, realm and name
#[tokio::test]
async fn fetches_profile_for_registration() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::wow_character::WowCharacterFactory::new(db)
        .guild_id("g1")
        .user_id("u1")
        .character_name("Thrall")
        .region("us")
        .realm("area-52")
        .build()
        .await?;

    let stats = CharacterService::new(db, &client)
        .character_stats("g1", "u1", "Thrall")
        .await?;

    assert_eq!(stats.profile.name, "Thrall");
    let query = &server.profile_requests()[0];
    assert_eq!(query.get("region").map(String::as_str), Some("us"));
    assert_eq!(query.get("realm").map(String::as_str), Some("area-52"));
    assert_eq!(query.get("name").map(String::as_str), Some("Thrall"));

    Ok(())
}

/// Tests that an unregistered character is rejected before calling Raider.IO.
///
/// Expected: Err(NotFound), no upstream request
#[tokio::test]
async fn unregistered_character_skips_lookup() {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CharacterService::new(db, &client)
        .character_stats("g1", "u1", "Thrall")
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(server.profile_request_count(), 0);
}

/// Tests that an upstream failure is reported for a registered character.
///
/// Expected: Err(RaiderIoErr(UpstreamStatus))
#[tokio::test]
async fn reports_upstream_failure() -> Result<(), sea_orm::DbErr> {
    let server = MockRaiderIo::start().await.unwrap();
    server.set_character_profile(404, "{}");
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_character(db, "g1", "u1").await?;

    let result = CharacterService::new(db, &client)
        .character_stats("g1", "u1", &stored.character_name)
        .await;

    assert!(matches!(
        result,
        Err(AppError::RaiderIoErr(RaiderIoError::UpstreamStatus { status: 404 }))
    ));

    Ok(())
}
