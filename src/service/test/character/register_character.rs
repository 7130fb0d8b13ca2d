use super::*;

/// Tests registering a character that exists upstream.
///
/// Expected: registration stored under the upstream spelling, region lowercased
#[tokio::test]
async fn registers_existing_character() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CharacterService::new(db, &client);
    let stats = service.register_character(register_param(" thrall ")).await?;

    assert_eq!(stats.registration.character_name, "Thrall");
    assert_eq!(stats.registration.region, "us");
    assert_eq!(stats.registration.realm, "area-52");
    assert_eq!(stats.profile.current_score(), Some(fixture::raiderio::DEFAULT_SCORE));

    let query = &server.profile_requests()[0];
    assert_eq!(query.get("name").map(String::as_str), Some("thrall"));
    assert_eq!(
        query.get("fields").map(String::as_str),
        Some("mythic_plus_scores_by_season:current")
    );

    let listed = service
        .list_characters(
            fixture::wow_character::DEFAULT_GUILD_ID,
            fixture::wow_character::DEFAULT_USER_ID,
        )
        .await?;
    assert_eq!(listed, vec![stats.registration]);

    Ok(())
}

/// Tests that nothing is stored when the character is unknown upstream.
///
/// Expected: Err(RaiderIoErr), no registration
#[tokio::test]
async fn does_not_store_unknown_character() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    server.set_character_profile(400, r#"{"message":"Could not find requested character"}"#);
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CharacterService::new(db, &client);
    let result = service.register_character(register_param("Nobody")).await;

    assert!(matches!(result, Err(AppError::RaiderIoErr(_))));
    assert!(
        !service
            .has_any_character(
                fixture::wow_character::DEFAULT_GUILD_ID,
                fixture::wow_character::DEFAULT_USER_ID,
            )
            .await?
    );

    Ok(())
}

/// Tests that the registration guard flips after a successful registration.
///
/// Expected: false, then true
#[tokio::test]
async fn registration_satisfies_guard() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CharacterService::new(db, &client);
    let guild_id = fixture::wow_character::DEFAULT_GUILD_ID;
    let user_id = fixture::wow_character::DEFAULT_USER_ID;

    assert!(!service.has_any_character(guild_id, user_id).await?);
    service.register_character(register_param("Thrall")).await?;
    assert!(service.has_any_character(guild_id, user_id).await?);

    Ok(())
}
