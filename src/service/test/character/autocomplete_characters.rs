use super::*;
use crate::service::MAX_AUTOCOMPLETE_CHOICES;

/// Tests case-insensitive substring matching over the user's characters.
///
/// Expected: only names containing the query
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Thrall", "Jaina", "Thralldin"] {
        factory::wow_character::WowCharacterFactory::new(db)
            .guild_id("g1")
            .user_id("u1")
            .character_name(name)
            .build()
            .await?;
    }
    factory::wow_character::WowCharacterFactory::new(db)
        .guild_id("g1")
        .user_id("u2")
        .character_name("Thrallson")
        .build()
        .await?;

    let mut names = CharacterService::new(db, &client)
        .autocomplete_characters("g1", "u1", "THRALL")
        .await?;
    names.sort();

    assert_eq!(names, vec!["Thrall", "Thralldin"]);

    Ok(())
}

/// Tests that an empty query lists every character, capped at Discord's limit.
///
/// Expected: 25 of 30 names
#[tokio::test]
async fn empty_query_lists_up_to_limit() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);
    let test = TestBuilder::new().with_bot_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..30 {
        factory::create_character(db, "g1", "u1").await?;
    }

    let names = CharacterService::new(db, &client)
        .autocomplete_characters("g1", "u1", "")
        .await?;

    assert_eq!(names.len(), MAX_AUTOCOMPLETE_CHOICES);

    Ok(())
}
