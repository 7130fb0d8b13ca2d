use super::*;

/// Tests that listing is scoped to the guild and user pair.
///
/// Expected: only the user's characters in that guild
#[tokio::test]
async fn lists_only_matching_user_and_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::wow_character::WowCharacterFactory::new(db)
        .guild_id("g1")
        .user_id("u1")
        .character_name("Jaina")
        .build()
        .await?;
    factory::create_character(db, "g1", "u2").await?;
    factory::create_character(db, "g2", "u1").await?;

    let repo = WowCharacterRepository::new(db);
    let characters = repo.list("g1", "u1").await?;

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].character_name, "Jaina");

    Ok(())
}

/// Tests listing order.
///
/// Expected: oldest registration first, ties broken by name
#[tokio::test]
async fn orders_by_registration_time_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let earlier = now - Duration::hours(1);
    for (name, at) in [("Thrall", now), ("Sylvanas", earlier), ("Anduin", now)] {
        factory::wow_character::WowCharacterFactory::new(db)
            .guild_id("g1")
            .user_id("u1")
            .character_name(name)
            .registered_at(at)
            .build()
            .await?;
    }

    let repo = WowCharacterRepository::new(db);
    let names: Vec<_> = repo
        .list("g1", "u1")
        .await?
        .into_iter()
        .map(|c| c.character_name)
        .collect();

    assert_eq!(names, vec!["Sylvanas", "Anduin", "Thrall"]);

    Ok(())
}

/// Tests listing for a user without registrations.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::WowCharacter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WowCharacterRepository::new(db);
    let characters = repo.list("g1", "u1").await?;

    assert!(characters.is_empty());

    Ok(())
}
