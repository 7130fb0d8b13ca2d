use super::*;
use crate::service::{RealmService, MAX_AUTOCOMPLETE_CHOICES};
use serde_json::json;

/// Tests realm suggestions for a partial name.
///
/// Expected: Draenor only
#[tokio::test]
async fn suggests_matching_realms() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);

    let realms = RealmService::new(&client)
        .autocomplete_realms("eu", "draen")
        .await?;

    assert_eq!(realms.len(), 1);
    assert_eq!(realms[0].realm, "Draenor");
    assert_eq!(realms[0].slug, "draenor");

    Ok(())
}

/// Tests that no request is made before a region is chosen.
///
/// Expected: empty suggestions, no upstream request
#[tokio::test]
async fn skips_lookup_without_region() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let client = client_for(&server);

    let realms = RealmService::new(&client).autocomplete_realms("", "silver").await?;

    assert!(realms.is_empty());
    assert_eq!(server.realm_request_count(), 0);

    Ok(())
}

/// Tests that suggestions are capped at Discord's choice limit.
///
/// Expected: exactly 25 of 40 realms
#[tokio::test]
async fn caps_suggestions() -> Result<(), AppError> {
    let server = MockRaiderIo::start().await.unwrap();
    let groups: Vec<_> = (0..40)
        .map(|i| {
            json!({
                "id": i,
                "connectedRealms": [{ "name": format!("Realm {}", i), "slug": format!("realm-{}", i) }]
            })
        })
        .collect();
    server.set_connected_realms(200, json!({ "realmListing": { "realms": groups } }).to_string());
    let client = client_for(&server);

    let realms = RealmService::new(&client).autocomplete_realms("us", "").await?;

    assert_eq!(realms.len(), MAX_AUTOCOMPLETE_CHOICES);
    assert_eq!(realms[0].realm, "Realm 0");

    Ok(())
}

/// Tests that upstream failures reach the caller.
///
/// Expected: Err(RaiderIoErr(UpstreamStatus))
#[tokio::test]
async fn propagates_upstream_failure() {
    let server = MockRaiderIo::start().await.unwrap();
    server.set_connected_realms(500, "{}");
    let client = client_for(&server);

    let result = RealmService::new(&client).autocomplete_realms("eu", "").await;

    assert!(matches!(
        result,
        Err(AppError::RaiderIoErr(RaiderIoError::UpstreamStatus { status: 500 }))
    ));
}
