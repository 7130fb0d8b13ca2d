//! Raider.IO JSON payload fixtures.
//!
//! Payloads mirror the shape returned by the live API closely enough for decoding
//! tests: the same nesting and field names, trimmed to a handful of realms and a
//! single season.

use serde_json::{json, Value};

/// Default character name used by the profile fixture.
pub const DEFAULT_CHARACTER_NAME: &str = "Thrall";

/// Default realm slug used by the profile fixture.
pub const DEFAULT_REALM_SLUG: &str = "area-52";

/// Default current-season overall score in the profile fixture.
pub const DEFAULT_SCORE: f64 = 2875.4;

/// Connected-realms listing with three realms in two connected groups.
///
/// Realm names: `Silvermoon`, `Draenor`, `Blade's Edge`.
///
/// # Example
///
/// ```rust,ignore
/// let body = fixture::raiderio::connected_realms_json("eu").to_string();
/// ```
pub fn connected_realms_json(region: &str) -> Value {
    json!({
        "realmListing": {
            "region": { "name": region.to_uppercase(), "slug": region, "short_name": region.to_uppercase() },
            "subRegion": null,
            "raid": {
                "type": "raid",
                "id": 14030,
                "difficulty": "mythic",
                "name": "Manaforge Omega",
                "short_name": "MFO",
                "slug": "manaforge-omega",
                "expansion_id": 10,
                "encounters": []
            },
            "season": { "slug": "season-tww-3", "name": "TWW Season 3" },
            "realms": [
                {
                    "id": 1,
                    "connectedRealms": [
                        {
                            "type": "realm",
                            "name": "Silvermoon",
                            "alt_name": null,
                            "slug": "silvermoon",
                            "locale": "en",
                            "language": "en",
                            "timezone": "Europe/Paris"
                        }
                    ],
                    "stats": { "num_combined_characters": 120000 }
                },
                {
                    "id": 2,
                    "connectedRealms": [
                        {
                            "type": "realm",
                            "name": "Draenor",
                            "alt_name": null,
                            "slug": "draenor",
                            "locale": "en",
                            "language": "en",
                            "timezone": "Europe/Paris"
                        },
                        {
                            "type": "realm",
                            "name": "Blade's Edge",
                            "alt_name": null,
                            "slug": "blades-edge",
                            "locale": "en",
                            "language": "en",
                            "timezone": "Europe/Paris"
                        }
                    ]
                }
            ]
        }
    })
}

/// Character profile including the current season's Mythic+ scores.
pub fn character_profile_json() -> Value {
    json!({
        "name": DEFAULT_CHARACTER_NAME,
        "race": "Orc",
        "class": "Shaman",
        "active_spec_name": "Enhancement",
        "active_spec_role": "DPS",
        "gender": "male",
        "faction": "horde",
        "achievement_points": 21450,
        "thumbnail_url": "https://render.worldofwarcraft.com/us/character/area-52/1/2-avatar.jpg",
        "region": "us",
        "realm": "Area 52",
        "last_crawled_at": "2025-11-02T08:14:11.000Z",
        "profile_url": "https://raider.io/characters/us/area-52/Thrall",
        "profile_banner": "https://cdn.raiderio.net/images/profile/banners/hordebanner1.jpg",
        "mythic_plus_scores_by_season": [
            {
                "season": "season-tww-3",
                "scores": {
                    "all": DEFAULT_SCORE,
                    "dps": DEFAULT_SCORE,
                    "healer": 0,
                    "tank": 0,
                    "spec_0": 0,
                    "spec_1": DEFAULT_SCORE,
                    "spec_2": 0,
                    "spec_3": 0
                },
                "segments": {
                    "all": { "score": DEFAULT_SCORE, "color": "#ff8000" },
                    "dps": { "score": DEFAULT_SCORE, "color": "#ff8000" },
                    "healer": { "score": 0, "color": "#ffffff" },
                    "tank": { "score": 0, "color": "#ffffff" },
                    "spec_0": { "score": 0, "color": "#ffffff" },
                    "spec_1": { "score": DEFAULT_SCORE, "color": "#ff8000" },
                    "spec_2": { "score": 0, "color": "#ffffff" },
                    "spec_3": { "score": 0, "color": "#ffffff" }
                }
            }
        ]
    })
}

/// Profile fixture with a single top-level field replaced.
///
/// # Arguments
/// - `field` - Top-level key to overwrite (e.g. `"thumbnail_url"`)
/// - `value` - Replacement value
pub fn character_profile_json_with(field: &str, value: Value) -> Value {
    let mut profile = character_profile_json();
    if let Some(object) = profile.as_object_mut() {
        object.insert(field.to_string(), value);
    }
    profile
}
