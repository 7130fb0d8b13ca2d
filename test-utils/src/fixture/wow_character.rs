//! Registered character fixtures for creating in-memory test data.

use chrono::Utc;
use entity::wow_character;

/// Default test guild ID for registrations.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default test Discord user ID for registrations.
pub const DEFAULT_USER_ID: &str = "123456789";

/// Default registered character name.
pub const DEFAULT_CHARACTER_NAME: &str = "Thrall";

/// Default region code.
pub const DEFAULT_REGION: &str = "us";

/// Default realm slug.
pub const DEFAULT_REALM: &str = "area-52";

/// Creates a registered character entity model with default values.
///
/// This function creates an in-memory entity without inserting into the database.
///
/// # Default Values
/// - guild_id: `"987654321"`
/// - user_id: `"123456789"`
/// - character_name: `"Thrall"`
/// - region: `"us"`
/// - realm: `"area-52"`
/// - registered_at: now
pub fn entity() -> wow_character::Model {
    wow_character::Model {
        guild_id: DEFAULT_GUILD_ID.to_string(),
        user_id: DEFAULT_USER_ID.to_string(),
        character_name: DEFAULT_CHARACTER_NAME.to_string(),
        region: DEFAULT_REGION.to_string(),
        realm: DEFAULT_REALM.to_string(),
        registered_at: Utc::now(),
    }
}
