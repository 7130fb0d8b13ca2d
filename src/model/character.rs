//! Registered character domain models.

use chrono::{DateTime, Utc};

use crate::external::raiderio::CharacterProfile;

/// A WoW character registered by a Discord user within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRegistration {
    /// Discord ID of the guild the registration belongs to
    pub guild_id: String,
    /// Discord ID of the registering user
    pub user_id: String,
    pub character_name: String,
    /// Region code such as `eu` or `us`
    pub region: String,
    /// Realm slug such as `area-52`
    pub realm: String,
    /// Time of the first registration; re-registering does not change it
    pub registered_at: DateTime<Utc>,
}

impl CharacterRegistration {
    /// Converts an entity model to a registration domain model at the repository
    /// boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `CharacterRegistration` - The converted domain model
    pub fn from_entity(entity: entity::wow_character::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            character_name: entity.character_name,
            region: entity.region,
            realm: entity.realm,
            registered_at: entity.registered_at,
        }
    }
}

/// Parameters for registering a character.
#[derive(Debug, Clone)]
pub struct RegisterCharacterParam {
    pub guild_id: String,
    pub user_id: String,
    pub character_name: String,
    pub region: String,
    pub realm: String,
}

/// A stored registration together with the character's current Raider.IO profile.
#[derive(Debug, Clone)]
pub struct CharacterStats {
    pub registration: CharacterRegistration,
    pub profile: CharacterProfile,
}
