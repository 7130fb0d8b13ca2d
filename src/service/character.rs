//! Character registration and stats lookups.

use sea_orm::DatabaseConnection;

use crate::{
    data::WowCharacterRepository,
    error::AppError,
    external::raiderio::{ProfileFields, RaiderIoClient},
    model::character::{CharacterRegistration, CharacterStats, RegisterCharacterParam},
    service::MAX_AUTOCOMPLETE_CHOICES,
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    raiderio: &'a RaiderIoClient,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection, raiderio: &'a RaiderIoClient) -> Self {
        Self { db, raiderio }
    }

    /// Registers a character after confirming it exists on Raider.IO.
    ///
    /// The profile is fetched first so only characters known upstream are stored.
    /// The name is stored as Raider.IO spells it, which keeps autocomplete and later
    /// lookups consistent regardless of how the user typed it.
    ///
    /// # Arguments
    /// - `param` - Guild, user, character name, region and realm slug
    ///
    /// # Returns
    /// - `Ok(CharacterStats)` - Stored registration with the fetched profile
    /// - `Err(AppError::RaiderIoErr)` - Character could not be fetched; nothing stored
    /// - `Err(AppError::DbErr)` - Profile fetched but the registration failed
    pub async fn register_character(
        &self,
        param: RegisterCharacterParam,
    ) -> Result<CharacterStats, AppError> {
        let region = param.region.trim().to_lowercase();
        let realm = param.realm.trim().to_string();
        let name = param.character_name.trim().to_string();

        let profile = self
            .raiderio
            .fetch_character_profile(&region, &realm, &name, &ProfileFields::for_embed())
            .await?;

        let registration = WowCharacterRepository::new(self.db)
            .register(RegisterCharacterParam {
                guild_id: param.guild_id,
                user_id: param.user_id,
                character_name: profile.name.clone(),
                region,
                realm,
            })
            .await?;

        tracing::info!(
            "Registered character {} ({}/{}) for user {} in guild {}",
            registration.character_name,
            registration.region,
            registration.realm,
            registration.user_id,
            registration.guild_id
        );

        Ok(CharacterStats {
            registration,
            profile,
        })
    }

    pub async fn list_characters(
        &self,
        guild_id: &str,
        user_id: &str,
    ) -> Result<Vec<CharacterRegistration>, AppError> {
        Ok(WowCharacterRepository::new(self.db)
            .list(guild_id, user_id)
            .await?)
    }

    /// Loads a single registration.
    ///
    /// # Returns
    /// - `Ok(CharacterRegistration)` - Registration found
    /// - `Err(AppError::NotFound)` - User has no character with that name in the guild
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn get_character(
        &self,
        guild_id: &str,
        user_id: &str,
        character_name: &str,
    ) -> Result<CharacterRegistration, AppError> {
        let character_name = character_name.trim();

        WowCharacterRepository::new(self.db)
            .find(guild_id, user_id, character_name)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No character named {} is registered. Register it with /wow reg-character.",
                    character_name
                ))
            })
    }

    pub async fn has_any_character(&self, guild_id: &str, user_id: &str) -> Result<bool, AppError> {
        Ok(WowCharacterRepository::new(self.db)
            .has_any(guild_id, user_id)
            .await?)
    }

    /// Fetches the current profile of a registered character.
    ///
    /// # Returns
    /// - `Ok(CharacterStats)` - Registration with a freshly fetched profile
    /// - `Err(AppError::NotFound)` - Character is not registered
    /// - `Err(AppError::RaiderIoErr)` - Profile could not be fetched
    pub async fn character_stats(
        &self,
        guild_id: &str,
        user_id: &str,
        character_name: &str,
    ) -> Result<CharacterStats, AppError> {
        let registration = self
            .get_character(guild_id, user_id, character_name)
            .await?;

        let profile = self
            .raiderio
            .fetch_character_profile(
                &registration.region,
                &registration.realm,
                &registration.character_name,
                &ProfileFields::for_embed(),
            )
            .await?;

        Ok(CharacterStats {
            registration,
            profile,
        })
    }

    /// Names of the user's characters containing `query`, case-insensitively.
    ///
    /// At most 25 names are returned, in listing order.
    pub async fn autocomplete_characters(
        &self,
        guild_id: &str,
        user_id: &str,
        query: &str,
    ) -> Result<Vec<String>, AppError> {
        let query = query.trim().to_lowercase();

        let names = self
            .list_characters(guild_id, user_id)
            .await?
            .into_iter()
            .map(|c| c.character_name)
            .filter(|name| name.to_lowercase().contains(&query))
            .take(MAX_AUTOCOMPLETE_CHOICES)
            .collect();

        Ok(names)
    }
}
