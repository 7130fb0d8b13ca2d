use reqwest::{Response, StatusCode};
use std::time::Duration;

use crate::{
    config::RaiderIoConfig,
    error::raiderio::RaiderIoError,
    external::raiderio::{
        cache::RealmCache,
        field::ProfileFields,
        model::{realm::filter_realms, CharacterProfile, ConnectedRealmsResponse, RealmEntry},
    },
};

/// Client for the Raider.IO API.
///
/// Cheap to clone: the reqwest client and the realm cache are both reference
/// counted, so every clone shares connections and cached listings.
#[derive(Clone)]
pub struct RaiderIoClient {
    http: reqwest::Client,
    api_url: String,
    api_version: String,
    api_key: String,
    timeout: Duration,
    realm_cache: RealmCache,
}

impl RaiderIoClient {
    /// Creates a client using the given HTTP client and settings.
    ///
    /// # Arguments
    /// - `http` - Shared reqwest client (see `startup::setup_reqwest_client`)
    /// - `config` - API location, access key, cache TTL and request timeout
    pub fn new(http: reqwest::Client, config: RaiderIoConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_version: config.api_version,
            api_key: config.api_key,
            timeout: config.timeout,
            realm_cache: RealmCache::new(config.cache_ttl),
        }
    }

    pub fn realm_cache(&self) -> &RealmCache {
        &self.realm_cache
    }

    /// Lists the realms of a region, optionally filtered by name.
    ///
    /// Served from the realm cache when a fresh entry exists; otherwise the listing
    /// is fetched, flattened and cached before filtering. The filter is applied after
    /// cache resolution, so cached and fresh calls return the same result for the
    /// same query.
    ///
    /// # Arguments
    /// - `region` - Region code such as `eu` or `us` (case-insensitive, non-empty)
    /// - `query` - Case-insensitive substring of the realm name; empty returns all
    ///
    /// # Returns
    /// - `Ok(Vec<RealmEntry>)` - Matching realms in upstream order
    /// - `Err(RaiderIoError::InvalidRegion)` - Empty region code
    /// - `Err(RaiderIoError::Network)` - Transport failure or timeout
    /// - `Err(RaiderIoError::UpstreamStatus)` - Non-200 response
    /// - `Err(RaiderIoError::Decode)` - Unexpected payload shape
    pub async fn fetch_connected_realms(
        &self,
        region: &str,
        query: &str,
    ) -> Result<Vec<RealmEntry>, RaiderIoError> {
        let region = normalize_region(region)?;

        if let Some(realms) = self.realm_cache.get(&region) {
            tracing::trace!("Realm cache hit for region {}", region);
            return Ok(filter_realms(&realms, query));
        }

        tracing::debug!("Realm cache miss for region {}, fetching listing", region);

        let response = self
            .http
            .get(format!("{}/connected-realms", self.api_url))
            .query(&[("region", region.as_str()), ("realm", "all")])
            .timeout(self.timeout)
            .send()
            .await?;

        let body = ensure_ok(response).await?;
        let listing: ConnectedRealmsResponse = serde_json::from_slice(&body)?;
        let realms = self
            .realm_cache
            .insert(&region, listing.into_realm_entries(&region));

        tracing::debug!("Cached {} realms for region {}", realms.len(), region);

        Ok(filter_realms(&realms, query))
    }

    /// Fetches a character profile.
    ///
    /// The profile is normalized before it is returned: gender is title-cased and
    /// thumbnail/banner values that are not absolute URLs are cleared. Those two
    /// fields are the only ones ever altered; any other problem fails the call.
    ///
    /// # Arguments
    /// - `region` - Region code of the character (case-insensitive, non-empty)
    /// - `realm` - Realm slug, e.g. `area-52`
    /// - `name` - Character name
    /// - `fields` - Optional profile sections to include
    ///
    /// # Returns
    /// - `Ok(CharacterProfile)` - Decoded and normalized profile
    /// - `Err(RaiderIoError)` - Invalid region, transport, status or decode failure
    pub async fn fetch_character_profile(
        &self,
        region: &str,
        realm: &str,
        name: &str,
        fields: &ProfileFields,
    ) -> Result<CharacterProfile, RaiderIoError> {
        let region = normalize_region(region)?;

        let mut params: Vec<(&str, String)> = Vec::with_capacity(5);
        if !self.api_key.is_empty() {
            params.push(("access_key", self.api_key.clone()));
        }
        params.push(("region", region.clone()));
        params.push(("realm", realm.to_string()));
        params.push(("name", name.to_string()));
        if let Some(value) = fields.query_value() {
            params.push(("fields", value));
        }

        tracing::debug!(
            "Fetching character profile {}/{}/{} (fields: {:?})",
            region,
            realm,
            name,
            fields.query_value()
        );

        let response = self
            .http
            .get(format!(
                "{}/{}/characters/profile",
                self.api_url, self.api_version
            ))
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await?;

        let body = ensure_ok(response).await?;
        let mut profile: CharacterProfile = serde_json::from_slice(&body)?;
        profile.normalize();

        Ok(profile)
    }
}

fn normalize_region(region: &str) -> Result<String, RaiderIoError> {
    let region = region.trim().to_lowercase();
    if region.is_empty() {
        return Err(RaiderIoError::InvalidRegion);
    }
    Ok(region)
}

/// Rejects any status other than 200 and reads the full body.
async fn ensure_ok(response: Response) -> Result<Vec<u8>, RaiderIoError> {
    let status = response.status();
    if status != StatusCode::OK {
        tracing::warn!("Raider.IO responded with status {}", status);
        return Err(RaiderIoError::UpstreamStatus {
            status: status.as_u16(),
        });
    }

    Ok(response.bytes().await?.to_vec())
}
