use crate::{
    error::AppError,
    external::raiderio::{RaiderIoClient, RealmEntry},
    service::MAX_AUTOCOMPLETE_CHOICES,
};

pub struct RealmService<'a> {
    raiderio: &'a RaiderIoClient,
}

impl<'a> RealmService<'a> {
    pub fn new(raiderio: &'a RaiderIoClient) -> Self {
        Self { raiderio }
    }

    /// Realm choices for the `realm` autocomplete of `/wow reg-character`.
    ///
    /// Returns nothing until a region has been picked, since the realm listing is
    /// per region.
    ///
    /// # Arguments
    /// - `region` - Region option as typed so far (may be empty)
    /// - `query` - Partial realm name
    ///
    /// # Returns
    /// - `Ok(Vec<RealmEntry>)` - At most 25 matching realms in upstream order
    /// - `Err(AppError::RaiderIoErr)` - Realm listing could not be fetched
    pub async fn autocomplete_realms(
        &self,
        region: &str,
        query: &str,
    ) -> Result<Vec<RealmEntry>, AppError> {
        if region.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut realms = self
            .raiderio
            .fetch_connected_realms(region, query.trim())
            .await?;
        realms.truncate(MAX_AUTOCOMPLETE_CHOICES);

        Ok(realms)
    }
}
