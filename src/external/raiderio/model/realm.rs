use serde::{Deserialize, Serialize};

/// Top-level payload of the connected-realms endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedRealmsResponse {
    pub realm_listing: RealmListing,
}

/// Only the realm groups are decoded; region, season and raid metadata that the
/// API sends alongside are skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct RealmListing {
    pub realms: Vec<RealmGroup>,
}

/// A group of realms sharing one player pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealmGroup {
    pub connected_realms: Vec<ConnectedRealm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectedRealm {
    pub name: String,
    pub slug: String,
}

/// A single realm, flattened out of the connected-realm groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealmEntry {
    pub region: String,
    /// Display name, e.g. `Area 52`
    pub realm: String,
    /// API identifier, e.g. `area-52`
    pub slug: String,
}

impl ConnectedRealmsResponse {
    /// Flattens every connected realm of every group into one entry, tagged with
    /// the region that was requested.
    pub fn into_realm_entries(self, region: &str) -> Vec<RealmEntry> {
        self.realm_listing
            .realms
            .into_iter()
            .flat_map(|group| group.connected_realms)
            .map(|realm| RealmEntry {
                region: region.to_string(),
                realm: realm.name,
                slug: realm.slug,
            })
            .collect()
    }
}

/// Case-insensitive substring match on the realm display name.
///
/// An empty query matches every realm.
pub fn filter_realms(realms: &[RealmEntry], query: &str) -> Vec<RealmEntry> {
    if query.is_empty() {
        return realms.to_vec();
    }

    let query = query.to_lowercase();
    realms
        .iter()
        .filter(|realm| realm.realm.to_lowercase().contains(&query))
        .cloned()
        .collect()
}
