//! Shared state handed to every bot event handler.

use sea_orm::DatabaseConnection;

use crate::external::raiderio::RaiderIoClient;

/// Resources shared across event handlers.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `RaiderIoClient` shares its HTTP connections and realm cache between clones.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the registration store.
    pub db: DatabaseConnection,

    /// Raider.IO client including the per-region realm cache.
    pub raiderio: RaiderIoClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, raiderio: RaiderIoClient) -> Self {
        Self { db, raiderio }
    }
}
