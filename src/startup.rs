use std::time::Duration;

use crate::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Accepts `postgres://` and `sqlite:` connection strings. A SQLite URL without an
/// explicit `mode` opens read-write and creates the file on first start. All
/// pending SeaORM migrations run before this returns, so it must complete before
/// the bot starts handling events.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(sqlite_create_if_missing(&config.database_url));
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Appends `mode=rwc` to file-backed SQLite URLs that don't choose a mode.
fn sqlite_create_if_missing(url: &str) -> String {
    if !url.starts_with("sqlite:") || url.contains(":memory:") || url.contains("mode=") {
        return url.to_string();
    }

    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}mode=rwc", url, separator)
}

/// Builds the HTTP client used for Raider.IO requests.
///
/// Redirects are disabled; the API answers directly. Per-request timeouts are
/// applied by the Raider.IO client itself.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}
