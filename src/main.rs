mod bot;
mod config;
mod data;
mod error;
mod external;
mod model;
mod service;
mod startup;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, LogFormat},
    error::AppError,
    external::raiderio::RaiderIoClient,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let log_format = LogFormat::from_env();

    let registry = tracing_subscriber::registry().with(
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    );
    match log_format {
        Ok(LogFormat::Json) => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if let Err(e) = log_format {
        tracing::warn!("{}, falling back to text logs", e);
    }

    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let raiderio = RaiderIoClient::new(http_client, config.raiderio.clone());

    if raiderio.realm_cache().is_enabled() {
        tracing::info!(
            "Caching realm listings for {}s",
            config.raiderio.cache_ttl.as_secs()
        );
    } else {
        tracing::info!("Realm listing cache disabled");
    }

    bot::start::start_bot(&config, AppState::new(db, raiderio)).await
}
