use crate::{
    config::RaiderIoConfig,
    error::raiderio::RaiderIoError,
    external::raiderio::{field::ProfileField, ProfileFields, RaiderIoClient},
};
use std::time::Duration;
use test_utils::{fixture, raiderio::MockRaiderIo};


/// Client pointed at the mock server with a test access key and a short timeout.
fn client_for(server: &MockRaiderIo) -> RaiderIoClient {
    client_with(server, |_| {})
}

/// Same as [`client_for`] with the configuration adjusted before the client is built.
fn client_with<F>(server: &MockRaiderIo, adjust: F) -> RaiderIoClient
where
    F: FnOnce(&mut RaiderIoConfig),
{
    let mut config = RaiderIoConfig {
        api_url: server.base_url(),
        api_key: "test-key".to_string(),
        timeout: Duration::from_secs(2),
        ..RaiderIoConfig::default()
    };
    adjust(&mut config);

    RaiderIoClient::new(reqwest::Client::new(), config)
}
