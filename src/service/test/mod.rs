use crate::{
    config::RaiderIoConfig,
    error::{raiderio::RaiderIoError, AppError},
    external::raiderio::RaiderIoClient,
    model::character::RegisterCharacterParam,
};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory, fixture, raiderio::MockRaiderIo};

mod character;
mod guild;
mod realm;

fn client_for(server: &MockRaiderIo) -> RaiderIoClient {
    RaiderIoClient::new(
        reqwest::Client::new(),
        RaiderIoConfig {
            api_url: server.base_url(),
            timeout: Duration::from_secs(2),
            ..RaiderIoConfig::default()
        },
    )
}
