use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error("Failed to start mock server: {0}")]
    MockServer(#[from] std::io::Error),
}
