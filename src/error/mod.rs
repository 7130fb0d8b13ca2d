//! Error types and user-facing message mapping.
//!
//! `AppError` is the top-level error returned by the service layer and the bot's
//! command handlers. Domain-specific errors (`ConfigError`, `RaiderIoError`) are
//! wrapped through `#[from]` conversions so `?` works across layers. Errors are
//! logged with full detail where they are handled; only the sanitized text from
//! [`AppError::user_message`] is ever sent back to Discord.

pub mod config;
pub mod raiderio;

use thiserror::Error;

use crate::error::{config::ConfigError, raiderio::RaiderIoError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Covers connection failures, failed migrations and failed queries against the
    /// registration store.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Raider.IO request failed (transport, upstream status or decoding).
    #[error(transparent)]
    RaiderIoErr(#[from] RaiderIoError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// No registration matched the lookup.
    ///
    /// # Fields
    /// - Message describing what was not found, safe to show to users
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the message shown to the Discord user for this error.
    ///
    /// Upstream failures are reported as "not found" since the most common cause is a
    /// misspelled character or realm. Storage and internal failures get a generic
    /// retry message; their details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) => msg.clone(),
            Self::RaiderIoErr(RaiderIoError::InvalidRegion) => {
                "Please choose a region for the character.".to_string()
            }
            Self::RaiderIoErr(_) => {
                "Character not found. Please double-check the spelling and try again.".to_string()
            }
            Self::DbErr(_) => {
                "Failed to access registered characters. Please try again later.".to_string()
            }
            _ => "Something went wrong. Please try again later.".to_string(),
        }
    }
}
