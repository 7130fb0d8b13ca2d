//! Clients for third-party web APIs.
//!
//! The bot talks to a single external service, Raider.IO, for realm listings and
//! character profiles. Clients here own their HTTP configuration and any caching;
//! they know nothing about Discord or the registration store.

pub mod raiderio;
