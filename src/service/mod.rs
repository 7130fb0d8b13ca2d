//! Service layer between the bot's command handlers and the data/external layers.
//!
//! Services take plain string arguments from Discord interactions, coordinate the
//! Raider.IO client and the repositories, and return domain models or `AppError`.

pub mod character;
pub mod guild;
pub mod realm;

#[cfg(test)]
mod test;

pub use character::CharacterService;
pub use guild::GuildService;
pub use realm::RealmService;

/// Discord accepts at most this many autocomplete choices per response.
pub const MAX_AUTOCOMPLETE_CHOICES: usize = 25;
