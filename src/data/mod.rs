//! Database repository layer.
//!
//! Repository structs borrow a `DatabaseConnection` and perform single-statement
//! queries through SeaORM. Entity models are converted into domain models before
//! they leave this module.

pub mod guild;
pub mod wow_character;

#[cfg(test)]
mod test;

pub use guild::DiscordGuildRepository;
pub use wow_character::WowCharacterRepository;
