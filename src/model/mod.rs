//! Domain models shared between the service layer and the bot.
//!
//! Entity models are converted into these types at the repository boundary so the
//! bot never handles SeaORM models directly.

pub mod character;
pub mod guild;
