//! Discord bot: gateway event handling and slash commands.
//!
//! The bot connects with the `GUILDS` intent only. It receives guild lifecycle
//! events (used to keep the guild table current) and interactions; slash commands
//! and autocomplete requests are routed through the static table in [`command`].
//!
//! Commands are (re)registered on every `ready` event when `SYNC_COMMANDS` is set,
//! either per configured guild (instant) or globally (may take up to an hour to
//! propagate on Discord's side).

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
