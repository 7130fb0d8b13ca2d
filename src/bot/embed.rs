//! Embed builders for command responses.

use serenity::all::{CreateEmbed, CreateEmbedFooter, CreateInteractionResponseMessage};

use crate::{external::raiderio::CharacterProfile, model::character::CharacterStats};

pub const COLOR_PRIMARY: u32 = 0x5c5fea;
pub const COLOR_DANGER: u32 = 0xd43535;
/// Raider.IO blue used for character embeds
pub const COLOR_WOW: u32 = 0x00AEEF;

/// Plain informational reply.
pub fn message(content: impl Into<String>) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().embed(info_embed(content))
}

/// Error reply, only visible to the invoking user.
pub fn error(content: impl Into<String>) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .embed(error_embed(content))
        .ephemeral(true)
}

fn info_embed(content: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().description(content).color(COLOR_PRIMARY)
}

fn error_embed(content: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new().description(content).color(COLOR_DANGER)
}

pub fn character_message(stats: &CharacterStats) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new().embed(character_stats(stats))
}

/// Character embed with the registration date, rendered in the reader's timezone.
fn character_stats(stats: &CharacterStats) -> CreateEmbed {
    character(&stats.profile).field(
        "Registered",
        format!("<t:{}:D>", stats.registration.registered_at.timestamp()),
        true,
    )
}

/// Builds the embed for a character profile.
///
/// Thumbnail, banner and footer are only set when the profile has them; the
/// client has already cleared URLs Discord would reject.
pub fn character(profile: &CharacterProfile) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&profile.name)
        .color(COLOR_WOW)
        .description(character_description(profile));

    if !profile.profile_url.is_empty() {
        embed = embed.url(&profile.profile_url);
    }

    if !profile.thumbnail_url.is_empty() {
        embed = embed.thumbnail(&profile.thumbnail_url);
    }

    if !profile.profile_banner.is_empty() {
        embed = embed.image(&profile.profile_banner);
    }

    if let Some(crawled_at) = profile.last_crawled_at {
        embed = embed.footer(CreateEmbedFooter::new(format!(
            "Last crawled at {}",
            crawled_at.format("%Y-%m-%d %H:%M:%S")
        )));
    }

    embed
}

fn character_description(profile: &CharacterProfile) -> String {
    let score = profile
        .current_score()
        .map(|score| format!("{:.2}", score))
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        format!("**Region:** {}", profile.region.to_uppercase()),
        format!("**Realm:** {}", profile.realm.to_uppercase()),
        format!("**Faction:** {}", profile.faction.to_uppercase()),
        format!("**Class:** {}", profile.class.to_uppercase()),
    ];

    if let Some(spec) = &profile.active_spec_name {
        lines.push(format!("**Spec:** {}", spec));
    }

    lines.push(format!("**Mythic+ Score:** {}", score));
    lines.push(format!("**Raider.IO Profile:** [Link]({})", profile.profile_url));

    lines.join("\n")
}
