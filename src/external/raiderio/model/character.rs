use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Character profile returned by `/characters/profile`.
///
/// Optional sections (such as season scores) are only present when requested
/// through [`ProfileFields`](crate::external::raiderio::ProfileFields) and default
/// to empty otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub race: String,
    pub class: String,
    #[serde(default)]
    pub active_spec_name: Option<String>,
    #[serde(default)]
    pub active_spec_role: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub faction: String,
    #[serde(default)]
    pub achievement_points: i64,
    #[serde(default)]
    pub thumbnail_url: String,
    pub region: String,
    pub realm: String,
    #[serde(default)]
    pub last_crawled_at: Option<DateTime<Utc>>,
    pub profile_url: String,
    #[serde(default)]
    pub profile_banner: String,
    #[serde(default)]
    pub mythic_plus_scores_by_season: Vec<MythicPlusScoresBySeason>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MythicPlusScoresBySeason {
    pub season: String,
    #[serde(default)]
    pub scores: MythicPlusScores,
    #[serde(default)]
    pub segments: MythicPlusSegments,
}

/// Score per role and per specialization slot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MythicPlusScores {
    pub all: f64,
    pub dps: f64,
    pub healer: f64,
    pub tank: f64,
    pub spec_0: f64,
    pub spec_1: f64,
    pub spec_2: f64,
    pub spec_3: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MythicPlusSegments {
    pub all: MythicPlusSegment,
    pub dps: MythicPlusSegment,
    pub healer: MythicPlusSegment,
    pub tank: MythicPlusSegment,
    pub spec_0: MythicPlusSegment,
    pub spec_1: MythicPlusSegment,
    pub spec_2: MythicPlusSegment,
    pub spec_3: MythicPlusSegment,
}

/// A score together with the colour Raider.IO uses for its bracket.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MythicPlusSegment {
    pub score: f64,
    /// Hex colour such as `#ff8000`
    pub color: String,
}

impl CharacterProfile {
    /// Overall score of the first season in the response, which is the current one
    /// when `mythic_plus_scores_by_season:current` was requested.
    pub fn current_score(&self) -> Option<f64> {
        self.mythic_plus_scores_by_season
            .first()
            .map(|season| season.scores.all)
    }

    /// Cleans up fields that are rendered verbatim.
    ///
    /// Gender is title-cased. Thumbnail and banner must be absolute http(s) URLs;
    /// anything else is cleared so Discord does not reject the embed.
    pub(crate) fn normalize(&mut self) {
        self.gender = title_case(&self.gender);
        clear_invalid_url("thumbnail_url", &mut self.thumbnail_url);
        clear_invalid_url("profile_banner", &mut self.profile_banner);
    }
}

fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn clear_invalid_url(field: &str, value: &mut String) {
    if value.is_empty() {
        return;
    }

    match url::Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => {
            tracing::warn!(
                "Discarding {} '{}' with unsupported scheme {}",
                field,
                value,
                url.scheme()
            );
            value.clear();
        }
        Err(e) => {
            tracing::warn!("Discarding invalid {} '{}': {}", field, value, e);
            value.clear();
        }
    }
}
