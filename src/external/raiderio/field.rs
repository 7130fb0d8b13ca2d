//! Optional profile sections that can be requested from the character endpoint.

use std::fmt;

/// An optional section of a character profile.
///
/// Raider.IO only includes these sub-objects when they are listed in the `fields`
/// query parameter. Selection never changes the base profile attributes.
///
/// Lists every selector the endpoint recognizes; the embed only requests season
/// scores.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Gear,
    Talents,
    TalentsCategorized,
    Guild,
    Covenant,
    RaidProgression,
    /// Mythic+ score breakdown for the current season
    MythicPlusScoresBySeason,
    MythicPlusRanks,
    MythicPlusRecentRuns,
    MythicPlusBestRuns,
    MythicPlusAlternateRuns,
    MythicPlusHighestLevelRuns,
    MythicPlusWeeklyHighestLevelRuns,
    MythicPlusPreviousWeeklyHighestLevelRuns,
    PreviousMythicPlusRanks,
    RaidAchievementMeta,
    RaidAchievementCurve,
}

impl ProfileField {
    /// The selector string sent to the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gear => "gear",
            Self::Talents => "talents",
            Self::TalentsCategorized => "talents:categorized",
            Self::Guild => "guild",
            Self::Covenant => "covenant",
            Self::RaidProgression => "raid_progression",
            Self::MythicPlusScoresBySeason => "mythic_plus_scores_by_season:current",
            Self::MythicPlusRanks => "mythic_plus_ranks",
            Self::MythicPlusRecentRuns => "mythic_plus_recent_runs",
            Self::MythicPlusBestRuns => "mythic_plus_best_runs",
            Self::MythicPlusAlternateRuns => "mythic_plus_alternate_runs",
            Self::MythicPlusHighestLevelRuns => "mythic_plus_highest_level_runs",
            Self::MythicPlusWeeklyHighestLevelRuns => "mythic_plus_weekly_highest_level_runs",
            Self::MythicPlusPreviousWeeklyHighestLevelRuns => {
                "mythic_plus_previous_weekly_highest_level_runs"
            }
            Self::PreviousMythicPlusRanks => "previous_mythic_plus_ranks",
            Self::RaidAchievementMeta => "raid_achievement_meta",
            Self::RaidAchievementCurve => "raid_achievement_curve",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, de-duplicated set of profile sections to request.
///
/// # Example
///
/// ```rust,ignore
/// let fields = ProfileFields::new()
///     .with(ProfileField::MythicPlusScoresBySeason)
///     .with(ProfileField::Gear);
/// assert_eq!(fields.query_value().as_deref(), Some("mythic_plus_scores_by_season:current,gear"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    fields: Vec<ProfileField>,
}

impl ProfileFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sections every rendered character embed relies on.
    pub fn for_embed() -> Self {
        Self::new().with(ProfileField::MythicPlusScoresBySeason)
    }

    /// Adds a section; adding one that is already present keeps the original position.
    pub fn with(mut self, field: ProfileField) -> Self {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
        self
    }

    /// Comma-joined value for the `fields` query parameter, or `None` when no
    /// section is selected and the parameter should be omitted.
    pub fn query_value(&self) -> Option<String> {
        if self.fields.is_empty() {
            return None;
        }

        Some(
            self.fields
                .iter()
                .map(ProfileField::as_str)
                .collect::<Vec<_>>()
                .join(","),
        )
    }
}

impl FromIterator<ProfileField> for ProfileFields {
    fn from_iter<I: IntoIterator<Item = ProfileField>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}
