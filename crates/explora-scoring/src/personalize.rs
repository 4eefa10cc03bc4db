//! Personalization scoring and ranking of the location list.
//!
//! Ranks locations by weighted exact-match count against the user's preferred
//! tags, with a flat boost for favorites. Matching is exact, case-sensitive
//! string equality: tags are canonical registry strings, so there is nothing
//! to fuzz here (unlike mood matching).

use std::collections::HashSet;

use tracing::debug;

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::Location;

/// Base score every location starts with.
const BASE_SCORE: i32 = 1;
/// Points per primary-tag exact match.
const PRIMARY_MATCH_POINTS: i32 = 3;
/// Points per secondary-tag exact match.
const SECONDARY_MATCH_POINTS: i32 = 2;
/// Alignment bonus at three or more total matches.
const STRONG_ALIGNMENT_BONUS: i32 = 2;
/// Alignment bonus at exactly two total matches.
const MILD_ALIGNMENT_BONUS: i32 = 1;
/// Flat boost for favorited locations.
const FAVORITE_BOOST: i32 = 5;

/// Score a single location against the user's preferences.
pub fn personalization_score(
    location: &Location,
    preferred_tags: &[String],
    favorite_ids: &HashSet<String>,
) -> i32 {
    let mut score = BASE_SCORE;

    if !preferred_tags.is_empty() {
        let primary_matches = location
            .tags
            .primary
            .iter()
            .filter(|tag| preferred_tags.contains(tag))
            .count() as i32;
        let secondary_matches = location
            .tags
            .secondary
            .iter()
            .filter(|tag| preferred_tags.contains(tag))
            .count() as i32;

        score += primary_matches * PRIMARY_MATCH_POINTS;
        score += secondary_matches * SECONDARY_MATCH_POINTS;

        let total_matches = primary_matches + secondary_matches;
        if total_matches >= 3 {
            score += STRONG_ALIGNMENT_BONUS;
        } else if total_matches == 2 {
            score += MILD_ALIGNMENT_BONUS;
        }
    }

    if favorite_ids.contains(&location.id) {
        score += FAVORITE_BOOST;
    }

    score
}

/// Sort locations by personalization score, highest first.
///
/// Ties break alphabetically by location name, so the ordering is a stable
/// total order for any fixed profile and favorite set.
pub fn rank_locations(
    mut locations: Vec<Location>,
    preferred_tags: &[String],
    favorite_ids: &HashSet<String>,
) -> Vec<Location> {
    locations.sort_by(|a, b| {
        let score_a = personalization_score(a, preferred_tags, favorite_ids);
        let score_b = personalization_score(b, preferred_tags, favorite_ids);
        score_b.cmp(&score_a).then_with(|| a.name.cmp(&b.name))
    });

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "personalize",
        result_count = locations.len(),
        preferred_tag_count = preferred_tags.len(),
        favorite_count = favorite_ids.len(),
        "locations ranked"
    );

    locations
}
