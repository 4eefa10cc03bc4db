//! Mood-based filtering of the location set.
//!
//! Each mood maps to a handful of tag/category name fragments. A location
//! matches when any fragment is a case-insensitive substring of any of its
//! tags, or vice versa. The bidirectional check is deliberately loose: the
//! vocabulary is small and fixed, and an empty mood shelf is worse than an
//! occasional over-match.

use tracing::debug;

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::{Location, LocationTags, Mood};

/// True when any of the location's tags (any layer) matches the mood.
pub fn matches_mood(tags: &LocationTags, mood: Mood) -> bool {
    let location_tags = tags.all_tags();
    mood.tags().iter().any(|fragment| {
        let fragment = fragment.to_lowercase();
        location_tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            tag.contains(&fragment) || fragment.contains(&tag)
        })
    })
}

/// Keep only the locations matching the selected mood.
///
/// No ranking is applied here; personalization ordering is the caller's
/// concern.
pub fn filter_by_mood(locations: Vec<Location>, mood: Mood) -> Vec<Location> {
    let total = locations.len();
    let matched: Vec<Location> = locations
        .into_iter()
        .filter(|location| matches_mood(&location.tags, mood))
        .collect();

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "mood",
        mood = %mood,
        input_count = total,
        result_count = matched.len(),
        "mood filter applied"
    );

    matched
}
