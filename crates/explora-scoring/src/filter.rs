//! Catalog discovery filters.
//!
//! The homepage search box, the category chips, the mood shelf, and the
//! accessibility profile all narrow the same location list; this module is the
//! single filtering path both the homepage and the trip planner call, followed
//! by personalization ranking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::{AccessibilityPreferences, Location, Mood, UserProfile};

use crate::mood::matches_mood;
use crate::personalize::rank_locations;

/// Secondary tag required when the user needs wheelchair access.
const WHEELCHAIR_TAG: &str = "Wheelchair Accessible";
/// Secondary tag excluded when the user avoids stairs.
const STAIRS_TAG: &str = "Lots of Stairs";

/// Category chip selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only favorited locations.
    Favorites,
    /// Locations carrying the given primary tag.
    Primary(String),
}

/// Everything the discovery surface can narrow the catalog by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Free-text search, matched accent- and case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

impl CatalogFilter {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }
}

/// Lowercase and strip accents for search comparison ("Schönbrunn" matches
/// "schonbrunn").
pub fn normalize_search_text(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// True when the location's name, description, legacy category, address, or
/// any visible tag contains the normalized query.
pub fn matches_search(location: &Location, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return true;
    }

    let haystacks = [
        normalize_search_text(&location.name),
        normalize_search_text(&location.description),
        normalize_search_text(&location.category),
    ];
    if haystacks.iter().any(|h| h.contains(normalized_query)) {
        return true;
    }

    if let Some(address) = &location.address {
        if normalize_search_text(address).contains(normalized_query) {
            return true;
        }
    }

    location
        .tags
        .primary
        .iter()
        .chain(&location.tags.secondary)
        .any(|tag| normalize_search_text(tag).contains(normalized_query))
}

/// True when the location satisfies the user's accessibility needs.
pub fn matches_accessibility(location: &Location, prefs: &AccessibilityPreferences) -> bool {
    if prefs.wheelchair_needed
        && !location
            .tags
            .secondary
            .iter()
            .any(|tag| tag == WHEELCHAIR_TAG)
    {
        return false;
    }

    if prefs.avoid_stairs && location.tags.secondary.iter().any(|tag| tag == STAIRS_TAG) {
        return false;
    }

    true
}

fn matches_category(
    location: &Location,
    category: &CategoryFilter,
    favorite_ids: &HashSet<String>,
) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Favorites => favorite_ids.contains(&location.id),
        CategoryFilter::Primary(tag) => location.tags.primary.contains(tag),
    }
}

/// Narrow the catalog by the filter and the profile, then rank by
/// personalization score.
pub fn discover(
    locations: Vec<Location>,
    filter: &CatalogFilter,
    profile: Option<&UserProfile>,
    favorite_ids: &HashSet<String>,
) -> Vec<Location> {
    let total = locations.len();
    let normalized_query = filter
        .query
        .as_deref()
        .map(|q| normalize_search_text(q.trim()))
        .unwrap_or_default();

    let filtered: Vec<Location> = locations
        .into_iter()
        .filter(|location| matches_category(location, &filter.category, favorite_ids))
        .filter(|location| {
            profile
                .map(|p| matches_accessibility(location, &p.accessibility))
                .unwrap_or(true)
        })
        .filter(|location| matches_search(location, &normalized_query))
        .filter(|location| {
            filter
                .mood
                .map(|mood| matches_mood(&location.tags, mood))
                .unwrap_or(true)
        })
        .collect();

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "filter",
        input_count = total,
        result_count = filtered.len(),
        has_query = !normalized_query.is_empty(),
        "discovery filter applied"
    );

    let preferred_tags = profile
        .map(|p| p.travel_style.preferred_tags.as_slice())
        .unwrap_or(&[]);
    rank_locations(filtered, preferred_tags, favorite_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use explora_core::{LocationTags, TravelStyle};

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    fn location(id: &str, name: &str, secondary: &[&str]) -> Location {
        Location {
            id: id.into(),
            name: name.into(),
            description: "A place in Vienna".into(),
            category: "Attraction".into(),
            address: Some(format!("{} Straße 1, Vienna", name)),
            rating: None,
            tags: LocationTags {
                primary: strings(&["Urban Parks", "Calm Walks", "Art Museums"]),
                secondary: strings(secondary),
                hidden: vec![],
                contextual: vec![],
            },
        }
    }

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize_search_text("Schönbrunn"), "schonbrunn");
        assert_eq!(normalize_search_text("Café Central"), "cafe central");
        assert_eq!(normalize_search_text("PRATER"), "prater");
    }

    #[test]
    fn test_search_matches_name_and_address() {
        let loc = location("1", "Schönbrunn", &["Outdoor"]);
        assert!(matches_search(&loc, "schonbrunn"));
        assert!(matches_search(&loc, "vienna"));
        assert!(matches_search(&loc, ""));
        assert!(!matches_search(&loc, "belvedere"));
    }

    #[test]
    fn test_search_matches_tags() {
        let loc = location("1", "Stadtpark", &["Outdoor", "Kid-Friendly"]);
        assert!(matches_search(&loc, "kid-friendly"));
        assert!(matches_search(&loc, "urban parks"));
    }

    #[test]
    fn test_accessibility_wheelchair() {
        let accessible = location("1", "Albertina", &["Wheelchair Accessible", "Indoor"]);
        let stairs = location("2", "Kahlenberg", &["Lots of Stairs", "Outdoor"]);

        let needs_wheelchair = AccessibilityPreferences {
            wheelchair_needed: true,
            ..Default::default()
        };
        assert!(matches_accessibility(&accessible, &needs_wheelchair));
        assert!(!matches_accessibility(&stairs, &needs_wheelchair));

        let avoids_stairs = AccessibilityPreferences {
            avoid_stairs: true,
            ..Default::default()
        };
        assert!(matches_accessibility(&accessible, &avoids_stairs));
        assert!(!matches_accessibility(&stairs, &avoids_stairs));
    }

    #[test]
    fn test_category_filter_favorites() {
        let a = location("a", "Albertina", &["Indoor"]);
        let b = location("b", "Belvedere", &["Outdoor"]);
        let favorites: HashSet<String> = ["b".to_string()].into_iter().collect();

        let filter = CatalogFilter::default().with_category(CategoryFilter::Favorites);
        let result = discover(vec![a, b], &filter, None, &favorites);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_category_filter_primary_tag() {
        let mut a = location("a", "Albertina", &["Indoor"]);
        a.tags.primary = strings(&["Art Museums", "Permanent Collections", "Iconic Architecture"]);
        let b = location("b", "Stadtpark", &["Outdoor"]);

        let filter =
            CatalogFilter::default().with_category(CategoryFilter::Primary("Urban Parks".into()));
        let result = discover(vec![a, b], &filter, None, &HashSet::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_discover_ranks_by_profile() {
        let a = location("a", "Albertina", &["Indoor"]);
        let b = location("b", "Stadtpark", &["Outdoor"]);

        let mut profile = UserProfile {
            uid: "u1".into(),
            display_name: "Tester".into(),
            travel_style: TravelStyle::default(),
            accessibility: AccessibilityPreferences::default(),
        };
        profile.travel_style.preferred_tags = strings(&["Outdoor"]);

        let result = discover(
            vec![a, b],
            &CatalogFilter::default(),
            Some(&profile),
            &HashSet::new(),
        );
        assert_eq!(result[0].id, "b");
    }

    #[test]
    fn test_catalog_filter_serialization() {
        let filter = CatalogFilter::default()
            .with_query("schonbrunn")
            .with_mood(Mood::Peaceful)
            .with_category(CategoryFilter::Primary("Urban Parks".into()));
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("peaceful"));
        let back: CatalogFilter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, filter);

        // An empty filter round-trips from an empty object.
        let empty: CatalogFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, CatalogFilter::default());
    }

    #[test]
    fn test_discover_with_mood_and_query() {
        let park = location("1", "Stadtpark", &["Shaded Areas", "Outdoor"]);
        let mut museum = location("2", "Albertina", &["Indoor"]);
        museum.tags.primary = strings(&["Art Museums", "Permanent Collections", "Iconic Architecture"]);

        let filter = CatalogFilter::default()
            .with_mood(Mood::Peaceful)
            .with_query("stadtpark");
        let result = discover(vec![park, museum], &filter, None, &HashSet::new());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }
}
