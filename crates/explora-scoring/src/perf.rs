//! Aggregate tag-statistics heuristics for the admin dashboard.
//!
//! Purely informational: the advisories describe what the backing document
//! store will need as the catalog grows; nothing here creates indexes or
//! plans queries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::Location;

/// Distinct primary tags beyond which composite indexes become worthwhile.
const INDEXING_TAG_THRESHOLD: usize = 50;
/// Average tags per location beyond which query cost becomes a concern.
const QUERY_AVG_TAG_THRESHOLD: f64 = 15.0;
/// Catalog size at which a caching layer becomes critical.
const SCALE_LOCATION_THRESHOLD: usize = 100;
/// Catalog size at which pagination and denormalization are recommended.
const LARGE_CATALOG_THRESHOLD: usize = 500;

/// Scale and indexing advisories over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceAdvisory {
    pub indexing_concerns: Vec<String>,
    pub query_concerns: Vec<String>,
    pub scalability_concerns: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Inspect aggregate tag statistics and emit advisories.
///
/// An empty catalog yields an empty advisory rather than dividing by zero.
pub fn analyze_performance_concerns(locations: &[Location]) -> PerformanceAdvisory {
    if locations.is_empty() {
        return PerformanceAdvisory::default();
    }

    let total_tags: usize = locations.iter().map(|loc| loc.tags.total()).sum();
    let average_tags = total_tags as f64 / locations.len() as f64;
    let unique_primary: HashSet<&str> = locations
        .iter()
        .flat_map(|loc| loc.tags.primary.iter().map(String::as_str))
        .collect();

    let mut advisory = PerformanceAdvisory::default();

    if unique_primary.len() > INDEXING_TAG_THRESHOLD {
        advisory.indexing_concerns.push(format!(
            "High primary tag variety ({}). Consider composite indexes.",
            unique_primary.len()
        ));
    }

    if average_tags > QUERY_AVG_TAG_THRESHOLD {
        advisory.query_concerns.push(format!(
            "High average tags per location ({:.1}). May impact query performance.",
            average_tags
        ));
    }

    if locations.len() > SCALE_LOCATION_THRESHOLD {
        advisory
            .scalability_concerns
            .push("Approaching scale where caching layer becomes critical".to_string());
    }

    advisory.recommendations.push(
        "Implement document-store composite indexes for common tag combinations".to_string(),
    );
    advisory
        .recommendations
        .push("Consider tag popularity scoring for search optimization".to_string());
    advisory
        .recommendations
        .push("Plan tag hierarchy caching for frequent queries".to_string());

    if locations.len() > LARGE_CATALOG_THRESHOLD {
        advisory
            .recommendations
            .push("Implement pagination for tag-based queries".to_string());
        advisory
            .recommendations
            .push("Consider tag denormalization for performance".to_string());
    }

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "perf",
        location_count = locations.len(),
        unique_primary_tags = unique_primary.len(),
        average_tags,
        "performance heuristics computed"
    );

    advisory
}

#[cfg(test)]
mod tests {
    use super::*;
    use explora_core::LocationTags;

    fn location_with(primary: Vec<String>, hidden: Vec<String>) -> Location {
        Location {
            id: "x".into(),
            name: "X".into(),
            description: String::new(),
            category: "Attraction".into(),
            address: None,
            rating: None,
            tags: LocationTags {
                primary,
                secondary: vec!["Indoor".into(), "1-Hour Visit".into()],
                hidden,
                contextual: vec![],
            },
        }
    }

    fn small_catalog(count: usize) -> Vec<Location> {
        (0..count)
            .map(|i| {
                let mut loc = location_with(
                    vec![
                        "Urban Parks".into(),
                        "Art Museums".into(),
                        "Street Art".into(),
                    ],
                    vec![],
                );
                loc.id = format!("loc-{}", i);
                loc
            })
            .collect()
    }

    #[test]
    fn test_empty_catalog_yields_empty_advisory() {
        let advisory = analyze_performance_concerns(&[]);
        assert_eq!(advisory, PerformanceAdvisory::default());
    }

    #[test]
    fn test_small_catalog_gets_base_recommendations_only() {
        let advisory = analyze_performance_concerns(&small_catalog(10));
        assert!(advisory.indexing_concerns.is_empty());
        assert!(advisory.query_concerns.is_empty());
        assert!(advisory.scalability_concerns.is_empty());
        assert_eq!(advisory.recommendations.len(), 3);
    }

    #[test]
    fn test_high_tag_variety_triggers_indexing_note() {
        // 60 distinct synthetic primary tags across the catalog.
        let catalog: Vec<Location> = (0..20)
            .map(|i| {
                location_with(
                    vec![
                        format!("tag-{}", i * 3),
                        format!("tag-{}", i * 3 + 1),
                        format!("tag-{}", i * 3 + 2),
                    ],
                    vec![],
                )
            })
            .collect();
        let advisory = analyze_performance_concerns(&catalog);
        assert_eq!(advisory.indexing_concerns.len(), 1);
        assert!(advisory.indexing_concerns[0].contains("60"));
    }

    #[test]
    fn test_heavy_tagging_triggers_query_note() {
        let hidden: Vec<String> = (0..12).map(|i| format!("hidden-{}", i)).collect();
        let catalog = vec![location_with(
            vec!["a".into(), "b".into(), "c".into()],
            hidden,
        )];
        // 3 + 2 + 12 = 17 tags on the single location.
        let advisory = analyze_performance_concerns(&catalog);
        assert_eq!(advisory.query_concerns.len(), 1);
        assert!(advisory.query_concerns[0].contains("17.0"));
    }

    #[test]
    fn test_catalog_size_thresholds() {
        let advisory = analyze_performance_concerns(&small_catalog(101));
        assert_eq!(advisory.scalability_concerns.len(), 1);
        assert_eq!(advisory.recommendations.len(), 3);

        let advisory = analyze_performance_concerns(&small_catalog(501));
        assert_eq!(advisory.scalability_concerns.len(), 1);
        assert_eq!(advisory.recommendations.len(), 5);
        assert!(advisory
            .recommendations
            .iter()
            .any(|r| r.contains("pagination") || r.contains("Implement pagination")));
    }
}
