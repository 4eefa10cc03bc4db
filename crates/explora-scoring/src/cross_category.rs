//! Cross-category analysis of primary tag sets.
//!
//! Measures how many distinct primary categories a location's theme tags span.
//! Spanning three or more categories saturates the diversity score at 1.0; a
//! single-category location scores roughly 0.33.

use serde::{Deserialize, Serialize};
use tracing::debug;

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::taxonomy::{categories_for_tags, CategoryMatch};

/// Number of distinct categories at which diversity saturates.
pub const DIVERSITY_SATURATION: usize = 3;

/// Result of grouping a location's primary tags by owning category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossCategoryAnalysis {
    /// Matched tags grouped by category, in registry declaration order.
    pub categories: Vec<CategoryMatch>,
    /// 0.0-1.0 cross-category richness score.
    pub diversity: f32,
    /// Category contributing the most tags. Ties resolve to the earliest
    /// category in registry declaration order.
    pub dominant_category: Option<String>,
}

impl CrossCategoryAnalysis {
    /// Number of distinct categories spanned.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Group primary tags by category and score cross-category richness.
///
/// Tags outside the registry contribute nothing. `diversity` is
/// `min(distinct_categories / 3, 1.0)`.
pub fn analyze_cross_category(primary_tags: &[String]) -> CrossCategoryAnalysis {
    let categories = categories_for_tags(primary_tags);

    let diversity = (categories.len() as f32 / DIVERSITY_SATURATION as f32).min(1.0);

    // categories_for_tags returns registry order, so max_by_key with a
    // strictly-greater comparison keeps the earliest category on ties.
    let dominant_category = categories
        .iter()
        .fold(None::<&CategoryMatch>, |best, candidate| match best {
            Some(current) if candidate.tags.len() <= current.tags.len() => Some(current),
            _ => Some(candidate),
        })
        .map(|m| m.category.clone());

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "cross_category",
        tag_count = primary_tags.len(),
        category_count = categories.len(),
        diversity,
        "cross-category analysis complete"
    );

    CrossCategoryAnalysis {
        categories,
        diversity,
        dominant_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_three_categories_saturate_diversity() {
        let analysis = analyze_cross_category(&strings(&[
            "Art Museums",
            "Urban Parks",
            "Rooftop Views",
        ]));
        assert_eq!(analysis.category_count(), 3);
        assert!((analysis.diversity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_single_category_diversity() {
        let analysis =
            analyze_cross_category(&strings(&["Urban Parks", "Botanical Gardens", "Calm Walks"]));
        assert_eq!(analysis.category_count(), 1);
        assert!((analysis.diversity - 1.0 / 3.0).abs() < 0.001);
        assert_eq!(analysis.dominant_category.as_deref(), Some("Parks & Nature"));
    }

    #[test]
    fn test_diversity_is_monotonic_in_category_count() {
        let one = analyze_cross_category(&strings(&["Urban Parks"]));
        let two = analyze_cross_category(&strings(&["Urban Parks", "Art Museums"]));
        let three = analyze_cross_category(&strings(&[
            "Urban Parks",
            "Art Museums",
            "Street Art",
        ]));
        let four = analyze_cross_category(&strings(&[
            "Urban Parks",
            "Art Museums",
            "Street Art",
            "Rooftop Views",
        ]));
        assert!(one.diversity < two.diversity);
        assert!(two.diversity < three.diversity);
        // Saturates at three distinct categories.
        assert!((three.diversity - 1.0).abs() < f32::EPSILON);
        assert!((four.diversity - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_dominant_category_by_tag_count() {
        let analysis = analyze_cross_category(&strings(&[
            "Urban Parks",
            "Botanical Gardens",
            "Art Museums",
        ]));
        assert_eq!(analysis.dominant_category.as_deref(), Some("Parks & Nature"));
    }

    // Ties resolve to the earliest category in registry declaration order;
    // Museums & Art is declared before Parks & Nature.
    #[test]
    fn test_dominant_category_tie_break_is_registry_order() {
        let analysis = analyze_cross_category(&strings(&["Urban Parks", "Art Museums"]));
        assert_eq!(analysis.dominant_category.as_deref(), Some("Museums & Art"));
    }

    #[test]
    fn test_empty_and_unknown_tags() {
        let analysis = analyze_cross_category(&[]);
        assert_eq!(analysis.category_count(), 0);
        assert_eq!(analysis.diversity, 0.0);
        assert!(analysis.dominant_category.is_none());

        let analysis = analyze_cross_category(&strings(&["Made Up Tag"]));
        assert_eq!(analysis.category_count(), 0);
        assert!(analysis.dominant_category.is_none());
    }
}
