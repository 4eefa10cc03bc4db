//! Composite quality scoring for catalog locations.
//!
//! Combines structural validity, tag richness, and cross-category diversity
//! into a single 0-100 rating for the admin quality-control dashboard.

use serde::{Deserialize, Serialize};
use tracing::debug;

use explora_core::logging::SUBSYSTEM_SCORING;
use explora_core::taxonomy::secondary_group_coverage;
use explora_core::validation::validate_location_tags;
use explora_core::Location;

use crate::cross_category::{analyze_cross_category, CrossCategoryAnalysis, DIVERSITY_SATURATION};

/// Points awarded for a structurally valid tag set.
const VALIDITY_POINTS: f32 = 40.0;
/// Points per primary tag, capped at 40.
const PRIMARY_POINTS_PER_TAG: f32 = 8.0;
const PRIMARY_POINTS_CAP: f32 = 40.0;
/// Points per secondary tag, capped at 20.
const SECONDARY_POINTS_PER_TAG: f32 = 4.0;
const SECONDARY_POINTS_CAP: f32 = 20.0;
/// Weight of the diversity score.
const DIVERSITY_POINTS: f32 = 20.0;
/// Bonus for carrying any hidden / contextual tags.
const HIDDEN_BONUS: f32 = 10.0;
const CONTEXTUAL_BONUS: f32 = 10.0;

/// Per-layer tag detail for the quality report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBreakdown {
    pub primary_count: usize,
    /// Categories the primary tags span.
    pub primary_categories: Vec<String>,
    pub secondary_count: usize,
    /// Secondary groups covered.
    pub secondary_coverage: Vec<String>,
    pub hidden_count: usize,
    /// The hidden insight tags themselves (admin view only).
    pub hidden_insights: Vec<String>,
    pub contextual_count: usize,
    /// The contextual timing tags themselves.
    pub contextual_timing: Vec<String>,
}

/// Full quality-control report for a single location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationQualityReport {
    pub location_id: String,
    pub location_name: String,
    /// True when validation found no blocking errors.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// Improvement hints, distinct from validation warnings.
    pub suggestions: Vec<String>,
    pub cross_category: CrossCategoryAnalysis,
    pub tag_breakdown: TagBreakdown,
    /// 0-100 composite rating.
    pub quality_score: u8,
}

/// Compute the 0-100 quality score for a location.
///
/// Weighted sum: 40 for validity, up to 40 for primary richness, up to 20
/// for secondary coverage, up to 20 for diversity, 10 each for carrying any
/// hidden or contextual tags. The raw sum can reach 140 when every term
/// maxes out, so the result is clamped to 100 to honor the advertised range.
pub fn quality_score(location: &Location) -> u8 {
    let validation = validate_location_tags(&location.tags);
    let analysis = analyze_cross_category(&location.tags.primary);
    score_components(location, validation.is_valid(), analysis.diversity)
}

fn score_components(location: &Location, is_valid: bool, diversity: f32) -> u8 {
    let tags = &location.tags;
    let mut score = 0.0;

    if is_valid {
        score += VALIDITY_POINTS;
    }
    score += (tags.primary.len() as f32 * PRIMARY_POINTS_PER_TAG).min(PRIMARY_POINTS_CAP);
    score += (tags.secondary.len() as f32 * SECONDARY_POINTS_PER_TAG).min(SECONDARY_POINTS_CAP);
    score += diversity * DIVERSITY_POINTS;
    if !tags.hidden.is_empty() {
        score += HIDDEN_BONUS;
    }
    if !tags.contextual.is_empty() {
        score += CONTEXTUAL_BONUS;
    }

    score.round().min(100.0) as u8
}

/// Validate a location and produce the full quality-control report.
pub fn validate_with_quality_control(location: &Location) -> LocationQualityReport {
    let validation = validate_location_tags(&location.tags);
    let cross_category = analyze_cross_category(&location.tags.primary);

    let mut suggestions = Vec::new();
    if cross_category.category_count() == 1 {
        suggestions
            .push("Consider adding tags from other categories for richer description".to_string());
    }
    if cross_category.category_count() >= DIVERSITY_SATURATION {
        suggestions.push(
            "Excellent cross-category diversity! This will improve discoverability".to_string(),
        );
    }

    let score = score_components(location, validation.is_valid(), cross_category.diversity);

    debug!(
        subsystem = SUBSYSTEM_SCORING,
        component = "quality",
        location_id = %location.id,
        quality_score = score,
        is_valid = validation.is_valid(),
        "quality control complete"
    );

    let tags = &location.tags;
    LocationQualityReport {
        location_id: location.id.clone(),
        location_name: location.name.clone(),
        is_valid: validation.is_valid(),
        errors: validation.errors,
        warnings: validation.warnings,
        suggestions,
        tag_breakdown: TagBreakdown {
            primary_count: tags.primary.len(),
            primary_categories: cross_category
                .categories
                .iter()
                .map(|m| m.category.clone())
                .collect(),
            secondary_count: tags.secondary.len(),
            secondary_coverage: secondary_group_coverage(&tags.secondary)
                .into_iter()
                .map(String::from)
                .collect(),
            hidden_count: tags.hidden.len(),
            hidden_insights: tags.hidden.clone(),
            contextual_count: tags.contextual.len(),
            contextual_timing: tags.contextual.clone(),
        },
        cross_category,
        quality_score: score,
    }
}
