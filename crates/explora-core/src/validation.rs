//! Structural validation of location tag sets.
//!
//! Two-tier reporting: **errors** are structural violations (count bounds,
//! unknown tags) that block a location from entering the catalog; **warnings**
//! are soft-rule deviations (low diversity, missing coverage, extreme counts)
//! that are advisory only. Callers decide whether to surface either tier.
//!
//! All functions here are pure; the admin dashboard and the homepage filter
//! both call these rather than re-deriving the rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::logging::SUBSYSTEM_TAXONOMY;
use crate::models::{
    Location, LocationTags, TravelStyle, CONTEXTUAL_RECOMMENDED_MAX, HIDDEN_RECOMMENDED_MAX,
    HIDDEN_RECOMMENDED_MIN, PRIMARY_MAX, PRIMARY_MIN, SECONDARY_MAX, SECONDARY_MIN,
};
use crate::taxonomy::{
    is_primary_tag, is_secondary_tag, secondary_group_coverage, CategoryMatch,
    categories_for_tags, REQUIRED_SECONDARY_GROUPS,
};

/// Maximum preferred tags a user may select during onboarding.
pub const PREFERRED_TAGS_MAX: usize = 10;
/// Minimum preferred tags a user must select during onboarding.
pub const PREFERRED_TAGS_MIN: usize = 3;

/// Outcome of validating a location's tag sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagValidationReport {
    /// Structural violations; any entry blocks catalog acceptance.
    pub errors: Vec<String>,
    /// Advisory deviations; never blocking.
    pub warnings: Vec<String>,
}

impl TagValidationReport {
    /// True when no blocking errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Acceptance gate for catalog import paths.
    pub fn ensure_valid(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::InvalidTags(self.errors.join("; ")))
        }
    }
}

/// Validate a location's tag sets against the taxonomy rules.
///
/// Rules, in order: primary count bounds (3-5, errors), primary membership
/// (error), single-category concentration (warning), secondary count bounds
/// (min error, max warning), secondary membership (error), required-group
/// coverage (warning), hidden count range (warnings), contextual count range
/// (warnings).
pub fn validate_location_tags(tags: &LocationTags) -> TagValidationReport {
    let mut report = TagValidationReport::default();

    if tags.primary.len() < PRIMARY_MIN {
        report.errors.push(format!(
            "Minimum {} primary tags required. Current: {}",
            PRIMARY_MIN,
            tags.primary.len()
        ));
    }
    if tags.primary.len() > PRIMARY_MAX {
        report.errors.push(format!(
            "Maximum {} primary tags allowed. Current: {}",
            PRIMARY_MAX,
            tags.primary.len()
        ));
    }

    let invalid_primary: Vec<&str> = tags
        .primary
        .iter()
        .filter(|tag| !is_primary_tag(tag))
        .map(String::as_str)
        .collect();
    if !invalid_primary.is_empty() {
        report
            .errors
            .push(format!("Invalid primary tags: {}", invalid_primary.join(", ")));
    }

    let matched: Vec<CategoryMatch> = categories_for_tags(&tags.primary);
    if matched.len() == 1 && tags.primary.len() >= PRIMARY_MIN {
        report.warnings.push(format!(
            "All primary tags from same category ({}). Consider cross-category tags for richer location description.",
            matched[0].category
        ));
    }

    if tags.secondary.len() < SECONDARY_MIN {
        report.errors.push(format!(
            "Minimum {} secondary tags required for location card display",
            SECONDARY_MIN
        ));
    }
    if tags.secondary.len() > SECONDARY_MAX {
        report.warnings.push(format!(
            "Maximum {} secondary tags shown on location cards. Consider moving extras to hidden layer",
            SECONDARY_MAX
        ));
    }

    let invalid_secondary: Vec<&str> = tags
        .secondary
        .iter()
        .filter(|tag| !is_secondary_tag(tag))
        .map(String::as_str)
        .collect();
    if !invalid_secondary.is_empty() {
        report.errors.push(format!(
            "Invalid secondary tags: {}",
            invalid_secondary.join(", ")
        ));
    }

    let covered = secondary_group_coverage(&tags.secondary);
    let missing: Vec<&str> = REQUIRED_SECONDARY_GROUPS
        .iter()
        .filter(|group| !covered.contains(group))
        .copied()
        .collect();
    if !missing.is_empty() {
        report.warnings.push(format!(
            "Consider adding tags from categories: {}",
            missing.join(", ")
        ));
    }

    if tags.hidden.len() < HIDDEN_RECOMMENDED_MIN {
        report.warnings.push(
            "Recommend 2-4 hidden tags for better algorithmic recommendations".to_string(),
        );
    }
    if tags.hidden.len() > HIDDEN_RECOMMENDED_MAX {
        report.warnings.push(
            "Too many hidden tags. Keep only the most relevant algorithmic insights".to_string(),
        );
    }

    if tags.contextual.is_empty() {
        report.warnings.push(
            "Consider adding contextual tags for seasonal/timing recommendations".to_string(),
        );
    }
    if tags.contextual.len() > CONTEXTUAL_RECOMMENDED_MAX {
        report.warnings.push(
            "Too many contextual tags. Focus on the most important timing factors".to_string(),
        );
    }

    report
}

/// Per-layer tag counts for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagBreakdownCounts {
    pub primary: usize,
    pub secondary: usize,
    pub hidden: usize,
    pub contextual: usize,
}

/// Aggregate tag statistics for a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagStats {
    /// User-visible tags (primary + secondary).
    pub total_visible: usize,
    /// All tags across the four layers.
    pub total_tags: usize,
    pub breakdown: TagBreakdownCounts,
}

/// Validation plus statistics for a single location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggingAnalysis {
    pub name: String,
    pub category: String,
    pub validation: TagValidationReport,
    pub stats: TagStats,
    /// Whether the location carries at least three visible tags.
    pub meets_three_plus_rule: bool,
}

/// Validate a location and compute its tag statistics.
pub fn analyze_location_tagging(location: &Location) -> TaggingAnalysis {
    let validation = validate_location_tags(&location.tags);
    let tags = &location.tags;

    debug!(
        subsystem = SUBSYSTEM_TAXONOMY,
        location_id = %location.id,
        error_count = validation.errors.len(),
        warning_count = validation.warnings.len(),
        total_tags = tags.total(),
        "location tagging analyzed"
    );

    TaggingAnalysis {
        name: location.name.clone(),
        category: location.category.clone(),
        meets_three_plus_rule: tags.visible() >= 3,
        stats: TagStats {
            total_visible: tags.visible(),
            total_tags: tags.total(),
            breakdown: TagBreakdownCounts {
                primary: tags.primary.len(),
                secondary: tags.secondary.len(),
                hidden: tags.hidden.len(),
                contextual: tags.contextual.len(),
            },
        },
        validation,
    }
}

/// Catalog-wide validation summary for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogValidationReport {
    pub total_locations: usize,
    /// Locations carrying at least three visible tags.
    pub meeting_three_plus_rule: usize,
    pub with_errors: usize,
    pub with_warnings: usize,
    pub analyses: Vec<TaggingAnalysis>,
}

/// Validate every location in the catalog and summarize the results.
pub fn validate_catalog(locations: &[Location]) -> CatalogValidationReport {
    let analyses: Vec<TaggingAnalysis> =
        locations.iter().map(analyze_location_tagging).collect();

    let report = CatalogValidationReport {
        total_locations: analyses.len(),
        meeting_three_plus_rule: analyses.iter().filter(|a| a.meets_three_plus_rule).count(),
        with_errors: analyses
            .iter()
            .filter(|a| !a.validation.errors.is_empty())
            .count(),
        with_warnings: analyses
            .iter()
            .filter(|a| !a.validation.warnings.is_empty())
            .count(),
        analyses,
    };

    info!(
        subsystem = SUBSYSTEM_TAXONOMY,
        total_locations = report.total_locations,
        meeting_three_plus_rule = report.meeting_three_plus_rule,
        with_errors = report.with_errors,
        with_warnings = report.with_warnings,
        "catalog validation complete"
    );

    report
}

/// Validate onboarding travel-style preferences. Advisory strings in the
/// same shape the profile settings form displays.
pub fn validate_travel_style(style: &TravelStyle) -> Vec<String> {
    let mut errors = Vec::new();

    if style.preferred_tags.len() > PREFERRED_TAGS_MAX {
        errors.push(format!(
            "Maximum {} preferred tags allowed",
            PREFERRED_TAGS_MAX
        ));
    }
    if style.preferred_tags.len() < PREFERRED_TAGS_MIN {
        errors.push(format!(
            "Minimum {} preferred tags required",
            PREFERRED_TAGS_MIN
        ));
    }

    errors
}
