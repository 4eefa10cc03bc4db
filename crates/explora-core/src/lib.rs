//! # explora-core
//!
//! Core types, taxonomy registry, and tag validation for the Explora
//! travel-discovery engine.
//!
//! This crate provides the four-layer tag taxonomy (primary, secondary,
//! hidden, contextual), the domain models the scoring layer consumes, and the
//! two-tier (errors/warnings) structural validator for location tag sets.

pub mod error;
pub mod logging;
pub mod models;
pub mod taxonomy;
pub mod validation;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::{
    AccessibilityPreferences, GroupType, Location, LocationTags, MobilityPreference, Mood,
    TagLayer, TravelStyle, UserProfile,
};
pub use taxonomy::{
    all_primary_tags, all_secondary_tags, categories_for_tags, category_for_tag, category_names,
    group_for_secondary_tag, is_primary_tag, is_secondary_tag, secondary_group_coverage,
    tags_for_category, CategoryMatch, PrimaryCategory, SecondaryGroup, CONTEXTUAL_TAGS,
    HIDDEN_TAGS, PRIMARY_CATEGORIES, REQUIRED_SECONDARY_GROUPS, SECONDARY_GROUPS,
};
pub use validation::{
    analyze_location_tagging, validate_catalog, validate_location_tags, validate_travel_style,
    CatalogValidationReport, TagBreakdownCounts, TagStats, TagValidationReport, TaggingAnalysis,
};
