//! # explora-scoring
//!
//! Scoring, ranking, and discovery filters for the Explora engine.
//!
//! This crate provides:
//! - Cross-category diversity analysis of primary tag sets
//! - A 0-100 composite quality score for the admin quality-control dashboard
//! - Personalization scoring and ranking against a user's preferred tags
//! - Mood-based fuzzy filtering
//! - The combined discovery filter (search, category, mood, accessibility)
//! - Performance heuristics over aggregate catalog statistics
//! - A time-expiring cache for location → trip membership lookups
//!
//! Everything except the cache is a pure function over in-memory data,
//! invoked on demand by UI event handlers.

pub mod cross_category;
pub mod filter;
pub mod mood;
pub mod perf;
pub mod personalize;
pub mod quality;
pub mod trip_cache;

// Re-export core types
pub use explora_core::*;

// Re-export scoring types
pub use cross_category::{analyze_cross_category, CrossCategoryAnalysis, DIVERSITY_SATURATION};
pub use filter::{
    discover, matches_accessibility, matches_search, normalize_search_text, CatalogFilter,
    CategoryFilter,
};
pub use mood::{filter_by_mood, matches_mood};
pub use perf::{analyze_performance_concerns, PerformanceAdvisory};
pub use personalize::{personalization_score, rank_locations};
pub use quality::{
    quality_score, validate_with_quality_control, LocationQualityReport, TagBreakdown,
};
pub use trip_cache::{TripLocationCache, DEFAULT_TTL_SECS};
