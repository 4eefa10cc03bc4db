//! Structured logging schema for the Explora engine.
//!
//! Both crates use these constants as field values for consistent structured
//! logging, so log aggregation can query by standardized names across every
//! subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | WARN  | Catalog entries rejected by validation |
//! | INFO  | Catalog-wide report completions |
//! | DEBUG | Decision points, score components, cache hits/misses |
//! | TRACE | Per-tag iteration, high-volume data |

/// Subsystem value for taxonomy/validation events.
pub const SUBSYSTEM_TAXONOMY: &str = "taxonomy";

/// Subsystem value for scoring/ranking events.
pub const SUBSYSTEM_SCORING: &str = "scoring";

/// Subsystem value for the trip-location cache.
pub const SUBSYSTEM_CACHE: &str = "cache";
