//! Domain models for the Explora engine.
//!
//! Locations are authored once at import time and read-only for every scoring
//! consumer; the engine only reads the fields declared here. Presentation-only
//! fields (images, opening hours, contact data) live in the application layer.

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// TAG LAYERS
// =============================================================================

/// The four tag layers of the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagLayer {
    /// Layer 1: user-selected theme tags (3-5 required).
    Primary,
    /// Layer 2: card-level filter tags (2-5 required).
    Secondary,
    /// Layer 3: algorithmic insight tags, never shown without explicit reveal.
    Hidden,
    /// Layer 4: seasonal/timing hint tags.
    Contextual,
}

impl std::fmt::Display for TagLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
            Self::Hidden => write!(f, "hidden"),
            Self::Contextual => write!(f, "contextual"),
        }
    }
}

impl std::str::FromStr for TagLayer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "hidden" => Ok(Self::Hidden),
            "contextual" => Ok(Self::Contextual),
            _ => Err(Error::UnknownTagLayer(s.to_string())),
        }
    }
}

// =============================================================================
// LOCATION TAGS
// =============================================================================

/// Hard minimum of primary tags per location.
pub const PRIMARY_MIN: usize = 3;
/// Hard maximum of primary tags per location.
pub const PRIMARY_MAX: usize = 5;
/// Hard minimum of secondary tags per location.
pub const SECONDARY_MIN: usize = 2;
/// Soft maximum of secondary tags shown on location cards.
pub const SECONDARY_MAX: usize = 5;
/// Soft minimum of hidden tags for useful recommendations.
pub const HIDDEN_RECOMMENDED_MIN: usize = 2;
/// Soft maximum of hidden tags.
pub const HIDDEN_RECOMMENDED_MAX: usize = 6;
/// Soft maximum of contextual tags.
pub const CONTEXTUAL_RECOMMENDED_MAX: usize = 4;

/// The four tag sets attached to a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationTags {
    /// Layer 1 theme tags, drawn from any primary category.
    #[serde(default)]
    pub primary: Vec<String>,
    /// Layer 2 filter tags, drawn from the secondary groups.
    #[serde(default)]
    pub secondary: Vec<String>,
    /// Layer 3 insight tags, algorithmic use only.
    #[serde(default)]
    pub hidden: Vec<String>,
    /// Layer 4 seasonal/timing tags.
    #[serde(default)]
    pub contextual: Vec<String>,
}

impl LocationTags {
    /// Total tag count across all four layers.
    pub fn total(&self) -> usize {
        self.primary.len() + self.secondary.len() + self.hidden.len() + self.contextual.len()
    }

    /// Count of user-visible tags (primary + secondary).
    pub fn visible(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    /// All tags across all four layers, in layer order.
    pub fn all_tags(&self) -> Vec<&str> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .chain(&self.hidden)
            .chain(&self.contextual)
            .map(String::as_str)
            .collect()
    }

    /// Tags of a single layer.
    pub fn layer(&self, layer: TagLayer) -> &[String] {
        match layer {
            TagLayer::Primary => &self.primary,
            TagLayer::Secondary => &self.secondary,
            TagLayer::Hidden => &self.hidden,
            TagLayer::Contextual => &self.contextual,
        }
    }
}

// =============================================================================
// LOCATION
// =============================================================================

/// A point of interest in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Document id from the backing store.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Legacy single-category label, kept for search compatibility.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    pub tags: LocationTags,
}

// =============================================================================
// MOODS
// =============================================================================

/// The six moods offered by the mood matcher.
///
/// Each mood maps to a short fixed list of tag/category name fragments used
/// for fuzzy (substring) matching against location tags. The vocabulary is
/// deliberately small and the matching deliberately loose so that no mood
/// yields an empty result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Romantic,
    Adventurous,
    Peaceful,
    Curious,
    Energetic,
    Contemplative,
}

impl Mood {
    /// All moods, in display order.
    pub const ALL: &'static [Mood] = &[
        Mood::Romantic,
        Mood::Adventurous,
        Mood::Peaceful,
        Mood::Curious,
        Mood::Energetic,
        Mood::Contemplative,
    ];

    /// Representative tag/category fragments for this mood.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            Self::Romantic => &[
                "Scenic & Panoramic",
                "Sunset Spots",
                "Quiet Lookout",
                "Riverbanks",
            ],
            Self::Adventurous => &[
                "Urban Exploration",
                "Off-the-Beaten Path",
                "Bridges & Tunnels",
                "Rooftop Access",
            ],
            Self::Peaceful => &[
                "Parks & Nature",
                "Shaded Areas",
                "Calm Walks",
                "Religious & Spiritual Sites",
            ],
            Self::Curious => &[
                "Museums & Art",
                "Interactive Museums",
                "Historical Sites",
                "Niche Collections",
            ],
            Self::Energetic => &[
                "Creative & Street Culture",
                "Public Squares",
                "Artisan Markets",
                "Event-Driven Park",
            ],
            Self::Contemplative => &[
                "Culture & History",
                "Heritage Trails",
                "Library Landmark",
                "Quiet Retreat",
            ],
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Romantic => write!(f, "Romantic"),
            Self::Adventurous => write!(f, "Adventurous"),
            Self::Peaceful => write!(f, "Peaceful"),
            Self::Curious => write!(f, "Curious"),
            Self::Energetic => write!(f, "Energetic"),
            Self::Contemplative => write!(f, "Contemplative"),
        }
    }
}

impl std::str::FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "romantic" => Ok(Self::Romantic),
            "adventurous" => Ok(Self::Adventurous),
            "peaceful" => Ok(Self::Peaceful),
            "curious" => Ok(Self::Curious),
            "energetic" => Ok(Self::Energetic),
            "contemplative" => Ok(Self::Contemplative),
            _ => Err(Error::UnknownMood(s.to_string())),
        }
    }
}

// =============================================================================
// USER PROFILE
// =============================================================================

/// How the user prefers to get around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MobilityPreference {
    Walk,
    Transit,
    Car,
    #[default]
    Mixed,
}

impl std::fmt::Display for MobilityPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Walk => write!(f, "walk"),
            Self::Transit => write!(f, "transit"),
            Self::Car => write!(f, "car"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for MobilityPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walk" => Ok(Self::Walk),
            "transit" => Ok(Self::Transit),
            "car" => Ok(Self::Car),
            "mixed" => Ok(Self::Mixed),
            _ => Err(Error::UnknownVariant {
                field: "mobility_preference",
                value: s.to_string(),
            }),
        }
    }
}

/// Whether the user prefers quick stops or deep visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeStyle {
    Quick,
    Deep,
    #[default]
    Mixed,
}

impl std::fmt::Display for TimeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quick => write!(f, "quick"),
            Self::Deep => write!(f, "deep"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for TimeStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "deep" => Ok(Self::Deep),
            "mixed" => Ok(Self::Mixed),
            _ => Err(Error::UnknownVariant {
                field: "time_style",
                value: s.to_string(),
            }),
        }
    }
}

/// Who the user usually travels with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    Solo,
    Couple,
    Family,
    Friends,
    #[default]
    Mixed,
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solo => write!(f, "solo"),
            Self::Couple => write!(f, "couple"),
            Self::Family => write!(f, "family"),
            Self::Friends => write!(f, "friends"),
            Self::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for GroupType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(Self::Solo),
            "couple" => Ok(Self::Couple),
            "family" => Ok(Self::Family),
            "friends" => Ok(Self::Friends),
            "mixed" => Ok(Self::Mixed),
            _ => Err(Error::UnknownVariant {
                field: "group_type",
                value: s.to_string(),
            }),
        }
    }
}

/// Travel preferences collected during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TravelStyle {
    /// Tags the user picked from the primary categories.
    #[serde(default)]
    pub preferred_tags: Vec<String>,
    #[serde(default)]
    pub mobility_preference: MobilityPreference,
    #[serde(default)]
    pub time_style: TimeStyle,
    #[serde(default)]
    pub group_type: GroupType,
}

/// Accessibility needs applied as hard filters during discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityPreferences {
    #[serde(default)]
    pub wheelchair_needed: bool,
    #[serde(default)]
    pub avoid_stairs: bool,
    #[serde(default)]
    pub elder_friendly: bool,
}

/// The profile fields the engine consumes. Privacy, notification, and
/// display preferences stay in the application layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub display_name: String,
    #[serde(default)]
    pub travel_style: TravelStyle,
    #[serde(default)]
    pub accessibility: AccessibilityPreferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_tag_layer_roundtrip() {
        for layer in [
            TagLayer::Primary,
            TagLayer::Secondary,
            TagLayer::Hidden,
            TagLayer::Contextual,
        ] {
            let parsed = TagLayer::from_str(&layer.to_string()).unwrap();
            assert_eq!(parsed, layer);
        }
        assert!(TagLayer::from_str("tertiary").is_err());
    }

    #[test]
    fn test_mood_parsing_is_case_insensitive() {
        assert_eq!(Mood::from_str("peaceful").unwrap(), Mood::Peaceful);
        assert_eq!(Mood::from_str("ROMANTIC").unwrap(), Mood::Romantic);
        assert!(Mood::from_str("sleepy").is_err());
    }

    #[test]
    fn test_mood_tags_table() {
        assert_eq!(Mood::ALL.len(), 6);
        for mood in Mood::ALL {
            assert_eq!(mood.tags().len(), 4, "mood {} fragment count", mood);
        }
        assert!(Mood::Peaceful.tags().contains(&"Shaded Areas"));
        assert!(Mood::Contemplative.tags().contains(&"Quiet Retreat"));
    }

    #[test]
    fn test_location_tags_counts() {
        let tags = LocationTags {
            primary: vec!["a".into(), "b".into(), "c".into()],
            secondary: vec!["d".into(), "e".into()],
            hidden: vec!["f".into()],
            contextual: vec![],
        };
        assert_eq!(tags.total(), 6);
        assert_eq!(tags.visible(), 5);
        assert_eq!(tags.all_tags().len(), 6);
        assert_eq!(tags.layer(TagLayer::Secondary).len(), 2);
    }

    #[test]
    fn test_profile_enum_defaults() {
        let style = TravelStyle::default();
        assert_eq!(style.mobility_preference, MobilityPreference::Mixed);
        assert_eq!(style.time_style, TimeStyle::Mixed);
        assert_eq!(style.group_type, GroupType::Mixed);
    }

    #[test]
    fn test_location_serialization() {
        let location = Location {
            id: "42".into(),
            name: "Stadtpark".into(),
            description: "Urban park with the Strauss monument".into(),
            category: "Park".into(),
            address: None,
            rating: Some(4.5),
            tags: LocationTags::default(),
        };
        let json = serde_json::to_string(&location).unwrap();
        assert!(!json.contains("address"));
        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, location);
    }

    #[test]
    fn test_location_tags_deserialize_missing_layers() {
        let tags: LocationTags = serde_json::from_str(r#"{"primary":["Urban Parks"]}"#).unwrap();
        assert_eq!(tags.primary.len(), 1);
        assert!(tags.secondary.is_empty());
        assert!(tags.hidden.is_empty());
        assert!(tags.contextual.is_empty());
    }
}
