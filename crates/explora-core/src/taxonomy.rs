//! Four-layer location tag taxonomy for the Vienna catalog.
//!
//! Layer 1 (primary) carries the user-selected themes, partitioned into six
//! fixed categories. Layer 2 (secondary) carries the card-level filter tags in
//! five groups. Layers 3 and 4 (hidden, contextual) are flat vocabularies:
//! hidden tags feed the recommendation algorithms and are never rendered
//! without an explicit reveal, contextual tags carry seasonal/timing hints.
//!
//! The tables are the canonical source of truth for tag membership; every
//! validator and scorer resolves tags against them. Reverse-lookup indexes are
//! built lazily on first use.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named primary category with its member tags.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryCategory {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

/// A named secondary tag group with its member tags.
#[derive(Debug, Clone, Copy)]
pub struct SecondaryGroup {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

/// Layer 1: primary categories. Declaration order is significant: it is the
/// deterministic tie-break for dominant-category selection and the iteration
/// order of every grouped result.
pub const PRIMARY_CATEGORIES: &[PrimaryCategory] = &[
    PrimaryCategory {
        name: "Culture & History",
        tags: &[
            "Monuments & Landmarks",
            "Historical Sites",
            "Archaeological Sites",
            "Memorials",
            "Religious & Spiritual Sites",
            "World Heritage Sites",
            "Ancient Architecture",
            "Historic Neighborhoods",
            "Heritage Trails",
            "Palace or Castle",
            "Famous Historical Figures",
            "Royal Sites",
            "Civil Rights Sites",
            "Political History",
            "Colonial Architecture",
            "Medieval Architecture",
            "Philanthropic Heritage",
            "Former Hospitals",
            "Baroque Architecture",
            "Library Landmark",
            "Royal Patronage",
        ],
    },
    PrimaryCategory {
        name: "Museums & Art",
        tags: &[
            "Art Museums",
            "History Museums",
            "Science Museums",
            "Modern Art Spaces",
            "Niche Collections",
            "Rotating Exhibitions",
            "Temporary Galleries",
            "Interactive Museums",
            "Photography Exhibits",
            "Immersive Installations",
            "Children's Museums",
            "Open-Air Museums",
            "Local Artist Features",
            "Permanent Collections",
            "Cabinet of Curiosities",
            "Unusual Exhibits",
            "Animal-Themed",
            "Contemporary Culture",
            "Subversive Themes",
        ],
    },
    PrimaryCategory {
        name: "Parks & Nature",
        tags: &[
            "Urban Parks",
            "Botanical Gardens",
            "Riverside Walks",
            "Forest Trails",
            "Wildlife Areas",
            "Green Escape",
            "Shaded Areas",
            "Natural Water Features",
            "Urban Biodiversity",
            "Outdoor Sculpture Gardens",
            "Picnic Friendly",
            "Cherry Blossom Spots",
            "Seasonal Highlights",
            "Dog-Friendly Zones",
            "Calm Walks",
            "Converted Railway Space",
            "Multi-Use Park",
            "Local Weekend Spot",
            "Event-Driven Park",
            "International Exhibitions",
        ],
    },
    PrimaryCategory {
        name: "Urban Exploration",
        tags: &[
            "Iconic Architecture",
            "Public Squares",
            "Neighborhood Walks",
            "Bridges & Tunnels",
            "Industrial Heritage",
            "Historic Streets",
            "Urban Photo Spots",
            "Rooftop Access",
            "Open Courtyards",
            "Covered Passages",
            "Famous Boulevards",
            "Decorative Facades",
            "City Gates",
            "Artists' District",
            "Silk Industry Heritage",
            "Urban Redevelopment",
            "Graffiti Corridors",
        ],
    },
    PrimaryCategory {
        name: "Creative & Street Culture",
        tags: &[
            "Street Art",
            "Design Installations",
            "Creative Hubs",
            "Artisan Markets",
            "Indie Galleries",
            "Local Craft Centers",
            "Public Art Projects",
            "Community Murals",
            "Experimental Art Spaces",
            "Independent Art Shops",
            "Open Studios",
            "Zines & DIY Culture",
            "Graffiti Corridors",
            "Artist Collectives",
            "Squatter Art Spaces",
            "DIY Events",
            "Reclaimed Spaces",
            "Artist Residency Complex",
        ],
    },
    PrimaryCategory {
        name: "Scenic & Panoramic",
        tags: &[
            "Rooftop Views",
            "Hilltop Lookouts",
            "Riverbanks",
            "Sunset Spots",
            "Panoramic Vistas",
            "Skyline Overlook",
            "Viewpoints with Seating",
            "Photogenic Angles",
            "Elevated Walkways",
            "Cityscape Reflections",
            "Observation Decks",
            "Open-Air Platforms",
            "Quiet Lookout",
            "Locals' Favorite View",
            "360° View",
            "Religious Panoramic Spot",
        ],
    },
];

/// Layer 2: secondary tag groups (card-level filters).
pub const SECONDARY_GROUPS: &[SecondaryGroup] = &[
    SecondaryGroup {
        name: "Accessibility & Effort",
        tags: &[
            "Wheelchair Accessible",
            "Steep Terrain",
            "Lots of Stairs",
            "Elder-Friendly",
            "Kid-Friendly",
        ],
    },
    SecondaryGroup {
        name: "Time Commitment",
        tags: &[
            "Quick Stop (<15 min)",
            "1-Hour Visit",
            "Half-Day Activity",
            "Full-Day Attraction",
        ],
    },
    SecondaryGroup {
        name: "Weather Suitability",
        tags: &[
            "Indoor",
            "Outdoor",
            "Good for Rainy Days",
            "Best in Sunshine",
        ],
    },
    SecondaryGroup {
        name: "Mobility Context",
        tags: &[
            "Walkable From Center",
            "Requires Public Transport",
            "Off-the-Beaten Path",
        ],
    },
    SecondaryGroup {
        name: "Audience Suitability",
        tags: &[
            "Great for Families",
            "Solo-Friendly",
            "Group-Friendly",
            "Romantic Spot",
        ],
    },
];

/// Layer 3: hidden insight tags, algorithmic use only.
pub const HIDDEN_TAGS: &[&str] = &[
    "FOMO Magnet",
    "High Tourist Traffic",
    "Quiet Retreat",
    "Cultural Immersion",
    "Relaxing Vibe",
    "Panoramic Photo Spot",
    "Educational Value",
    "Experiential",
    "Gamified Content Available",
    "Local Favorite",
    "Overrated",
    "Instagram Hotspot",
    "Authentic Experience",
    "Tourist Trap",
    "Hidden Gem Verified",
    "Crowd-Sensitive",
    "Weather-Dependent",
    "Time-Sensitive Visit",
];

/// Layer 4: seasonal and timing hint tags.
pub const CONTEXTUAL_TAGS: &[&str] = &[
    "Peak Season Only",
    "Off-Season Recommended",
    "Event Nearby",
    "Open During Holidays",
    "Shaded in Summer",
    "Best in Spring",
    "Sunset Spot",
    "Evening Recommended",
    "Weekend Crowded",
    "Early Morning Best",
    "Rainy Day Alternative",
    "Summer Festival Venue",
    "Winter Warm Spot",
    "Holiday Decorations",
    "Seasonal Exhibition",
];

/// The secondary groups a well-tagged location is expected to cover.
/// Missing coverage is advisory, never blocking.
pub const REQUIRED_SECONDARY_GROUPS: &[&str] = &[
    "Time Commitment",
    "Weather Suitability",
    "Mobility Context",
    "Audience Suitability",
];

/// Tag → owning primary category. "Graffiti Corridors" appears in both
/// Urban Exploration and Creative & Street Culture; the first declaring
/// category wins, matching registry declaration order.
static PRIMARY_TAG_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for category in PRIMARY_CATEGORIES {
        for tag in category.tags {
            index.entry(*tag).or_insert(category.name);
        }
    }
    index
});

/// Tag → owning secondary group.
static SECONDARY_TAG_INDEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for group in SECONDARY_GROUPS {
        for tag in group.tags {
            index.entry(*tag).or_insert(group.name);
        }
    }
    index
});

/// Matched tags grouped under their owning category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryMatch {
    pub category: String,
    pub tags: Vec<String>,
}

/// Owning primary category for a tag, if the tag is in the registry.
pub fn category_for_tag(tag: &str) -> Option<&'static str> {
    PRIMARY_TAG_INDEX.get(tag).copied()
}

/// Owning secondary group for a tag, if the tag is in the registry.
pub fn group_for_secondary_tag(tag: &str) -> Option<&'static str> {
    SECONDARY_TAG_INDEX.get(tag).copied()
}

pub fn is_primary_tag(tag: &str) -> bool {
    PRIMARY_TAG_INDEX.contains_key(tag)
}

pub fn is_secondary_tag(tag: &str) -> bool {
    SECONDARY_TAG_INDEX.contains_key(tag)
}

/// All primary category names, in declaration order.
pub fn category_names() -> Vec<&'static str> {
    PRIMARY_CATEGORIES.iter().map(|c| c.name).collect()
}

/// Member tags of a primary category, or `None` for an unknown name.
pub fn tags_for_category(category: &str) -> Option<&'static [&'static str]> {
    PRIMARY_CATEGORIES
        .iter()
        .find(|c| c.name == category)
        .map(|c| c.tags)
}

/// Every primary tag across all six categories, in declaration order.
/// "Graffiti Corridors" is listed once per declaring category.
pub fn all_primary_tags() -> Vec<&'static str> {
    PRIMARY_CATEGORIES
        .iter()
        .flat_map(|c| c.tags.iter().copied())
        .collect()
}

/// Every secondary tag across all five groups, in declaration order.
pub fn all_secondary_tags() -> Vec<&'static str> {
    SECONDARY_GROUPS
        .iter()
        .flat_map(|g| g.tags.iter().copied())
        .collect()
}

/// Group a tag list by owning primary category.
///
/// Categories appear in registry declaration order; tags keep their input
/// order within each category. Tags outside the registry are dropped.
pub fn categories_for_tags(tags: &[String]) -> Vec<CategoryMatch> {
    PRIMARY_CATEGORIES
        .iter()
        .filter_map(|category| {
            let matched: Vec<String> = tags
                .iter()
                .filter(|tag| category_for_tag(tag) == Some(category.name))
                .cloned()
                .collect();
            if matched.is_empty() {
                None
            } else {
                Some(CategoryMatch {
                    category: category.name.to_string(),
                    tags: matched,
                })
            }
        })
        .collect()
}

/// Which secondary groups a tag list touches, in registry declaration order.
pub fn secondary_group_coverage(tags: &[String]) -> Vec<&'static str> {
    SECONDARY_GROUPS
        .iter()
        .filter(|group| tags.iter().any(|tag| group.tags.contains(&tag.as_str())))
        .map(|group| group.name)
        .collect()
}
