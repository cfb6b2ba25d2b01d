//! Core domain types for the game catalog.
//!
//! Entries and preferences are plain value objects: built once per request,
//! read by the filter/score/similarity stages, then dropped.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a catalog entry
pub type EntryId = u32;

/// Entries backed by fewer ratings than this are never recommended.
pub const MIN_RATINGS_COUNT: u32 = 10;

/// Upper end of the user rating scale.
pub const MAX_RATING: f32 = 5.0;

/// Upper end of the critic score scale.
pub const MAX_CRITIC_SCORE: u8 = 100;

// =============================================================================
// Catalog Entry
// =============================================================================

/// One recommendable game.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,

    /// Genre slugs, in catalog order
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    /// Normalized user rating in [0, 5]
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub ratings_count: u32,
    /// Critic score in [0, 100]; `None` when critics have not reviewed it
    #[serde(default)]
    pub metacritic: Option<u8>,

    /// Expected duration in hours
    #[serde(default)]
    pub playtime: f32,

    // Carried through untouched
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

impl CatalogEntry {
    /// Create an entry with the given id and name and every signal zeroed.
    pub fn new(id: EntryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            categories: Vec::new(),
            platforms: Vec::new(),
            tags: Vec::new(),
            rating: 0.0,
            ratings_count: 0,
            metacritic: None,
            playtime: 0.0,
            released: None,
            description: None,
            background_image: None,
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32, ratings_count: u32) -> Self {
        self.rating = rating;
        self.ratings_count = ratings_count;
        self
    }

    pub fn with_metacritic(mut self, metacritic: Option<u8>) -> Self {
        self.metacritic = metacritic;
        self
    }

    pub fn with_playtime(mut self, hours: f32) -> Self {
        self.playtime = hours;
        self
    }

    /// True if the entry clears the fixed reliability floor.
    pub fn is_reliable(&self) -> bool {
        self.ratings_count >= MIN_RATINGS_COUNT
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

// =============================================================================
// Score Bands
// =============================================================================

/// Coarse critic-score buckets a user can restrict results to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoreBand {
    #[default]
    Any,
    /// 0-30
    Poor,
    /// 31-60
    Mixed,
    /// 61-80
    Good,
    /// 81-100
    Excellent,
}

impl ScoreBand {
    /// Closed `(low, high)` bounds, or `None` for [`ScoreBand::Any`].
    pub fn bounds(self) -> Option<(u8, u8)> {
        match self {
            ScoreBand::Any => None,
            ScoreBand::Poor => Some((0, 30)),
            ScoreBand::Mixed => Some((31, 60)),
            ScoreBand::Good => Some((61, 80)),
            ScoreBand::Excellent => Some((81, 100)),
        }
    }

    /// True if `score` falls inside the band. `Any` contains everything.
    pub fn contains(self, score: u8) -> bool {
        match self.bounds() {
            Some((low, high)) => score >= low && score <= high,
            None => true,
        }
    }
}

impl FromStr for ScoreBand {
    type Err = String;

    /// Accepts either the range form (`"61-80"`) or the band name (`"good"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(ScoreBand::Any),
            "0-30" | "poor" => Ok(ScoreBand::Poor),
            "31-60" | "mixed" => Ok(ScoreBand::Mixed),
            "61-80" | "good" => Ok(ScoreBand::Good),
            "81-100" | "excellent" => Ok(ScoreBand::Excellent),
            other => Err(format!("unknown score band: {other}")),
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Some((low, high)) => write!(f, "{low}-{high}"),
            None => write!(f, "any"),
        }
    }
}

// =============================================================================
// User Preferences
// =============================================================================

/// One fully-resolved recommendation request.
///
/// Built by the request-validation layer; the filter and score stages
/// assume every field is already in range.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    /// Empty means "no category restriction"
    pub favorite_categories: Vec<String>,
    /// Empty means "no platform restriction"
    pub favorite_platforms: Vec<String>,
    pub preferred_min_score: Option<u8>,
    pub score_band: ScoreBand,
    /// Upper bound on expected duration, in hours
    pub max_duration: f32,
    pub excluded_tags: Vec<String>,
}

impl UserPreferences {
    /// Preferences with no restriction other than `max_duration`.
    pub fn new(max_duration: f32) -> Self {
        Self {
            favorite_categories: Vec::new(),
            favorite_platforms: Vec::new(),
            preferred_min_score: None,
            score_band: ScoreBand::Any,
            max_duration,
            excluded_tags: Vec::new(),
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorite_categories = dedup(categories);
        self
    }

    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorite_platforms = dedup(platforms);
        self
    }

    pub fn with_min_score(mut self, min_score: Option<u8>) -> Self {
        self.preferred_min_score = min_score;
        self
    }

    pub fn with_score_band(mut self, band: ScoreBand) -> Self {
        self.score_band = band;
        self
    }

    pub fn with_excluded_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_tags = dedup(tags);
        self
    }
}

/// Collect into a Vec keeping first occurrence order.
fn dedup<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let item = item.into();
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

// =============================================================================
// Catalog - in-memory collection of entries
// =============================================================================

/// Holds every loaded entry in catalog order with an id lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) entries: Vec<CatalogEntry>,
    pub(crate) by_id: HashMap<EntryId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Get an entry by id
    pub fn get_entry(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.by_id.get(&id).map(|&idx| &self.entries[idx])
    }

    /// All entries, in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and index it. Callers guarantee unique ids.
    pub(crate) fn push_entry(&mut self, entry: CatalogEntry) {
        self.by_id.insert(entry.id, self.entries.len());
        self.entries.push(entry);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
