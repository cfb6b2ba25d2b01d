//! Filter implementations for the candidate pipeline.
//!
//! One filter per constraint of the filter stage; compose them with
//! FilterPipeline.

pub mod category_preference;
pub mod excluded_tags;
pub mod max_duration;
pub mod minimum_score;
pub mod platform;
pub mod reliability;
pub mod score_band;

// Re-export for convenience
pub use category_preference::CategoryPreferenceFilter;
pub use excluded_tags::ExcludedTagsFilter;
pub use max_duration::MaxDurationFilter;
pub use minimum_score::MinimumCriticScoreFilter;
pub use platform::PlatformFilter;
pub use reliability::ReliabilityFloorFilter;
pub use score_band::ScoreBandFilter;
