//! Desirability scoring for filtered entries.
//!
//! The score is a base derived from the user rating plus additive boosts
//! and penalties, capped at [`MAX_SCORE`]. There is no lower clamp: an
//! entry whose penalties outweigh its boosts can score below its base.

use catalog::{CatalogEntry, MAX_RATING, UserPreferences};
use rayon::prelude::*;
use std::collections::HashSet;

/// Scores are capped here after all boosts are summed.
pub const MAX_SCORE: f32 = 1.0;

/// Added once per favorite category present on the entry.
pub const CATEGORY_MATCH_BOOST: f32 = 0.2;

/// Critic score tiers, highest first. First match wins.
pub const CRITIC_SCORE_TIERS: &[(u8, f32)] = &[(80, 0.4), (70, 0.2), (60, 0.1)];

/// Ratings-count tiers, highest first. First match wins.
pub const RELIABILITY_TIERS: &[(u32, f32)] = &[(100, 0.15), (50, 0.1), (20, 0.05)];

/// Applied when playtime exceeds this fraction of `max_duration`.
pub const LONG_DURATION_FRACTION: f32 = 0.8;
pub const LONG_DURATION_PENALTY: f32 = 0.1;

/// Bonus of the first tier whose threshold `value` reaches, else 0.
pub fn tier_bonus<T: PartialOrd + Copy>(value: T, tiers: &[(T, f32)]) -> f32 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|&(_, bonus)| bonus)
        .unwrap_or(0.0)
}

/// Every component of an entry's score, kept for explanations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub base: f32,
    pub category_boost: f32,
    pub critic_boost: f32,
    pub reliability_boost: f32,
    /// Zero or negative
    pub duration_penalty: f32,
    /// Capped sum of the components above
    pub total: f32,
}

impl ScoreBreakdown {
    /// Sum of the components before the cap.
    pub fn uncapped(&self) -> f32 {
        self.base
            + self.category_boost
            + self.critic_boost
            + self.reliability_boost
            + self.duration_penalty
    }

    /// Short human-readable summary.
    pub fn explain(&self) -> String {
        let mut parts = vec![format!("rating {:.2}", self.base)];
        if self.category_boost > 0.0 {
            parts.push(format!("categories +{:.2}", self.category_boost));
        }
        if self.critic_boost > 0.0 {
            parts.push(format!("critics +{:.2}", self.critic_boost));
        }
        if self.reliability_boost > 0.0 {
            parts.push(format!("ratings +{:.2}", self.reliability_boost));
        }
        if self.duration_penalty < 0.0 {
            parts.push(format!("long {:.2}", self.duration_penalty));
        }
        format!("{} = {:.2}", parts.join(", "), self.total)
    }
}

/// Compute the full score breakdown for one entry.
pub fn score_breakdown(entry: &CatalogEntry, preferences: &UserPreferences) -> ScoreBreakdown {
    let base = entry.rating / MAX_RATING;

    // Favorites are a set; repeats count once
    let favorites: HashSet<&str> = preferences
        .favorite_categories
        .iter()
        .map(String::as_str)
        .collect();
    let matched = favorites
        .into_iter()
        .filter(|category| entry.has_category(category))
        .count();
    let category_boost = CATEGORY_MATCH_BOOST * matched as f32;

    let critic_boost = entry
        .metacritic
        .map(|score| tier_bonus(score, CRITIC_SCORE_TIERS))
        .unwrap_or(0.0);

    let reliability_boost = tier_bonus(entry.ratings_count, RELIABILITY_TIERS);

    let duration_penalty =
        if entry.playtime > preferences.max_duration * LONG_DURATION_FRACTION {
            -LONG_DURATION_PENALTY
        } else {
            0.0
        };

    let mut breakdown = ScoreBreakdown {
        base,
        category_boost,
        critic_boost,
        reliability_boost,
        duration_penalty,
        total: 0.0,
    };
    breakdown.total = breakdown.uncapped().min(MAX_SCORE);
    breakdown
}

/// Desirability score of one entry.
pub fn score_entry(entry: &CatalogEntry, preferences: &UserPreferences) -> f32 {
    score_breakdown(entry, preferences).total
}

/// Score many entries in parallel. Output order matches input order.
pub fn score_entries(entries: &[CatalogEntry], preferences: &UserPreferences) -> Vec<f32> {
    entries
        .par_iter()
        .map(|entry| score_entry(entry, preferences))
        .collect()
}
