//! Request validation.
//!
//! Turns loosely-typed user input into [`UserPreferences`] and a bounded
//! `limit`. Everything past this point assumes valid input.

use crate::config::RecommenderConfig;
use catalog::{MAX_CRITIC_SCORE, ScoreBand, UserPreferences};
use serde::Deserialize;
use thiserror::Error;

/// Errors for request fields that cannot be repaired by clamping.
#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    #[error("min_score must be between 0 and {max}, got {value}", max = MAX_CRITIC_SCORE)]
    MinScoreOutOfRange { value: i64 },

    #[error("unknown score band: {0}")]
    UnknownScoreBand(String),

    #[error("max_duration must be a positive number of hours, got {0}")]
    InvalidMaxDuration(f64),
}

/// A recommendation request as it arrives from a user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationRequest {
    pub categories: Vec<String>,
    pub min_score: Option<i64>,
    pub score_band: Option<String>,
    pub max_duration: Option<f64>,
    pub excluded_tags: Vec<String>,
    pub limit: Option<i64>,
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub preferences: UserPreferences,
    pub limit: usize,
}

impl RecommendationRequest {
    /// Validate and resolve against the deployment config.
    ///
    /// The platform is always pinned from `config`. Negative limits
    /// become 0, oversized ones become `config.max_limit`.
    pub fn validate(&self, config: &RecommenderConfig) -> Result<ValidatedRequest, RequestError> {
        let min_score = match self.min_score {
            Some(value) if !(0..=i64::from(MAX_CRITIC_SCORE)).contains(&value) => {
                return Err(RequestError::MinScoreOutOfRange { value });
            }
            Some(value) => Some(value as u8),
            None => None,
        };

        let score_band = match self.score_band.as_deref() {
            Some(raw) => raw
                .parse::<ScoreBand>()
                .map_err(|_| RequestError::UnknownScoreBand(raw.to_string()))?,
            None => ScoreBand::Any,
        };

        let max_duration = match self.max_duration {
            // Validate the f32 value actually used downstream
            Some(hours) => {
                let narrowed = hours as f32;
                if !narrowed.is_finite() || narrowed <= 0.0 {
                    return Err(RequestError::InvalidMaxDuration(hours));
                }
                narrowed
            }
            None => config.default_max_duration,
        };

        let preferences = UserPreferences::new(max_duration)
            .with_categories(normalize_slugs(&self.categories))
            .with_platforms([config.platform.clone()])
            .with_min_score(min_score)
            .with_score_band(score_band)
            .with_excluded_tags(normalize_slugs(&self.excluded_tags));

        Ok(ValidatedRequest {
            preferences,
            limit: clamp_limit(self.limit, config),
        })
    }
}

/// Resolve a raw limit into `0..=config.max_limit`.
pub fn clamp_limit(limit: Option<i64>, config: &RecommenderConfig) -> usize {
    match limit {
        None => config.default_limit,
        Some(n) if n <= 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX).min(config.max_limit),
    }
}

/// Trim, lowercase and drop empty slugs.
fn normalize_slugs(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let config = RecommenderConfig::default();
        let validated = RecommendationRequest::default().validate(&config).unwrap();

        assert_eq!(validated.limit, 10);
        assert_eq!(validated.preferences.max_duration, 100.0);
        assert_eq!(validated.preferences.favorite_platforms, vec!["playstation5"]);
        assert_eq!(validated.preferences.score_band, ScoreBand::Any);
        assert!(validated.preferences.favorite_categories.is_empty());
    }

    #[test]
    fn test_fields_are_resolved() {
        let config = RecommenderConfig::default();
        let request = RecommendationRequest {
            categories: vec![" Action ".to_string(), "".to_string(), "rpg".to_string()],
            min_score: Some(75),
            score_band: Some("81-100".to_string()),
            max_duration: Some(30.0),
            excluded_tags: vec!["Horror".to_string()],
            limit: Some(5),
        };

        let validated = request.validate(&config).unwrap();
        let prefs = &validated.preferences;
        assert_eq!(prefs.favorite_categories, vec!["action", "rpg"]);
        assert_eq!(prefs.preferred_min_score, Some(75));
        assert_eq!(prefs.score_band, ScoreBand::Excellent);
        assert_eq!(prefs.max_duration, 30.0);
        assert_eq!(prefs.excluded_tags, vec!["horror"]);
        assert_eq!(validated.limit, 5);
    }

    #[test]
    fn test_limit_clamping() {
        let config = RecommenderConfig::default();
        assert_eq!(clamp_limit(Some(-3), &config), 0);
        assert_eq!(clamp_limit(Some(0), &config), 0);
        assert_eq!(clamp_limit(Some(7), &config), 7);
        assert_eq!(clamp_limit(Some(500), &config), 50);
        assert_eq!(clamp_limit(None, &config), 10);
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let config = RecommenderConfig::default();

        let request = RecommendationRequest {
            min_score: Some(101),
            ..Default::default()
        };
        assert_eq!(
            request.validate(&config).unwrap_err(),
            RequestError::MinScoreOutOfRange { value: 101 }
        );

        let request = RecommendationRequest {
            score_band: Some("40-50".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            request.validate(&config).unwrap_err(),
            RequestError::UnknownScoreBand(_)
        ));

        let request = RecommendationRequest {
            max_duration: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            request.validate(&config).unwrap_err(),
            RequestError::InvalidMaxDuration(_)
        ));

        for hours in [1e-50, 1e39, f64::NAN, -3.0] {
            let request = RecommendationRequest {
                max_duration: Some(hours),
                ..Default::default()
            };
            assert!(
                matches!(
                    request.validate(&config),
                    Err(RequestError::InvalidMaxDuration(_))
                ),
                "{hours} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_partial_request() {
        let request: RecommendationRequest =
            serde_json::from_str(r#"{"categories": ["indie"], "limit": 3}"#).unwrap();
        assert_eq!(request.categories, vec!["indie"]);
        assert_eq!(request.limit, Some(3));
        assert!(request.min_score.is_none());
    }
}
