//! # Recommendation Orchestrator
//!
//! This module coordinates a recommendation request end to end:
//! 1. Validate the raw request against the config
//! 2. Build the upstream catalog query (platform pinned)
//! 3. Fetch candidates from the catalog source
//! 4. Filter, score and rank on a blocking thread
//! 5. Attach explanations and return the top N
//!
//! Similarity requests follow the same shape with a reference entry in
//! place of preferences.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use catalog::{CatalogEntry, EntryId, UserPreferences};
use pipeline::{ScoredEntry, rank_recommendations, rank_similar, score_breakdown};
use sources::{CatalogQuery, CatalogSource};

use crate::config::RecommenderConfig;
use crate::request::{RecommendationRequest, clamp_limit};

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecommendation {
    pub id: EntryId,
    pub name: String,
    pub categories: Vec<String>,
    pub platforms: Vec<String>,
    pub rating: f32,
    pub ratings_count: u32,
    pub metacritic: Option<u8>,
    pub playtime: f32,
    pub released: Option<String>,
    pub background_image: Option<String>,
    pub score: f32,
    pub explanation: String,
}

impl GameRecommendation {
    fn from_scored(scored: ScoredEntry, explanation: String) -> Self {
        let ScoredEntry { entry, score } = scored;
        Self {
            id: entry.id,
            name: entry.name,
            categories: entry.categories,
            platforms: entry.platforms,
            rating: entry.rating,
            ratings_count: entry.ratings_count,
            metacritic: entry.metacritic,
            playtime: entry.playtime,
            released: entry.released,
            background_image: entry.background_image,
            score,
            explanation,
        }
    }
}

/// Main orchestrator that coordinates the recommendation pipeline
#[derive(Clone)]
pub struct RecommendationService {
    source: Arc<dyn CatalogSource>,
    config: Arc<RecommenderConfig>,
}

impl RecommendationService {
    pub fn new(source: Arc<dyn CatalogSource>, config: RecommenderConfig) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Main entry point: recommendations for one request
    ///
    /// # Returns
    /// Vector of GameRecommendation sorted by score (highest first)
    pub async fn get_recommendations(
        &self,
        request: RecommendationRequest,
    ) -> Result<Vec<GameRecommendation>> {
        let start_time = Instant::now();

        let validated = request
            .validate(&self.config)
            .context("Invalid recommendation request")?;
        let preferences = validated.preferences;
        let limit = validated.limit;
        if limit == 0 {
            info!("Request asked for 0 recommendations");
            return Ok(Vec::new());
        }

        let query = CatalogQuery::for_preferences(
            &preferences,
            Some(&self.config.platform),
            self.config.page_size,
        );
        let candidates = self.fetch_candidates(query).await?;
        info!("Fetched {} candidates", candidates.len());

        let ranked = self.rank(candidates, preferences.clone(), limit).await?;

        let recommendations: Vec<GameRecommendation> = ranked
            .into_iter()
            .map(|scored| {
                let explanation = score_breakdown(&scored.entry, &preferences).explain();
                GameRecommendation::from_scored(scored, explanation)
            })
            .collect();

        info!(
            "Selected {} recommendations in {:.2?}",
            recommendations.len(),
            start_time.elapsed()
        );
        Ok(recommendations)
    }

    /// Entries most similar to the game with id `reference_id`.
    pub async fn get_similar(
        &self,
        reference_id: EntryId,
        limit: Option<i64>,
    ) -> Result<Vec<GameRecommendation>> {
        let start_time = Instant::now();
        let limit = clamp_limit(limit, &self.config);

        let reference = self
            .fetch_entry(reference_id)
            .await?
            .ok_or_else(|| anyhow!("Game {} not found", reference_id))?;
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Narrow upstream to the reference's categories on the pinned platform
        let mut query = CatalogQuery::new(self.config.page_size);
        query.categories = reference.categories.clone();
        query.platform = Some(self.config.platform.clone());
        let candidates = self.fetch_candidates(query).await?;

        let ranked = tokio::task::spawn_blocking(move || rank_similar(&reference, &candidates, limit))
            .await
            .context("Similarity task panicked")?;

        let similar: Vec<GameRecommendation> = ranked
            .into_iter()
            .map(|scored| {
                let explanation = format!("Similarity: {:.2}", scored.score);
                GameRecommendation::from_scored(scored, explanation)
            })
            .collect();

        info!(
            "Found {} games similar to {} in {:.2?}",
            similar.len(),
            reference_id,
            start_time.elapsed()
        );
        Ok(similar)
    }

    /// Query the catalog source on a blocking thread
    async fn fetch_candidates(&self, query: CatalogQuery) -> Result<Vec<CatalogEntry>> {
        let source = self.source.clone();
        let candidates = tokio::task::spawn_blocking(move || source.fetch(&query))
            .await
            .context("Catalog fetch task panicked")?
            .context("Failed to fetch candidates")?;

        if candidates.len() > self.config.page_size {
            warn!(
                "Catalog source returned {} entries for page size {}",
                candidates.len(),
                self.config.page_size
            );
        }
        Ok(candidates)
    }

    async fn fetch_entry(&self, id: EntryId) -> Result<Option<CatalogEntry>> {
        let source = self.source.clone();
        tokio::task::spawn_blocking(move || source.fetch_entry(id))
            .await
            .context("Catalog lookup task panicked")?
            .with_context(|| format!("Failed to look up game {}", id))
    }

    /// Filter, score and rank on the blocking pool
    async fn rank(
        &self,
        candidates: Vec<CatalogEntry>,
        preferences: UserPreferences,
        limit: usize,
    ) -> Result<Vec<ScoredEntry>> {
        tokio::task::spawn_blocking(move || rank_recommendations(&candidates, &preferences, limit))
            .await
            .context("Ranking task panicked")
    }
}
