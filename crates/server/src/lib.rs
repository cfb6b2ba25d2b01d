//! Service crate for the game recommender.
//!
//! This crate contains the configuration, request validation and the
//! orchestrator that ties a catalog source to the ranking pipeline.

pub mod config;
pub mod orchestrator;
pub mod request;

pub use config::RecommenderConfig;
pub use orchestrator::{GameRecommendation, RecommendationService};
pub use request::{RecommendationRequest, RequestError, ValidatedRequest};
