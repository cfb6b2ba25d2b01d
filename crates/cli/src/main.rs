use anyhow::{Context, Result};
use catalog::{Catalog, EntryId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{GameRecommendation, RecommendationRequest, RecommendationService, RecommenderConfig};
use sources::InMemoryCatalogSource;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// GameRecs - Game Recommendation Engine
#[derive(Parser)]
#[command(name = "game-recs")]
#[command(about = "Preference-based game recommendations over a local catalog", long_about = None)]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, default_value = "data/catalog.json")]
    catalog: PathBuf,

    /// Optional recommender config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get game recommendations for a set of preferences
    Recommend {
        /// Favorite category slugs (any-of)
        #[arg(long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Minimum critic score (0-100)
        #[arg(long)]
        min_score: Option<i64>,

        /// Critic score band: any, 0-30, 31-60, 61-80 or 81-100
        #[arg(long)]
        band: Option<String>,

        /// Longest acceptable playtime in hours
        #[arg(long)]
        max_duration: Option<f64>,

        /// Tag slugs to exclude
        #[arg(long, value_delimiter = ',')]
        exclude_tags: Vec<String>,

        /// Number of recommendations to return
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,

        /// Show the score breakdown for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Find games similar to a given game
    Similar {
        /// Game ID to compare against
        #[arg(long)]
        id: EntryId,

        /// Number of similar games to return
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Search for games by name
    Search {
        /// Name to search for (case-insensitive substring match)
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RecommenderConfig::from_file(path)?,
        None => RecommenderConfig::default(),
    };
    info!("Recommending for platform {}", config.platform);

    println!("Loading catalog from {}...", cli.catalog.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_file(&cli.catalog).context("Failed to load game catalog")?,
    );
    println!(
        "{} Loaded {} games in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            categories,
            min_score,
            band,
            max_duration,
            exclude_tags,
            limit,
            explain,
        } => {
            let request = RecommendationRequest {
                categories,
                min_score,
                score_band: band,
                max_duration,
                excluded_tags: exclude_tags,
                limit,
            };
            handle_recommend(catalog, config, request, explain).await?
        }
        Commands::Similar { id, limit } => handle_similar(catalog, config, id, limit).await?,
        Commands::Search { name } => handle_search(&catalog, &name),
    }

    Ok(())
}

fn build_service(catalog: Arc<Catalog>, config: RecommenderConfig) -> RecommendationService {
    let source = InMemoryCatalogSource::new(catalog);
    RecommendationService::new(Arc::new(source), config)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    config: RecommenderConfig,
    request: RecommendationRequest,
    explain: bool,
) -> Result<()> {
    let service = build_service(catalog, config);
    let recommendations = service.get_recommendations(request).await?;

    print_recommendations("Game Recommendations:", &recommendations, explain);
    Ok(())
}

/// Handle the 'similar' command
async fn handle_similar(
    catalog: Arc<Catalog>,
    config: RecommenderConfig,
    id: EntryId,
    limit: Option<i64>,
) -> Result<()> {
    let name = catalog
        .get_entry(id)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| id.to_string());

    let service = build_service(catalog, config);
    let similar = service.get_similar(id, limit).await?;

    print_recommendations(&format!("Games similar to {}:", name), &similar, true);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, name: &str) {
    let mut matches = catalog.search_by_name(name);
    let needle = name.to_lowercase();

    // Exact matches first, then by rating
    matches.sort_by(|a, b| {
        let a_exact = a.name.to_lowercase() != needle;
        let b_exact = b.name.to_lowercase() != needle;
        a_exact
            .cmp(&b_exact)
            .then_with(|| b.rating.partial_cmp(&a.rating).unwrap_or(std::cmp::Ordering::Equal))
    });

    println!("{}", format!("Search results for '{}':", name).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for entry in matches.iter().take(20) {
        println!(
            "{}: {} [{}] rating {:.2} ({} ratings), metacritic {}",
            entry.id,
            entry.name,
            entry.categories.join(", "),
            entry.rating,
            entry.ratings_count,
            format_metacritic(entry.metacritic)
        );
    }
}

fn format_metacritic(score: Option<u8>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "n/a".to_string())
}

/// Helper function to format and print recommendations
fn print_recommendations(header: &str, recommendations: &[GameRecommendation], explain: bool) {
    println!("{}", header.bold().blue());
    if recommendations.is_empty() {
        println!("  (nothing matched)");
    }
    for (index, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] {:.1}h, metacritic {} - Score: {:.2}",
            (index + 1).to_string().green(),
            rec.name,
            rec.released.as_deref().unwrap_or("unreleased"),
            rec.categories.join(", "),
            rec.playtime,
            format_metacritic(rec.metacritic),
            rec.score
        );
        if explain {
            println!("   {}", rec.explanation.dimmed());
        }
    }
}
