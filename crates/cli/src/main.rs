use anyhow::{Context, Result, anyhow};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use server::{RecommendationOrchestrator, Recommendations};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tmdb::{TmdbClient, TmdbConfig};

/// Curator - content-similarity movie recommendations
#[derive(Parser)]
#[command(name = "curator")]
#[command(about = "Recommends similar movies by plot-overview similarity", long_about = None)]
struct Cli {
    /// Path to the TMDB top-10K catalog CSV
    #[arg(short, long, default_value = "data/top10K-TMDB-movies.csv")]
    data: PathBuf,

    /// TMDB API key (falls back to the TMDB_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title you liked
    Recommend {
        /// Query title (must be present in the catalog)
        #[arg(long)]
        title: String,

        /// Title to keep out of the results (repeatable)
        #[arg(long = "exclude")]
        excluded: Vec<String>,

        /// Restrict candidates to this genre (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,
    },

    /// List all distinct genres present in the catalog
    Genres,

    /// List catalog titles (case-insensitive substring match)
    Titles {
        /// Only show titles containing this substring
        #[arg(long)]
        contains: Option<String>,
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

    // Load the catalog once at startup; a load failure is fatal.
    println!("Loading movie catalog from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_csv(&cli.data).context("Failed to load the movie catalog")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            excluded,
            genres,
        } => {
            let api_key = resolve_api_key(cli.api_key)?;
            handle_recommend(catalog, api_key, title, excluded, genres).await?
        }
        Commands::Genres => handle_genres(catalog),
        Commands::Titles { contains } => handle_titles(catalog, contains),
    }

    Ok(())
}

/// The API key comes from the flag or the TMDB_API_KEY environment variable.
fn resolve_api_key(flag: Option<String>) -> Result<String> {
    flag.or_else(|| std::env::var("TMDB_API_KEY").ok())
        .ok_or_else(|| anyhow!("No TMDB API key: pass --api-key or set TMDB_API_KEY"))
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    api_key: String,
    title: String,
    excluded: Vec<String>,
    genres: Vec<String>,
) -> Result<()> {
    let gateway = TmdbClient::new(TmdbConfig::new(api_key))
        .context("Failed to build the TMDB client")?;
    let orchestrator = RecommendationOrchestrator::new(catalog, gateway);

    let excluded: HashSet<String> = excluded.into_iter().collect();
    let recommendations = orchestrator
        .recommend(&title, excluded, genres)
        .await
        .with_context(|| format!("No recommendations for '{}'", title))?;

    print_recommendations(&title, &recommendations);
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(catalog: Arc<Catalog>) {
    println!("{}", "Genres in the catalog:".bold().blue());
    for genre in catalog.genres() {
        println!("  {} {}", "•".green(), genre);
    }
}

/// Handle the 'titles' command
fn handle_titles(catalog: Arc<Catalog>, contains: Option<String>) {
    let needle = contains.map(|c| c.to_lowercase());
    let mut shown = 0usize;
    for title in catalog.titles() {
        if let Some(needle) = &needle {
            if !title.to_lowercase().contains(needle) {
                continue;
            }
        }
        println!("{}", title);
        shown += 1;
    }
    println!("{} {} titles", "✓".green(), shown);
}

/// Helper function to format and print recommendations
fn print_recommendations(query_title: &str, recommendations: &Recommendations) {
    println!(
        "{}",
        format!("Movies similar to '{}':", query_title).bold().blue()
    );
    if recommendations.titles.is_empty() {
        println!("  (no candidates matched the filters)");
        return;
    }

    for (i, (title, enriched)) in recommendations
        .titles
        .iter()
        .zip(&recommendations.enriched)
        .enumerate()
    {
        let rank = i + 1;
        println!("{}. {}", rank.to_string().green(), title.bold());
        match enriched {
            Ok(details) => {
                println!("   Poster: {}", details.poster_url);
                println!("   Overview: {}", details.overview);
                println!("   Popularity: {}", details.popularity);
                println!("   Release Date: {}", details.release_date);
                println!("   Rating: {}", details.rating);
            }
            // One failed lookup still leaves the other entries usable.
            Err(error) => {
                println!("   {}", format!("metadata unavailable: {}", error).red());
            }
        }
    }
}
