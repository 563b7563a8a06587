//! Cinematch CLI
//!
//! Looks up movie titles in a precomputed catalog and prints similar movies,
//! either as a readable list or as one JSON response per query.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cinematch_core::{
    EngineConfig, QueryResponse, RankerConfig, Recommendation, Recommender, SelfMatch,
    SHORT_OVERVIEW_CHARS, SIMILARITY_FLOOR,
};
use cinematch_store::{DataPaths, default_data_dir, load_context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(about = "Find movies similar to a title you like")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding movies.json and similarity.json[.gz]
    #[arg(short = 'D', long, env = "CINEMATCH_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Catalog file (overrides the data directory layout)
    #[arg(long, env = "CINEMATCH_CATALOG")]
    catalog: Option<PathBuf>,

    /// Similarity matrix file (overrides the data directory layout)
    #[arg(long, env = "CINEMATCH_MATRIX")]
    matrix: Option<PathBuf>,

    /// Minimum similarity for a recommendation
    #[arg(long, default_value_t = SIMILARITY_FLOOR, value_parser = parse_floor)]
    floor: f64,

    /// Never list the queried movie among its own recommendations
    #[arg(long)]
    exclude_self: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Query {
        /// Movie title (typos allowed)
        title: String,

        /// Show at most this many recommendations
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },
    /// Read one title per stdin line, write one JSON response per line
    Batch,
    /// Show the loaded catalog and matrix
    Inspect,
}

/// Similarity floors must be finite numbers in `[0, 1]`.
fn parse_floor(raw: &str) -> std::result::Result<f64, String> {
    let floor: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !floor.is_finite() || !(0.0..=1.0).contains(&floor) {
        return Err(format!("floor must be between 0 and 1, got {raw}"));
    }
    Ok(floor)
}

impl Cli {
    fn data_paths(&self) -> DataPaths {
        let dir = self.data_dir.clone().unwrap_or_else(default_data_dir);
        let mut paths = DataPaths::new(dir);
        if let Some(catalog) = &self.catalog {
            paths = paths.with_catalog(catalog);
        }
        if let Some(matrix) = &self.matrix {
            paths = paths.with_matrix(matrix);
        }
        paths
    }

    fn engine_config(&self) -> EngineConfig {
        let self_match = if self.exclude_self {
            SelfMatch::Exclude
        } else {
            SelfMatch::Include
        };
        EngineConfig::new().with_ranker(
            RankerConfig::new()
                .with_floor(self.floor)
                .with_self_match(self_match),
        )
    }
}

fn print_recommendation(out: &mut impl Write, rank: usize, rec: &Recommendation) -> io::Result<()> {
    writeln!(out, "{rank:>3}. {} ({:.3})", rec.title, rec.similarity)?;
    if !rec.genres.is_empty() {
        writeln!(out, "     Genre:    {}", rec.genres)?;
    }
    if !rec.director.is_empty() {
        writeln!(out, "     Director: {}", rec.director)?;
    }
    if !rec.cast.is_empty() {
        writeln!(out, "     Cast:     {}", rec.cast)?;
    }
    if !rec.overview.is_empty() {
        writeln!(out, "     Overview: {}", rec.short_overview(SHORT_OVERVIEW_CHARS))?;
    }
    if let Some(poster) = &rec.poster_url {
        writeln!(out, "     Poster:   {poster}")?;
    }
    Ok(())
}

fn print_response(
    out: &mut impl Write,
    query: &str,
    response: &QueryResponse,
    top: Option<usize>,
) -> io::Result<()> {
    let Some(title) = response.resolved_title.as_deref().filter(|_| response.is_ok()) else {
        writeln!(out, "No movie titled {query:?} was found.")?;
        return Ok(());
    };

    if response.results.is_empty() {
        writeln!(out, "Found {title:?}, but nothing is similar enough.")?;
        return Ok(());
    }

    writeln!(out, "Movies similar to {title:?}:")?;
    let shown = top.unwrap_or(response.results.len());
    for (i, rec) in response.results.iter().take(shown).enumerate() {
        print_recommendation(out, i + 1, rec)?;
    }
    if shown < response.results.len() {
        writeln!(out, "... and {} more", response.results.len() - shown)?;
    }
    Ok(())
}

fn run_batch(engine: &Recommender) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = engine.query_movie(line);
        serde_json::to_writer(&mut stdout, &response)?;
        writeln!(stdout)?;
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let paths = cli.data_paths();
    let context = load_context(&paths).with_context(|| {
        format!(
            "failed to load catalog {} and matrix {}",
            paths.catalog.display(),
            paths.matrix.display()
        )
    })?;
    info!(movies = context.len(), "data loaded");

    let engine = Recommender::new(context, cli.engine_config());

    match cli.command {
        Commands::Query { title, top, json } => {
            let response = engine.query_movie(&title);
            let mut stdout = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut stdout, &response)?;
                writeln!(stdout)?;
            } else {
                print_response(&mut stdout, &title, &response, top)?;
            }
        }
        Commands::Batch => run_batch(&engine)?,
        Commands::Inspect => {
            let ctx = engine.context();
            println!("catalog: {} ({} movies)", paths.catalog.display(), ctx.len());
            println!(
                "matrix:  {} ({}x{})",
                paths.matrix.display(),
                ctx.matrix().size(),
                ctx.matrix().size()
            );
        }
    }

    Ok(())
}
