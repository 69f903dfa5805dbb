//! CLI for EmoRadar.
//!
//! Reads detector output from a file or stdin, runs the intervention engine and
//! prints a decision record. Also exposes the timing and outcome tables and
//! basic maintenance of strategy catalogs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emoradar_core::{
    read_or_fallback, EmotionReading, InterventionType, JsonReadingAdapter, LearningPhase,
    Recommendation, UrgencyLevel,
};
use emoradar_engine::{
    compute_timing_for_label, phase_modifier, predict_outcome_for_name, InterventionEngine,
    PhaseModifier, StrategyCatalog,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing_subscriber::EnvFilter;

const ENGINE_ID: &str = "emoradar-engine";
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter, e.g. "debug" or "emoradar_engine=debug"
    #[arg(long, global = true, env = "EMORADAR_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend an intervention for one detector reading
    Analyze {
        /// Reading as JSON (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Learning phase (default: practice)
        #[arg(long)]
        phase: Option<LearningPhase>,

        /// Seed for reproducible action selection
        #[arg(long, env = "EMORADAR_SEED")]
        seed: Option<u64>,

        /// Replacement strategy catalog (JSON)
        #[arg(long, env = "EMORADAR_CATALOG")]
        catalog: Option<PathBuf>,
    },
    /// Print the timing row for an urgency level
    Timing {
        #[arg(long)]
        urgency: String,
    },
    /// Print the outcome estimate for an intervention type
    Outcome {
        #[arg(long)]
        intervention: String,
    },
    /// Inspect or validate strategy catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Print the built-in catalog as JSON
    Export,
    /// Validate a catalog file
    Check {
        #[arg(long)]
        path: PathBuf,
    },
}

#[derive(Serialize, Debug)]
struct DecisionRecord {
    ts: String,
    engine: String,
    reading: EmotionReading,
    recommendation: Recommendation,
    phase_emphasis: Option<PhaseModifier>,
}

fn iso8601_now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string())
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true)
        .init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read reading from {}", p.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read reading from stdin")?;
            Ok(input)
        }
    }
}

fn build_engine(catalog: Option<&Path>) -> Result<InterventionEngine> {
    let engine = InterventionEngine::new();
    if let Some(path) = catalog {
        let replacement = StrategyCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?;
        engine
            .swap_catalog(replacement)
            .context("Failed to install catalog")?;
        tracing::info!(path = %path.display(), "using replacement catalog");
    }
    Ok(engine)
}

fn analyze(
    raw: &str,
    phase: Option<LearningPhase>,
    seed: Option<u64>,
    catalog: Option<&Path>,
) -> Result<DecisionRecord> {
    let (reading, fallback_reason) =
        read_or_fallback(&JsonReadingAdapter, raw).context("Rejected detector reading")?;
    if let Some(reason) = fallback_reason {
        tracing::warn!(error = %reason, "unreadable detector output, using neutral reading");
    }

    let engine = build_engine(catalog)?;
    let recommendation = match seed {
        Some(seed) => engine.analyze_with_rng(
            &reading.scores,
            phase,
            &mut ChaCha8Rng::seed_from_u64(seed),
        ),
        None => engine.analyze_intervention_need(&reading.scores, phase),
    };
    let phase_emphasis = phase_modifier(recommendation.learning_phase).copied();

    Ok(DecisionRecord {
        ts: iso8601_now(),
        engine: ENGINE_ID.to_string(),
        reading,
        recommendation,
        phase_emphasis,
    })
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(io::stdout(), value).context("Failed to write output")?;
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Analyze {
            input,
            phase,
            seed,
            catalog,
        } => {
            let raw = read_input(input.as_deref())?;
            let record = analyze(&raw, phase, seed, catalog.as_deref())?;
            print_json(&record)?;
        }
        Commands::Timing { urgency } => {
            if urgency.parse::<UrgencyLevel>().is_err() {
                tracing::warn!(%urgency, "unknown urgency, using medium row");
            }
            print_json(&compute_timing_for_label(&urgency))?;
        }
        Commands::Outcome { intervention } => {
            if intervention.parse::<InterventionType>().is_err() {
                tracing::warn!(%intervention, "unknown intervention type, using default factor");
            }
            print_json(&predict_outcome_for_name(&intervention))?;
        }
        Commands::Catalog { action } => match action {
            CatalogAction::Export => {
                let json = StrategyCatalog::builtin()
                    .to_json_pretty()
                    .context("Failed to serialize built-in catalog")?;
                println!("{json}");
            }
            CatalogAction::Check { path } => {
                let catalog = StrategyCatalog::load(&path)
                    .with_context(|| format!("Invalid catalog {}", path.display()))?;
                println!("ok: {} concerns", catalog.len());
            }
        },
    }

    Ok(())
}
