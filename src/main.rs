use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use pcos_risk::config::Config;
use pcos_risk::output::terminal;
use pcos_risk::scoring::features::FeatureRecord;
use pcos_risk::scoring::risk::{score, RiskRules};
use pcos_risk::web::journal::{FileJournal, PredictionJournal, TracingJournal};
use pcos_risk::web::{run_server, AppState};

/// PCOS risk: rule-based risk scoring service.
///
/// Scores a small set of measurements and symptoms into a 0-100 risk,
/// either over HTTP (`serve`) or once from the command line (`score`).
#[derive(Parser)]
#[command(name = "pcos-risk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP scoring service (POST /predict)
    Serve {
        /// Port to listen on (overrides PCOS_PORT, default 5001)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides PCOS_BIND, default 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Score a single record locally
    Score {
        /// Age in years
        #[arg(long)]
        age: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Cycle length in days
        #[arg(long)]
        cycle: f64,

        #[arg(long)]
        hair_growth: bool,

        #[arg(long)]
        skin_darkening: bool,

        #[arg(long)]
        hair_loss: bool,

        #[arg(long)]
        pimples: bool,

        /// Print the /predict JSON payload instead of the summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("pcos_risk=info,tower_http=info")
            }),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }

            // The guard must outlive the server so buffered journal lines are flushed.
            let mut _journal_guard = None;
            let journal: Arc<dyn PredictionJournal> = match &config.log_file {
                Some(path) => {
                    info!("Journaling predictions to {}", path.display());
                    let (journal, guard) = FileJournal::open(path)?;
                    _journal_guard = Some(guard);
                    Arc::new(journal)
                }
                None => Arc::new(TracingJournal),
            };

            if config.strict_ranges {
                info!("Strict range validation enabled");
            }

            run_server(AppState::new(config, journal)).await?;
        }

        Commands::Score {
            age,
            weight,
            height,
            cycle,
            hair_growth,
            skin_darkening,
            hair_loss,
            pimples,
            json,
        } => {
            let features = FeatureRecord {
                age,
                weight,
                height,
                cycle,
                hair_growth,
                skin_darkening,
                hair_loss,
                pimples,
            };

            let result = score(&features, &RiskRules::default())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let violations = features.range_violations();
                if !violations.is_empty() {
                    println!("{}", "Inputs outside expected ranges:".yellow());
                    terminal::display_range_warnings(&violations);
                }
                terminal::display_score(&features, &result);
            }
        }
    }

    Ok(())
}
