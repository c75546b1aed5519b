use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use road_maintenance_priority::analysis;
use road_maintenance_priority::catalog::{RoadClass, DEFECT_CATALOG};
use road_maintenance_priority::config::Config;
use road_maintenance_priority::input;
use road_maintenance_priority::models::Report;
use road_maintenance_priority::report;
use road_maintenance_priority::schedule;

mod db;

#[derive(Parser)]
#[command(name = "road-priority")]
#[command(about = "Road maintenance prioritization from citizen defect reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct Source {
    /// Report snapshot (.json or .csv); reads Postgres via DATABASE_URL when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    /// Only consider reports from the last N days
    #[arg(long)]
    since_days: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank roads into the maintenance queue
    Rank {
        #[command(flatten)]
        source: Source,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Print the ranked roads as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select the best maintenance plan within a day budget
    Plan {
        #[command(flatten)]
        source: Source,
        /// Maintenance days available (defaults to ROAD_PRIORITY_DAY_BUDGET or 180)
        #[arg(long)]
        budget: Option<i64>,
        /// First working day of the plan (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        source: Source,
        #[arg(long)]
        budget: Option<i64>,
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Label for the report heading
        #[arg(long)]
        scope: Option<String>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// List the defect catalog and road class weights
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env();

    match cli.command {
        Commands::Rank {
            source,
            limit,
            json,
        } => {
            let reports = load(&source, &config).await?;
            let analysis = analysis::analyze_capped(&reports, None, config.max_day_budget);

            if json {
                let ranked: Vec<_> = analysis.ranked.iter().take(limit).collect();
                println!("{}", serde_json::to_string_pretty(&ranked)?);
                return Ok(());
            }

            if analysis.ranked.is_empty() {
                println!("No reports found for this window.");
                return Ok(());
            }

            println!("Top roads by severity score:");
            for (rank, road) in analysis.ranked.iter().take(limit).enumerate() {
                println!(
                    "{}. {} ({}) score {} across {} reports, {} days",
                    rank + 1,
                    road.road_identity,
                    RoadClass::from_label(road.road_type.as_deref()).as_str(),
                    road.severity_score,
                    road.report_count,
                    road.response_days
                );
            }
        }
        Commands::Plan {
            source,
            budget,
            start,
            json,
        } => {
            let reports = load(&source, &config).await?;
            let budget = budget.unwrap_or(config.day_budget);
            let analysis = analysis::analyze_capped(&reports, Some(budget), config.max_day_budget);
            let plan = analysis
                .plan
                .context("budget selection did not produce a plan")?;
            let start = start.unwrap_or_else(|| Utc::now().date_naive());
            let entries = schedule::build_schedule(&plan.selected, start);

            if json {
                let body = serde_json::json!({ "plan": plan, "schedule": entries });
                println!("{}", serde_json::to_string_pretty(&body)?);
                return Ok(());
            }

            println!(
                "Selected {} roads: total severity {}, {} of {} days ({:.1}%).",
                plan.selected.len(),
                plan.total_score,
                plan.total_days,
                plan.day_budget,
                plan.utilization()
            );
            for entry in entries {
                println!(
                    "- {}: {} to {} ({} days)",
                    entry.road_identity, entry.start, entry.end, entry.duration_days
                );
            }
        }
        Commands::Report {
            source,
            budget,
            start,
            scope,
            out,
        } => {
            let reports = load(&source, &config).await?;
            let budget = budget.unwrap_or(config.day_budget);
            let analysis = analysis::analyze_capped(&reports, Some(budget), config.max_day_budget);
            let start = start.unwrap_or_else(|| Utc::now().date_naive());
            let body = report::build_report(scope.as_deref(), &analysis, &reports, start);
            std::fs::write(&out, body)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Catalog => {
            println!("Road classes:");
            for class in RoadClass::ALL {
                println!("- {}: {}", class.as_str(), class.weight());
            }
            println!("Defects:");
            for (label, days) in DEFECT_CATALOG {
                println!("- {label}: {days} days");
            }
        }
    }

    Ok(())
}

async fn load(source: &Source, config: &Config) -> anyhow::Result<Vec<Report>> {
    let reports = match &source.input {
        Some(path) => input::load_reports(path)
            .with_context(|| format!("failed to load reports from {}", path.display()))?,
        None => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when --input is not given")?;
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .context("failed to connect to Postgres")?;
            db::fetch_reports(&pool).await?
        }
    };

    let reports = match source.since_days {
        Some(days) => analysis::within_window(&reports, days, Utc::now().date_naive()),
        None => reports,
    };
    info!(count = reports.len(), "report snapshot ready");
    Ok(reports)
}
