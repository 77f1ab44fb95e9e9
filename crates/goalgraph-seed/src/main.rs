//! CLI entry point for the goalgraph seeder.
//!
//! Report output goes to stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use goalgraph_core::{DateSource, DateSourceKind, SeedDataset};
use goalgraph_graph::{GoalDeadline, GraphClient, GraphConfig};

use goalgraph_seed::config;
use goalgraph_seed::report::{self, ReportFormat};
use goalgraph_seed::seeder::Seeder;

#[derive(Parser)]
#[command(name = "goalgraph-seed")]
#[command(about = "Seed the goal-tracking graph in Neo4j and report goal deadlines")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Date source for seeded records: fixed or relative (overrides config).
    #[arg(long, global = true)]
    dates: Option<DateSourceKind>,

    /// Config file prefix (default: goalgraph).
    #[arg(short, long, default_value = "goalgraph", global = true)]
    config: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Reset, seed, then print the report (the default).
    Run,
    /// Delete every node and relationship.
    Reset,
    /// Reset, then write the dataset.
    Seed,
    /// Print every user goal with its deadline.
    Report {
        /// Print rows as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Check the graph holds exactly the seed dataset.
    Verify,
    /// Print the dataset as JSON without connecting.
    Plan,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.json_logs {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let app_config = config::load(&cli.config)?;
    let dates = cli.dates.unwrap_or(app_config.seed.dates).resolve();
    let command = cli.command.unwrap_or(Command::Run);

    // Each arm opens its own connection; it is released when the arm ends.
    match command {
        Command::Run => {
            let graph = connect(&app_config.neo4j, &dates).await?;
            let rows = Seeder::new(&graph, &dates).run().await?;
            print_rows(&rows, ReportFormat::Lines)?;
        }
        Command::Reset => {
            let graph = connect(&app_config.neo4j, &dates).await?;
            Seeder::new(&graph, &dates).reset().await?;
        }
        Command::Seed => {
            let graph = connect(&app_config.neo4j, &dates).await?;
            let summary = Seeder::new(&graph, &dates).seed().await?;
            println!(
                "Seeded {} nodes and {} relationships",
                summary.nodes_created, summary.relationships_created
            );
        }
        Command::Report { json } => {
            let graph = connect(&app_config.neo4j, &dates).await?;
            let rows = Seeder::new(&graph, &dates).report().await?;
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Lines
            };
            print_rows(&rows, format)?;
        }
        Command::Verify => {
            let graph = connect(&app_config.neo4j, &dates).await?;
            let verification = Seeder::new(&graph, &dates).verify().await?;
            println!("{}", serde_json::to_string_pretty(&verification)?);
            verification.into_result()?;
        }
        Command::Plan => print_plan(&dates)?,
    }

    Ok(())
}

async fn connect(config: &GraphConfig, dates: &DateSource) -> anyhow::Result<GraphClient> {
    let graph = GraphClient::connect(config).await?;
    tracing::info!(dates = %dates.kind(), "Seeder ready");
    Ok(graph)
}

fn print_plan(dates: &DateSource) -> anyhow::Result<()> {
    let dataset = SeedDataset::build(dates);
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}

fn print_rows(rows: &[GoalDeadline], format: ReportFormat) -> anyhow::Result<()> {
    let out = report::render(rows, format)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
