use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{error, info};

use inspection_merge::config::{Config, DEFAULT_CONFIG_PATH};
use inspection_merge::logging;
use inspection_merge::pipeline::{MergeResult, Pipeline, StageResult};
use inspection_merge::types::RunMetadata;

#[derive(Parser)]
#[command(name = "inspection_merge")]
#[command(about = "Chicago + Dallas food inspection normalizer and merger")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand each raw city export into a row-per-violation CSV
    Stage {
        /// Sources to stage (comma-separated). Available: chicago, dallas
        #[arg(long)]
        sources: Option<String>,
    },
    /// Standardize the staged CSVs and build the master file
    Merge {
        /// Also write the run summary as JSON to this path
        #[arg(long)]
        summary_json: Option<PathBuf>,
    },
    /// Run stage then merge
    Run {
        /// Also write the run summary as JSON to this path
        #[arg(long)]
        summary_json: Option<PathBuf>,
    },
}

fn print_stage(result: &StageResult) {
    println!("\n📊 Staged {}:", result.source_id);
    println!("   Inspections read: {}", result.input_rows);
    println!("   Violation rows:   {}", result.output_rows);
    println!("   Output file:      {}", result.output_file.display());
}

fn print_merge(result: &MergeResult) {
    println!("\n📊 Master file:");
    println!("   Chicago rows: {}", result.chicago_rows);
    println!("   Dallas rows:  {}", result.dallas_rows);
    println!("   Output file:  {}", result.output_file.display());
    println!("\n{}", result.summary.render());
}

fn write_summary_json(path: &Path, result: &MergeResult) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&result.summary)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    info!("Wrote summary to {}", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
        .with_env_overrides();

    let _guard = logging::init_logging(&config.paths.log_dir);

    let run = RunMetadata::capture();
    info!("Run date {}", run.run_date_string());
    let pipeline = Pipeline::new(config)?;

    let outcome: anyhow::Result<()> = match cli.command {
        Commands::Stage { sources } => {
            println!("🔄 Staging raw exports...");
            let source_ids: Vec<String> = match sources {
                Some(list) => list.split(',').map(|s| s.trim().to_lowercase()).collect(),
                None => pipeline.registry().list_sources().into_iter().map(String::from).collect(),
            };
            pipeline
                .stage(&source_ids, &run)
                .map(|results| results.iter().for_each(print_stage))
                .context("Staging failed")
        }
        Commands::Merge { summary_json } => {
            println!("🔨 Building master file...");
            pipeline
                .merge()
                .context("Merge failed")
                .and_then(|result| {
                    print_merge(&result);
                    match summary_json {
                        Some(path) => write_summary_json(&path, &result),
                        None => Ok(()),
                    }
                })
        }
        Commands::Run { summary_json } => {
            println!("🚀 Running full pipeline (stage + merge)...");
            pipeline
                .run(&run)
                .context("Pipeline run failed")
                .and_then(|result| {
                    result.stages.iter().for_each(print_stage);
                    print_merge(&result.merge);
                    match summary_json {
                        Some(path) => write_summary_json(&path, &result.merge),
                        None => Ok(()),
                    }
                })
        }
    };

    match outcome {
        Ok(()) => {
            println!("✅ Done");
            Ok(())
        }
        Err(e) => {
            error!("{:#}", e);
            println!("❌ {:#}", e);
            Err(e)
        }
    }
}
