use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use vendormatch_core::catalog;
use vendormatch_core::config::{Config, Settings};
use vendormatch_core::synth;
use vendormatch_core::{FilterCriteria, RankedResult, VendorRecord};
use vendormatch_engine::{recommend, response_by_tier, summarize};
use vendormatch_index::CorpusIndex;

#[derive(Parser)]
#[command(name = "vendormatch")]
#[command(about = "Rank HR service vendors against a free-text need")]
#[command(version)]
struct Cli {
    /// Configuration environment (dev, prod, test); defaults to RUST_ENV
    #[arg(long, global = true)]
    env: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a deterministic demo catalog
    Generate {
        #[arg(long)]
        count: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Rank vendors for a query and filters
    Recommend {
        /// Free-text need, e.g. "payroll automation for startups"
        query: Option<String>,
        /// Allowed category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Allowed cost tier: Low, Medium or High (repeatable)
        #[arg(long = "cost-tier")]
        cost_tiers: Vec<String>,
        #[arg(long, default_value_t = 0.0)]
        min_rating: f64,
        /// Page size; falls back to recommend.page_size
        #[arg(long, allow_negative_numbers = true)]
        limit: Option<i64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Per-category averages and response time by cost tier
    Stats {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn load_records(settings: &Settings, path: Option<PathBuf>) -> anyhow::Result<Vec<VendorRecord>> {
    let path = match path {
        Some(path) => path,
        None => settings.catalog_path(&std::env::current_dir()?),
    };
    catalog::load_csv(&path).with_context(|| format!("loading catalog {}", path.display()))
}

fn print_text(ranked: &RankedResult<'_>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if ranked.is_empty() {
        writeln!(out, "No vendors match the current filters.")?;
        return Ok(());
    }
    for (rank, item) in ranked.iter().enumerate() {
        let r = item.record;
        writeln!(
            out,
            "{:>2}. {} [{} / {}] rating {:.1}, success {}%, response {}h  ({:.1}% match)",
            rank + 1,
            r.name,
            r.category,
            r.cost_tier,
            r.rating,
            r.success_rate,
            r.response_time,
            item.confidence
        )?;
        if !r.description.is_empty() {
            writeln!(out, "    {}", r.description)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load_for_env(cli.env.as_deref()).context("loading configuration")?;
    let settings = config.settings()?;

    match cli.command {
        Commands::Generate { count, seed, out } => {
            let count = count.unwrap_or(settings.synth.count);
            let seed = seed.unwrap_or(settings.synth.seed);
            let records = synth::generate(count, seed);
            match out {
                Some(path) => {
                    catalog::save_csv(&path, &records)?;
                    eprintln!("Wrote {} vendors to {}", records.len(), path.display());
                }
                None => catalog::write_csv(io::stdout().lock(), &records)?,
            }
        }
        Commands::Recommend { query, categories, cost_tiers, min_rating, limit, format, catalog: path } => {
            let index = CorpusIndex::build(load_records(&settings, path)?)?;
            let filters = FilterCriteria::new()
                .with_categories(categories)
                .with_cost_tier_names(cost_tiers)
                .with_min_rating(min_rating);
            let page_size = limit.unwrap_or(settings.recommend.page_size);
            let ranked = recommend(&index, query.as_deref(), &filters, page_size)?;
            tracing::info!(returned = ranked.len(), "recommendations ready");
            match format {
                OutputFormat::Text => print_text(&ranked)?,
                OutputFormat::Json => {
                    serde_json::to_writer_pretty(io::stdout().lock(), &ranked)?;
                    println!();
                }
                OutputFormat::Csv => catalog::write_ranked_csv(io::stdout().lock(), &ranked)?,
            }
        }
        Commands::Stats { catalog: path } => {
            let records = load_records(&settings, path)?;
            let mut out = io::stdout().lock();
            writeln!(out, "{:<14} {:>6} {:>8} {:>9} {:>10}", "category", "count", "rating", "success%", "response_h")?;
            for s in summarize(&records) {
                writeln!(
                    out,
                    "{:<14} {:>6} {:>8.2} {:>9.1} {:>10.1}",
                    s.category, s.count, s.mean_rating, s.mean_success_rate, s.mean_response_time
                )?;
            }
            writeln!(out)?;
            writeln!(out, "{:<8} {:>6} {:>5} {:>7} {:>7} {:>5}", "tier", "count", "min_h", "median", "mean", "max_h")?;
            for t in response_by_tier(&records) {
                writeln!(
                    out,
                    "{:<8} {:>6} {:>5} {:>7.1} {:>7.1} {:>5}",
                    t.cost_tier.as_str(), t.count, t.min, t.median, t.mean, t.max
                )?;
            }
        }
    }
    Ok(())
}
