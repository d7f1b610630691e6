use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use joker_synergy::cards::Catalog;
use joker_synergy::report::SynergyReport;
use joker_synergy::synergy::{AnalysisConfig, ScorerConfig};
use joker_synergy::tagging::PatternRuleSet;

#[derive(Parser, Debug)]
#[command(name = "joker-synergy", version, about = "Tag jokers and rank synergy pairs")]
struct Args {
    /// JSON array of card rows
    #[arg(long, value_name = "FILE", required_unless_present = "dump_rules")]
    cards: Option<PathBuf>,

    /// JSON rule taxonomy (defaults to the built-in taxonomy)
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Number of top pairs to report
    #[arg(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Score on a single thread
    #[arg(long)]
    sequential: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Print the built-in taxonomy as JSON, then exit
    #[arg(long)]
    dump_rules: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.dump_rules {
        println!("{}", PatternRuleSet::builtin().to_json()?);
        return Ok(());
    }

    let custom_rules = match &args.rules {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading rules from {}", path.display()))?;
            let rules = PatternRuleSet::from_json(&json)
                .with_context(|| format!("loading rules from {}", path.display()))?;
            info!(rules = rules.len(), path = %path.display(), "loaded custom taxonomy");
            Some(rules)
        }
        None => None,
    };
    let rules = custom_rules.as_ref().unwrap_or_else(|| PatternRuleSet::builtin());

    let cards_path = args
        .cards
        .as_ref()
        .context("--cards is required unless --dump-rules is given")?;
    let json = std::fs::read_to_string(cards_path)
        .with_context(|| format!("reading cards from {}", cards_path.display()))?;
    let catalog = Catalog::from_json(&json, rules)
        .with_context(|| format!("building catalog from {}", cards_path.display()))?;
    info!(cards = catalog.len(), "catalog ready");

    let scorer = if args.sequential {
        ScorerConfig::sequential()
    } else {
        ScorerConfig::default()
    };
    let config = AnalysisConfig::default()
        .with_top_k(args.top_k)
        .with_scorer(scorer);
    let report = SynergyReport::build(&catalog, &config);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        _ => print!("{}", report),
    }

    Ok(())
}
