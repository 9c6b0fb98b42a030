//! decklist - Pokémon TCG deck-list converter and checker

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use ptcg_decklist::{
    analysis::{analyze_deck, deck_stats},
    batch::validate_directory,
    export::{export_json, export_text_with},
    loader::load_deck_async,
    validate::validate_deck_with,
    CategoryRules, DeckDraft,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "decklist")]
#[command(about = "Import, export and validate Pokémon TCG deck lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a text or JSON deck list and print it as interchange JSON
    Import {
        /// Deck file (text list, or JSON starting with '{')
        #[arg(value_name = "DECK")]
        file: PathBuf,

        /// Deck name to use instead of the imported one
        #[arg(long)]
        name: Option<String>,
    },

    /// Print a deck as a categorized text list
    Export {
        #[arg(value_name = "DECK")]
        file: PathBuf,

        /// JSON file with replacement categorization keywords
        #[arg(long, value_name = "RULES")]
        rules: Option<PathBuf>,
    },

    /// Check deck size and copy limits; exits non-zero when the deck is illegal
    Validate {
        #[arg(value_name = "DECK")]
        file: PathBuf,

        /// Format to validate against (default: the deck's own format)
        #[arg(long)]
        format: Option<String>,

        #[arg(long, value_name = "RULES")]
        rules: Option<PathBuf>,
    },

    /// Print card counts and a heuristic analysis
    Analyze {
        #[arg(value_name = "DECK")]
        file: PathBuf,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate every .txt and .json deck under a directory
    CheckDir {
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        #[arg(long, value_name = "RULES")]
        rules: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Import { file, name } => {
            let mut deck = load(&file).await?;
            if let Some(name) = name {
                deck.name = name;
            }
            println!("{}", export_json(&deck)?);
        }
        Commands::Export { file, rules } => {
            let rules = load_rules(rules.as_deref())?;
            let deck = load(&file).await?;
            println!("{}", export_text_with(&deck, &rules));
        }
        Commands::Validate { file, format, rules } => {
            let rules = load_rules(rules.as_deref())?;
            let mut deck = load(&file).await?;
            if let Some(format) = format {
                deck.format = format;
            }
            run_validate(&deck, &rules)?;
        }
        Commands::Analyze { file, json } => {
            let deck = load(&file).await?;
            run_analyze(&deck, json)?;
        }
        Commands::CheckDir { dir, rules } => {
            let rules = load_rules(rules.as_deref())?;
            run_check_dir(dir, rules).await?;
        }
    }

    Ok(())
}

async fn load(path: &Path) -> anyhow::Result<DeckDraft> {
    load_deck_async(path)
        .await
        .with_context(|| format!("failed to load deck {}", path.display()))
}

fn load_rules(path: Option<&Path>) -> anyhow::Result<CategoryRules> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read rules {}", path.display()))?;
            Ok(CategoryRules::from_json(&json)?)
        }
        None => Ok(CategoryRules::default()),
    }
}

fn run_validate(deck: &DeckDraft, rules: &CategoryRules) -> anyhow::Result<()> {
    let result = validate_deck_with(deck, rules);
    if result.is_valid {
        println!("{}: valid {} deck ({} cards)", deck.name, deck.format, deck.total_cards());
        return Ok(());
    }

    for error in &result.errors {
        println!("  - {error}");
    }
    bail!("{} has {} rule violation(s)", deck.name, result.errors.len())
}

fn run_analyze(deck: &DeckDraft, json: bool) -> anyhow::Result<()> {
    let stats = deck_stats(deck, &CategoryRules::default());
    let analysis = analyze_deck(deck);

    if json {
        let doc = serde_json::json!({ "stats": stats, "analysis": analysis });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("=== {} ({}) ===", deck.name, deck.format);
    println!("Cards: {} ({} unique)", stats.total_cards, stats.unique_cards);
    for (category, count) in &stats.category_counts {
        println!("  {category}: {count}");
    }
    println!();

    let curve = &analysis.energy_curve;
    println!("Average energy cost: {:.2}", curve.average_energy_cost);
    for bucket in &curve.energy_distribution {
        println!("  cost {}: {} ({}%)", bucket.cost, bucket.count, bucket.percentage);
    }
    println!("  {}", curve.recommendation);
    println!();

    let types = &analysis.type_distribution;
    println!("Dominant type: {}", types.dominant_type);
    for t in &types.type_counts {
        println!("  {}: {} ({}%)", t.kind.label(), t.count, t.percentage);
    }
    println!("  {}", types.recommendation);
    println!();

    let rarity = &analysis.rarity_distribution;
    for r in &rarity.rarity_counts {
        println!("  {}: {} ({}%)", r.rarity.label(), r.count, r.percentage);
    }
    println!("  {}", rarity.recommendation);
    println!();

    for s in &analysis.suggestions {
        println!("[{:?}/{:?}] {}: {}", s.kind, s.priority, s.title, s.description);
    }
    println!("Overall score: {}/100", analysis.overall_score);
    Ok(())
}

async fn run_check_dir(dir: PathBuf, rules: CategoryRules) -> anyhow::Result<()> {
    // jwalk and rayon block, keep them off the async workers
    let entries = tokio::task::spawn_blocking(move || validate_directory(&dir, &rules)).await??;

    let mut invalid = 0;
    for entry in &entries {
        match &entry.result {
            Ok(result) if result.is_valid => {
                println!("ok      {} ({} cards)", entry.path.display(), entry.total_cards);
            }
            Ok(result) => {
                invalid += 1;
                println!("invalid {} ({} cards)", entry.path.display(), entry.total_cards);
                for error in &result.errors {
                    println!("          {error}");
                }
            }
            Err(e) => {
                invalid += 1;
                println!("error   {}: {e}", entry.path.display());
            }
        }
    }
    println!("\n{} decks checked, {invalid} invalid", entries.len());

    if invalid > 0 {
        bail!("{invalid} deck(s) failed validation");
    }
    Ok(())
}
