use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use menu_combo_rs::benchmark::{benchmark_complexity, BenchmarkConfig};
use menu_combo_rs::cli::{Cli, Command, ListingFormat, MenuSource, SeriesFormat};
use menu_combo_rs::enumerator::enumerate_combinations;
use menu_combo_rs::error::{MenuError, Result};
use menu_combo_rs::interface::{
    combinations_json, complexity_json, display_chart, display_combinations,
    display_invalid_input, prompt_budget, prompt_items, read_items, render_complexity_summary,
    validate_items, write_json, write_series_csv, MenuRequest,
};
use menu_combo_rs::logging::init_logging;
use menu_combo_rs::models::{random_menu, Item};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or_default();

    let outcome = match command {
        Command::Combos {
            items,
            budget,
            format,
        } => cmd_combos(items, budget, format),
        Command::Analyze {
            source,
            repetitions,
            format,
        } => cmd_analyze(source, repetitions, format),
    };

    // Bad input is reported as a notice, not a failure
    match outcome {
        Err(MenuError::InvalidInput(reason)) => {
            display_invalid_input(&reason);
            Ok(())
        }
        other => other,
    }
}

/// List every combination that fits the budget.
fn cmd_combos(items: Option<String>, budget: Option<String>, format: ListingFormat) -> Result<()> {
    let raw_items = match items {
        Some(raw) => raw,
        None => prompt_items()?,
    };
    let raw_budget = match budget {
        Some(raw) => raw,
        None => prompt_budget()?,
    };

    let request = MenuRequest::from_fields(&raw_items, &raw_budget)?;
    let combos = enumerate_combinations(&request.items, request.budget);

    match format {
        ListingFormat::Text => display_combinations(&request.items, &combos, request.budget),
        ListingFormat::Json => {
            let json = combinations_json(&request.items, &combos, request.budget)?;
            write_json(&json, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Benchmark both enumeration strategies over every menu prefix.
fn cmd_analyze(source: MenuSource, repetitions: usize, format: SeriesFormat) -> Result<()> {
    let config = BenchmarkConfig::new(repetitions)?;
    let items = load_menu(source)?;

    if format == SeriesFormat::Text {
        println!(
            "Analyzing {} items with {} repetitions per size...",
            items.len(),
            config.repetitions
        );
        println!();
    }

    let series = benchmark_complexity(&items, &config);

    match format {
        SeriesFormat::Text => {
            print!("{}", render_complexity_summary(&series));
            println!();
            display_chart(&series);
        }
        SeriesFormat::Json => write_json(&complexity_json(&series)?, io::stdout().lock())?,
        SeriesFormat::Csv => write_series_csv(&series, io::stdout().lock())?,
    }

    Ok(())
}

fn load_menu(source: MenuSource) -> Result<Vec<Item>> {
    if let Some(count) = source.random {
        let mut rng = StdRng::seed_from_u64(source.seed);
        let items = random_menu(&mut rng, count);
        validate_items(&items)?;
        return Ok(items);
    }

    let raw = match source.items {
        Some(raw) => raw,
        None => prompt_items()?,
    };
    read_items(&raw)
}
