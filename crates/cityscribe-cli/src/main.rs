//! cityscribe: command-line interface for cityscribe-core
//!
//! Usage examples
//! --------------
//!
//! - Show the TOP-10 table for a CSV file
//!   $ cityscribe top --csv cities.csv
//!
//! - Annotate text (argument, file or stdin)
//!   $ cityscribe annotate --csv cities.csv --text "Вінниця"
//!   $ cityscribe annotate --csv cities.csv --input letter.txt --locale uk
//!
//! - Validate a field
//!   $ cityscribe validate phone "+38 (099) 567 8901"
//!
//! - Search / sort a product catalog
//!   $ cityscribe catalog --products products.json search shirt
//!
//! Logging goes to stderr; use `-v` or `RUST_LOG=debug` to see dropped rows
//! and cache activity.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use cityscribe_core::city::{default_cache, AnnotatorConfig, ParseMode};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Top { csv, json, strict } => {
            let text = read_csv(&csv)?;
            let table = default_cache()
                .table_with_mode(&text, parse_mode(strict))
                .with_context(|| format!("ranking {}", csv.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&*table)?);
            } else if table.is_empty() {
                println!("No valid city rows in {}", csv.display());
            } else {
                for city in table.iter() {
                    println!("{:>2}. {} ({} people)", city.rating, city.name, city.population);
                }
            }
        }

        Commands::Annotate {
            csv,
            text,
            input,
            locale,
            strict,
        } => {
            let csv_text = read_csv(&csv)?;
            let config = AnnotatorConfig::default()
                .with_locale(locale)
                .with_mode(parse_mode(strict));
            let annotator = default_cache()
                .annotator_with_config(&csv_text, config)
                .with_context(|| format!("ranking {}", csv.display()))?;

            let body = match (text, input) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => {
                    debug!("reading text from stdin");
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading stdin")?;
                    buf
                }
            };
            print!("{}", annotator.annotate(&body));
        }

        Commands::Validate { field, value } => {
            if field.validate(&value) {
                println!("valid {field}");
            } else {
                println!("invalid {field}");
                std::process::exit(1);
            }
        }

        #[cfg(feature = "json")]
        Commands::Catalog { products, action } => {
            run_catalog(&products, action)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_mode(strict: bool) -> ParseMode {
    if strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    }
}

fn read_csv(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

#[cfg(feature = "json")]
fn run_catalog(path: &Path, action: args::CatalogAction) -> anyhow::Result<()> {
    use cityscribe_core::catalog::{
        products_from_reader, search_products, sort_products_by, Product,
    };

    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut products = products_from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("loading products from {}", path.display()))?;

    let print = |p: &Product| {
        println!("{}  {} ({}) {}", p.id(), p.name(), p.brand(), p.price_for_quantity(1));
    };

    match action {
        args::CatalogAction::Search { query } => {
            let hits = search_products(&products, &query);
            if hits.is_empty() {
                println!("No products found matching: {query}");
            }
            hits.into_iter().for_each(print);
        }
        args::CatalogAction::Sort { rule } => {
            if !sort_products_by(&mut products, &rule) {
                eprintln!("Unknown sort rule {rule:?}; expected name, price or id");
            }
            products.iter().for_each(print);
        }
    }
    Ok(())
}
