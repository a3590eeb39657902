use cityscribe_core::validate::Field;
use cityscribe_core::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for cityscribe-cli
#[derive(Debug, Parser)]
#[command(
    name = "cityscribe",
    version,
    about = "Rank the largest cities of a CSV file, annotate text, validate fields"
)]
pub struct CliArgs {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the TOP-10 table built from a city CSV file
    Top {
        /// Path to the `x,y,name,population` CSV file
        #[arg(short = 'c', long = "csv")]
        csv: PathBuf,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,

        /// Fail on incomplete rows instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Annotate city names in text (from --text, --input or stdin)
    Annotate {
        /// Path to the `x,y,name,population` CSV file
        #[arg(short = 'c', long = "csv")]
        csv: PathBuf,

        /// Text to annotate
        #[arg(short = 't', long = "text", conflicts_with = "input")]
        text: Option<String>,

        /// File whose contents should be annotated
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Phrase wording: en or uk
        #[arg(short = 'l', long = "locale", default_value_t = Locale::En)]
        locale: Locale,

        /// Fail on incomplete rows instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Check a value against one of the field validators
    Validate {
        /// email, phone or password
        field: Field,
        /// The value to check
        value: String,
    },

    /// Search or sort a JSON product catalog
    #[cfg(feature = "json")]
    Catalog {
        /// Path to a JSON array of products
        #[arg(short = 'p', long = "products")]
        products: PathBuf,

        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[cfg(feature = "json")]
#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// List products whose name or description contains a substring
    Search {
        /// Substring to search (case-insensitive)
        query: String,
    },

    /// List products ordered by name, price or id
    Sort {
        /// name, price or id
        rule: String,
    },
}
