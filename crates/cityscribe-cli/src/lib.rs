//! cityscribe-cli
//! ==============
//!
//! Command-line interface for the `cityscribe-core` crate.
//!
//! This crate primarily provides a binary (`cityscribe`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage
//! -----------
//!
//! ```text
//! cityscribe --help
//! cityscribe top --csv cities.csv
//! cityscribe top --csv cities.csv --json
//! cityscribe annotate --csv cities.csv --text "Алушта, Вінниця"
//! cat letter.txt | cityscribe annotate --csv cities.csv --locale uk
//! cityscribe validate email someone@mail.com
//! cityscribe catalog --products products.json search shirt
//! cityscribe catalog --products products.json sort price
//! ```
//!
//! For programmatic access use [`cityscribe-core`] directly.
//!
//! [`cityscribe-core`]: https://docs.rs/cityscribe-core
