//! Basic usage example for cityscribe-rs
//!
//! This example demonstrates how to:
//! - Build the TOP-10 ranking table from CSV text
//! - Annotate city names in free text, in English and Ukrainian
//! - Reuse cached tables across calls
//! - Run the field validators and search a small catalog

use cityscribe_rs::city::default_cache;
use cityscribe_rs::prelude::*;

const CITIES: &str = "\
# x,y,name,population
44.38,34.33,Алушта,31440
49.46,30.17,Біла Церква,200131
49.54,28.49,Бердичів,87575
49.14,28.29,Вінниця,356665
";

fn main() -> Result<()> {
    println!("=== cityscribe-rs Basic Usage Example ===\n");

    // Example 1: ranking table
    println!("--- Example 1: TOP-10 table ---");
    let table = RankingTable::from_csv(CITIES, ParseMode::Strict)?;
    for city in &table {
        println!("{}. {} ({} people)", city.rating, city.name, city.population);
    }
    println!();

    // Example 2: annotate text
    println!("--- Example 2: Annotate text ---");
    let annotate = build_city_annotator(CITIES);
    println!("{}\n", annotate("Вінниця та Алушта"));

    // Example 3: Ukrainian wording, same cached table
    println!("--- Example 3: Ukrainian locale ---");
    let uk = default_cache().annotator(CITIES, Locale::Uk);
    println!("{}", uk.annotate("Бердичів"));
    println!("tables built so far: {}\n", default_cache().builds());

    // Example 4: validators
    println!("--- Example 4: Validators ---");
    for (field, value) in [
        (Field::Email, "someone@mail.com"),
        (Field::Phone, "+38 (099) 567 8901"),
        (Field::Password, "password"),
    ] {
        println!("{field:<8} {value:<20} valid = {}", field.validate(value));
    }
    println!();

    // Example 5: catalog search
    println!("--- Example 5: Catalog ---");
    let mut products = vec![
        Product::new("Shirt", "A blue shirt", 15.3, "MyClothesBrand", 5, vec![]),
        Product::new("Socks", "Warm wool socks", 4.5, "MyClothesBrand", 20, vec![]),
    ];
    sort_products(&mut products, SortRule::Price);
    for p in search_products(&products, "s") {
        println!("- {} {}", p.name(), p.price_for_quantity(2));
    }

    Ok(())
}
