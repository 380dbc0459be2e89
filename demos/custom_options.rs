//! Customizing literal output with FormatOptions.
//!
//! Run with: cargo run --example custom_options

use litrep::{to_string_with_options, FormatOptions};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    retries: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: false,
        retries: 0,
    };

    // Default: four-space indent, zero-valued fields elided
    println!("Default:\n{}\n", to_string_with_options(&config, &FormatOptions::default())?);

    // Tab indent
    let tabs = FormatOptions::new().with_indent("\t");
    println!("Tab indent:\n{}\n", to_string_with_options(&config, &tabs)?);

    // All fields, including zero values
    let full = FormatOptions::new().with_all_fields();
    println!("All fields:\n{}\n", to_string_with_options(&config, &full)?);

    // Compact one-liner
    let compact = FormatOptions::single_line();
    println!("Single line:\n{}", to_string_with_options(&config, &compact)?);

    Ok(())
}
