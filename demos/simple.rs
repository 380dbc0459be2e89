//! Basic literal formatting through the serde bridge.
//!
//! Run with: cargo run --example simple

use litrep::{to_string, to_string_with_options, FormatOptions};
use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let user = User {
        id: 42,
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    // Multi-line literal (default options)
    println!("Multi-line:\n{}\n", to_string(&user)?);

    // Compact single-line literal
    let compact = to_string_with_options(&user, &FormatOptions::single_line())?;
    println!("Single-line:\n{}", compact);

    Ok(())
}
