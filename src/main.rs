use std::fs;

use clap::Parser;

use loc_badge::badge::BadgeCard;
use loc_badge::cli::Cli;
use loc_badge::stats::{Breakdown, StatsDocument};
use loc_badge::{BadgeError, EXIT_INPUT_ERROR, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                BadgeError::MissingInput { .. } => EXIT_INPUT_ERROR,
                BadgeError::Parse(_) | BadgeError::Io(_) => EXIT_RUNTIME_ERROR,
            }
        }
    }
}

fn run_impl(cli: &Cli) -> loc_badge::Result<i32> {
    // 1. Load the count document
    let document = StatsDocument::load(&cli.input)?;

    // 2. Aggregate totals and rank languages
    let breakdown = Breakdown::from_document(&document);

    // 3. Render the card
    let svg = BadgeCard::new(&breakdown).with_top(cli.top).render();

    // 4. Persist
    fs::write(&cli.output, svg)?;

    if !cli.quiet {
        println!("SVG generated successfully: {}", cli.output.display());
    }

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
