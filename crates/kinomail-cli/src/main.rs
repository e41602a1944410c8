//! Interactive CLI for the kino.mail.ru top-films scraper
//!
//! Prompts for a film count, collects the listing, and writes the records
//! to JSON, CSV, and XLSX files in the working directory.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use kinomail_core::{
    output_basename, validate_count, write_csv, write_json, write_xlsx, CollectionOutcome,
    KinoScraper, StopReason, MAX_COUNT, MIN_COUNT,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    println!("=== kino.mail.ru top films scraper ===");
    println!("Collectable range: {} to {} films", MIN_COUNT, MAX_COUNT);

    let count = match prompt_for_count() {
        Ok(count) => count,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let scraper = match KinoScraper::new() {
        Ok(scraper) => scraper,
        Err(e) => {
            eprintln!("Error: failed to create scraper: {}", e);
            process::exit(1);
        }
    };

    println!("\nCollecting top-{} films...", count);
    let result = match scraper.top_films(count).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if result.films.is_empty() {
        println!("No data collected. Try again later.");
        return;
    }

    println!("\nCollected {} films", result.films.len());
    match result.outcome {
        CollectionOutcome::Done => {}
        CollectionOutcome::Stopped(StopReason::NoMoreResults) => {
            println!("The listing ran out before the requested count was reached.");
        }
        CollectionOutcome::Stopped(StopReason::FetchFailure) => {
            println!("A page fetch failed; saving what was collected.");
        }
    }

    if let Err(e) = export_all(&result.films, count) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Prompt for the film count on stdout and read one line from stdin.
///
/// Non-integer input and out-of-range values both produce an error message;
/// there is no retry prompt.
fn prompt_for_count() -> Result<u32, String> {
    print!(
        "How many films to collect ({}-{})? ",
        MIN_COUNT, MAX_COUNT
    );
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;

    let count: u32 = line
        .trim()
        .parse()
        .map_err(|_| format!("enter a number from {} to {}", MIN_COUNT, MAX_COUNT))?;
    validate_count(count).map_err(|e| e.to_string())?;

    Ok(count)
}

/// Write the three export files into the working directory.
fn export_all(films: &[kinomail_core::Film], count: u32) -> kinomail_core::Result<()> {
    let base = output_basename(count);

    let json_path = PathBuf::from(format!("{}.json", base));
    write_json(films, &json_path)?;
    println!("Saved {}", json_path.display());

    let csv_path = PathBuf::from(format!("{}.csv", base));
    write_csv(films, &csv_path)?;
    println!("Saved {}", csv_path.display());

    let xlsx_path = PathBuf::from(format!("{}.xlsx", base));
    write_xlsx(films, &xlsx_path)?;
    println!("Saved {}", xlsx_path.display());

    Ok(())
}
