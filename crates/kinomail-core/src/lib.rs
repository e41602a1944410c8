//! kino.mail.ru Top-Films Scraper Core Library
//!
//! This crate collects the ranked film listing from kino.mail.ru and
//! exports the records to common file formats.
//!
//! # Features
//! - Paginated collection of the top-films listing up to a target count
//! - Per-card field extraction with defensive fallbacks
//! - Fixed-delay request throttling
//! - JSON, CSV, and XLSX export of the collected records

pub mod client;
pub mod error;
pub mod export;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{KinoClient, ScraperConfig};
pub use error::{KinoError, Result};
pub use export::{output_basename, write_csv, write_json, write_xlsx};
pub use scraper::{validate_count, KinoScraper, MAX_COUNT, MIN_COUNT};
pub use types::{CardSkip, CollectionOutcome, Film, StopReason, TopFilms};
