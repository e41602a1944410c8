//! Data types for the kino.mail.ru scraper
//!
//! This module contains the film record and the collection outcome types.
//! All record types implement Serialize and Deserialize so the JSON and CSV
//! exporters can drive them directly.

use serde::{Deserialize, Serialize};

/// One film entry from the top listing.
///
/// The record shape is fixed-arity: every field is always present in the
/// output, but only `title` and `url` are guaranteed non-empty. All values
/// are kept as the text the site serves; nothing is coerced to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Display title (always non-empty)
    pub title: String,
    /// Original-language title, empty if the card has none
    pub original_title: String,
    /// Release year as text, empty if the card has none
    pub year: String,
    /// Rating as text, [`Film::RATING_NOT_AVAILABLE`] when the card
    /// carries no rating element
    pub rating: String,
    /// Genres joined with ", ", empty if the card lists none
    pub genres: String,
    /// Country of origin, empty if the card has none
    pub country: String,
    /// Absolute URL of the film page (always non-empty)
    pub url: String,
    /// Reserved for a future director extraction step; always empty
    pub director: String,
}

impl Film {
    /// Marker used for `rating` when the card has no rating element.
    ///
    /// Distinct from the empty string: it means "the field exists but the
    /// site shows no value", matching the site's own placeholder.
    pub const RATING_NOT_AVAILABLE: &'static str = "Н/Д";

    /// Column names in record-definition order, shared by every exporter.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "title",
        "original_title",
        "year",
        "rating",
        "genres",
        "country",
        "url",
        "director",
    ];

    /// Project the record into one row of cell text, in [`Self::FIELD_NAMES`]
    /// order.
    pub fn row(&self) -> [&str; 8] {
        [
            &self.title,
            &self.original_title,
            &self.year,
            &self.rating,
            &self.genres,
            &self.country,
            &self.url,
            &self.director,
        ]
    }
}

/// Why a single card was dropped during extraction.
///
/// A skipped card never aborts the page; the collector logs the reason and
/// moves on to the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSkip {
    /// The card has no title element
    MissingTitle,
    /// The card has no link anchor or the anchor has no href
    MissingUrl,
}

impl std::fmt::Display for CardSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardSkip::MissingTitle => write!(f, "card has no title element"),
            CardSkip::MissingUrl => write!(f, "card has no film link"),
        }
    }
}

/// Why pagination stopped before the requested count was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// A page fetch failed (network error, timeout, or bad status)
    FetchFailure,
    /// A page came back with zero film cards
    NoMoreResults,
}

/// Terminal state of one collection run.
///
/// Both variants carry a usable (possibly partial, possibly empty) film
/// list; `Stopped` is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionOutcome {
    /// The requested count was reached
    Done,
    /// Pagination ended early
    Stopped(StopReason),
}

/// Result of one collection run: the records in discovery order plus how
/// the run ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFilms {
    /// Collected records, page order then in-page card order, at most the
    /// requested count
    pub films: Vec<Film>,
    /// How the run terminated
    pub outcome: CollectionOutcome,
}
