//! HTML parsers for kino.mail.ru pages
//!
//! This module contains the parser for the top-films listing page:
//! - `top`: locate film cards and extract one record per card

pub mod top;

// Re-export main parsing functions
pub use top::{parse_film_card, parse_top_page};
