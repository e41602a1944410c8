//! Top-films listing parser for kino.mail.ru
//!
//! Parses HTML from the /cinema/top/ listing pages. Each page carries a
//! sequence of film cards; every card is extracted independently, and a
//! malformed card is skipped without affecting the rest of the page.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::{KinoError, Result};
use crate::types::{CardSkip, Film};

/// One parsed listing page.
#[derive(Debug)]
pub struct TopPage {
    /// Successfully extracted records, in document order
    pub films: Vec<Film>,
    /// Number of card elements found on the page, including skipped ones
    pub card_count: usize,
}

/// Parse a top-films listing page.
///
/// Finds every film card on the page and extracts a record from each.
/// Cards with missing required fields are logged and skipped; `card_count`
/// still includes them, so the caller can tell an exhausted listing (zero
/// cards) apart from a page of unusable cards.
///
/// # Arguments
/// * `html` - Raw HTML content of the listing page
/// * `base_url` - Site base URL used to absolutize film links
pub fn parse_top_page(html: &str, base_url: &str) -> Result<TopPage> {
    let document = Html::parse_document(html);

    let card_selector = Selector::parse("div.p-itemevent-small")
        .map_err(|e| KinoError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let mut films = Vec::new();
    let mut card_count = 0;

    for card in document.select(&card_selector) {
        card_count += 1;
        match parse_film_card(&card, base_url) {
            Ok(film) => films.push(film),
            Err(skip) => warn!(card = card_count, "skipping card: {}", skip),
        }
    }

    Ok(TopPage { films, card_count })
}

/// Extract one film record from a single card element.
///
/// Only the title and the film link are required; every other field falls
/// back to an empty string (or the rating sentinel) when its element is
/// absent from the markup.
///
/// # Arguments
/// * `card` - The `div.p-itemevent-small` card element
/// * `base_url` - Site base URL prefixed onto the card's relative link
///
/// # Returns
/// * `Ok(Film)` on success
/// * `Err(CardSkip)` naming the missing required field
pub fn parse_film_card(
    card: &ElementRef,
    base_url: &str,
) -> std::result::Result<Film, CardSkip> {
    // Title (required)
    let title = select_text(card, "span.link__text").ok_or(CardSkip::MissingTitle)?;

    // Original title (may be absent)
    let original_title =
        select_text(card, "span.text_light_small.color_gray").unwrap_or_default();

    // Details row: anchors in fixed positions - country, year, then genres
    let details = select_all_text(card, "div.margin_top_5 a");
    let country = details.first().cloned().unwrap_or_default();
    let year = details.get(1).cloned().unwrap_or_default();
    let genres = if details.len() > 2 {
        details[2..].join(", ")
    } else {
        String::new()
    };

    // The positional contract assumes position 1 holds the year; warn when
    // the markup has drifted, but keep the mapping as-is
    if !year.is_empty() && !looks_like_year(&year) {
        warn!(value = %year, "details row position 1 does not look like a year");
    }

    // Rating carries the not-available marker only when the element itself
    // is absent; a present element with no text yields an empty string
    let rating = select_element_text(card, "span.p-rate-flag__text")
        .unwrap_or_else(|| Film::RATING_NOT_AVAILABLE.to_string());

    // Film link (required), absolutized against the site base URL
    let href = select_href(card, "a.link-holder_itemevent_small")
        .ok_or(CardSkip::MissingUrl)?;
    let url = format!("{}{}", base_url, href);

    Ok(Film {
        title,
        original_title,
        year,
        rating,
        genres,
        country,
        url,
        director: String::new(),
    })
}

/// Trimmed text of the first element matching `selector`, if non-empty.
fn select_text(card: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = card.select(&selector).next()?;
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Trimmed text of the first element matching `selector`, if the element
/// exists at all; an empty element yields `Some` of the empty string.
fn select_element_text(card: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = card.select(&selector).next()?;
    Some(element.text().collect::<String>().trim().to_string())
}

/// Trimmed text of every element matching `selector`, in document order.
fn select_all_text(card: &ElementRef, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };
    card.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// The href attribute of the first element matching `selector`.
fn select_href(card: &ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = card.select(&selector).next()?;
    element.value().attr("href").map(|href| href.to_string())
}

/// Whether `text` matches the expected 4-digit year shape.
fn looks_like_year(text: &str) -> bool {
    regex_lite::Regex::new(r"^\d{4}$")
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}
