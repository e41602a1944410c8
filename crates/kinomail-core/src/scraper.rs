//! Main kino.mail.ru scraper API
//!
//! This module provides the high-level API for collecting the top-films
//! listing. It drives pagination over the HTTP client and the card parser,
//! accumulating records until the requested count is reached or the listing
//! runs out.

use tracing::{debug, warn};

use crate::client::KinoClient;
use crate::error::{KinoError, Result};
use crate::parser::parse_top_page;
use crate::types::{CollectionOutcome, StopReason, TopFilms};

/// Smallest collectible film count
pub const MIN_COUNT: u32 = 1;

/// Largest collectible film count
pub const MAX_COUNT: u32 = 150;

/// Listing path on kino.mail.ru
const TOP_PATH: &str = "/cinema/top/";

/// Main scraper API for the kino.mail.ru top-films listing
///
/// # Example
/// ```no_run
/// use kinomail_core::KinoScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = KinoScraper::new()?;
///
///     let result = scraper.top_films(10).await?;
///     println!("Collected {} films", result.films.len());
///
///     Ok(())
/// }
/// ```
pub struct KinoScraper {
    client: KinoClient,
}

impl KinoScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = KinoClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is useful for testing or when you need custom client
    /// configuration (different base URL, no request delay).
    ///
    /// # Arguments
    /// * `client` - Pre-configured KinoClient instance
    pub fn with_client(client: KinoClient) -> Self {
        Self { client }
    }

    /// Collect the requested number of films from the top listing.
    ///
    /// Pages are fetched one at a time, in order, each card extracted in
    /// document order. The run terminates with `Done` when `count` records
    /// have been collected, or with `Stopped` when a page fetch fails or a
    /// page comes back without cards. A `Stopped` run still carries every
    /// record collected so far; partial and empty results are normal
    /// outcomes, not errors.
    ///
    /// # Arguments
    /// * `count` - Target record count, must be within [1, 150]
    ///
    /// # Returns
    /// * `Ok(TopFilms)` with at most `count` records and the terminal state
    /// * `Err(KinoError::InvalidCount)` if `count` is out of range, checked
    ///   before any network activity
    pub async fn top_films(&self, count: u32) -> Result<TopFilms> {
        validate_count(count)?;

        let mut films = Vec::new();
        let mut page: u32 = 1;

        let outcome = loop {
            let path = if page > 1 {
                format!("{}?page={}", TOP_PATH, page)
            } else {
                TOP_PATH.to_string()
            };

            let html = match self.client.fetch(&path).await {
                Ok(html) => html,
                Err(e) => {
                    warn!(page, error = %e, "page fetch failed, ending collection");
                    break CollectionOutcome::Stopped(StopReason::FetchFailure);
                }
            };

            let parsed = parse_top_page(&html, self.client.base_url())?;
            if parsed.card_count == 0 {
                debug!(page, "no cards on page, listing exhausted");
                break CollectionOutcome::Stopped(StopReason::NoMoreResults);
            }

            let mut reached_count = false;
            for film in parsed.films {
                films.push(film);
                if films.len() >= count as usize {
                    reached_count = true;
                    break;
                }
            }
            if reached_count {
                break CollectionOutcome::Done;
            }

            debug!(page, collected = films.len(), "page processed");
            page += 1;
        };

        films.truncate(count as usize);
        Ok(TopFilms { films, outcome })
    }
}

/// Check that a requested count lies within [`MIN_COUNT`, `MAX_COUNT`].
///
/// # Errors
/// Returns `KinoError::InvalidCount` for out-of-range values.
pub fn validate_count(count: u32) -> Result<()> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(KinoError::InvalidCount(count));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::ScraperConfig;

    fn card(title: &str, href: &str) -> String {
        format!(
            r##"<div class="p-itemevent-small">
                 <a class="link-holder_itemevent_small" href="{href}">
                   <span class="link__text">{title}</span>
                 </a>
                 <span class="p-rate-flag__text">8.5</span>
                 <div class="margin_top_5">
                   <a href="#">США</a><a href="#">1999</a><a href="#">драма</a>
                 </div>
               </div>"##
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    async fn scraper_for(server: &MockServer) -> KinoScraper {
        let config = ScraperConfig {
            base_url: server.uri(),
            request_delay: Duration::ZERO,
            timeout_secs: 5,
        };
        KinoScraper::with_client(KinoClient::with_config(config).unwrap())
    }

    #[test]
    fn test_validate_count_bounds() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(50).is_ok());
        assert!(validate_count(150).is_ok());
        assert!(matches!(validate_count(0), Err(KinoError::InvalidCount(0))));
        assert!(matches!(
            validate_count(151),
            Err(KinoError::InvalidCount(151))
        ));
    }

    #[tokio::test]
    async fn test_invalid_count_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
            .expect(0)
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        assert!(scraper.top_films(0).await.is_err());
        assert!(scraper.top_films(151).await.is_err());
        // the mock's expect(0) is verified when the server is dropped
    }

    #[tokio::test]
    async fn test_count_reached_mid_page() {
        let server = MockServer::start().await;
        let cards: Vec<String> = (1..=5).map(|i| card(&format!("Фильм {i}"), &format!("/f{i}/"))).collect();
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&cards)))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(3).await.unwrap();

        assert_eq!(result.outcome, CollectionOutcome::Done);
        assert_eq!(result.films.len(), 3);
        assert_eq!(result.films[0].title, "Фильм 1");
        assert_eq!(result.films[2].title, "Фильм 3");
    }

    #[tokio::test]
    async fn test_second_page_empty_stops_with_partial_result() {
        let server = MockServer::start().await;
        // Specific page-2 mock first: wiremock picks the first matching
        // mock in mount order
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
            .expect(1)
            .mount(&server)
            .await;
        let cards: Vec<String> = (1..=3).map(|i| card(&format!("Фильм {i}"), &format!("/f{i}/"))).collect();
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&cards)))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(5).await.unwrap();

        assert_eq!(
            result.outcome,
            CollectionOutcome::Stopped(StopReason::NoMoreResults)
        );
        assert_eq!(result.films.len(), 3);

        // A partial run still exports normally
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("kinomail_partial_{}.json", std::process::id()));
        let csv_path = dir.join(format!("kinomail_partial_{}.csv", std::process::id()));
        let xlsx_path = dir.join(format!("kinomail_partial_{}.xlsx", std::process::id()));

        crate::export::write_json(&result.films, &json_path).unwrap();
        crate::export::write_csv(&result.films, &csv_path).unwrap();
        crate::export::write_xlsx(&result.films, &xlsx_path).unwrap();

        let back: Vec<crate::types::Film> =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(back.len(), 3);
        let csv_lines = std::fs::read_to_string(&csv_path).unwrap().lines().count();
        assert_eq!(csv_lines, 4); // header + 3 rows
        assert!(std::fs::metadata(&xlsx_path).unwrap().len() > 0);

        for path in [&json_path, &csv_path, &xlsx_path] {
            std::fs::remove_file(path).ok();
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_stops_with_partial_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let cards: Vec<String> = (1..=2).map(|i| card(&format!("Фильм {i}"), &format!("/f{i}/"))).collect();
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&cards)))
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(10).await.unwrap();

        assert_eq!(
            result.outcome,
            CollectionOutcome::Stopped(StopReason::FetchFailure)
        );
        assert_eq!(result.films.len(), 2);
    }

    #[tokio::test]
    async fn test_first_fetch_failure_yields_empty_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(10).await.unwrap();

        assert_eq!(
            result.outcome,
            CollectionOutcome::Stopped(StopReason::FetchFailure)
        );
        assert!(result.films.is_empty());
    }

    #[tokio::test]
    async fn test_unusable_cards_do_not_end_pagination() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&[])))
            .expect(1)
            .mount(&server)
            .await;
        // Cards without a title: counted as cards, but none extract
        let broken =
            r##"<div class="p-itemevent-small"><a class="link-holder_itemevent_small" href="/x/"></a></div>"##;
        Mock::given(method("GET"))
            .and(path("/cinema/top/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&[broken.to_string()])))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(5).await.unwrap();

        assert_eq!(
            result.outcome,
            CollectionOutcome::Stopped(StopReason::NoMoreResults)
        );
        assert!(result.films.is_empty());
    }

    #[tokio::test]
    async fn test_collected_records_satisfy_invariants() {
        let server = MockServer::start().await;
        let cards: Vec<String> = (1..=4).map(|i| card(&format!("Фильм {i}"), &format!("/f{i}/"))).collect();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page(&cards)))
            .mount(&server)
            .await;

        let scraper = scraper_for(&server).await;
        let result = scraper.top_films(4).await.unwrap();

        assert_eq!(result.films.len(), 4);
        for film in &result.films {
            assert!(!film.title.is_empty());
            assert!(!film.url.is_empty());
            assert!(film.url.starts_with(&server.uri()));
            assert_eq!(film.director, "");
        }
    }
}
