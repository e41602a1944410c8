use kinomail_core::{CollectionOutcome, KinoScraper};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let scraper = KinoScraper::new()?;

    println!("Collecting the top 10 films from kino.mail.ru...\n");

    let result = scraper.top_films(10).await?;

    for (i, film) in result.films.iter().enumerate() {
        println!(
            "  {}. {} ({}) [{}] - {}",
            i + 1,
            film.title,
            if film.year.is_empty() { "?" } else { &film.year },
            film.rating,
            film.url
        );
    }

    match result.outcome {
        CollectionOutcome::Done => println!("\nCollected all {} films.", result.films.len()),
        CollectionOutcome::Stopped(reason) => {
            println!(
                "\nStopped early ({:?}) with {} films.",
                reason,
                result.films.len()
            );
        }
    }

    Ok(())
}
