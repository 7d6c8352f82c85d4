// Directory contact scraper CLI.
//
// Usage: dirscrape [city-slug] [query] [record-limit]
//   city-slug     directory city slug (spb, moscow, ekb, ...), default: spb
//   query         search query, default built-in
//   record-limit  max cards to visit, 0 or omitted = unbounded

use log::info;

#[tokio::main]
async fn main() {
    // The tracing-log bridge also captures the `log` macros used across the
    // crate, so one subscriber covers everything.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let city_slug = args.next();
    let query = args.next();
    let record_limit = args
        .next()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|limit| *limit > 0);

    let mut builder = dirscrape::ScrapeConfig::builder().record_limit(record_limit);
    if let Some(city_slug) = city_slug {
        builder = builder.city_slug(city_slug);
    }
    if let Some(query) = query {
        builder = builder.query(query);
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid arguments: {e:#}");
            std::process::exit(1);
        }
    };

    info!(
        "Scraping '{}' in '{}' (limit: {})",
        config.query(),
        config.city_slug(),
        config
            .record_limit()
            .map_or_else(|| "none".to_string(), |l| l.to_string())
    );

    if let Err(e) = dirscrape::scrape(config).await {
        eprintln!("Scrape failed: {e}");
        std::process::exit(1);
    }
}
