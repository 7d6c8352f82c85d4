//! Tests for the configuration builder, defaults and derived URLs.

use dirscrape::ScrapeConfig;
use dirscrape::scrape_engine::page_urls;
use std::path::PathBuf;

#[test]
fn builder_defaults_match_the_stock_run() {
    let config = ScrapeConfig::builder().build().unwrap();

    assert_eq!(config.city_slug(), "spb");
    assert_eq!(config.query(), "ритуальные услуги");
    assert_eq!(config.record_limit(), None);
    assert!(config.headless());
    assert_eq!(config.page_load_timeout_secs(), 60);
    assert_eq!(config.enrichment_timeout_secs(), 20);
    assert_eq!(config.scroll_budget_ms(), 45_000);
    assert_eq!(config.scroll_pause_ms(), 600);
}

#[test]
fn search_url_encodes_the_query() {
    let config = ScrapeConfig::builder()
        .city_slug("moscow")
        .query("ритуальные услуги")
        .build()
        .unwrap();
    assert_eq!(
        config.search_url(),
        "https://2gis.ru/moscow/search/%D1%80%D0%B8%D1%82%D1%83%D0%B0%D0%BB%D1%8C%D0%BD%D1%8B%D0%B5%20%D1%83%D1%81%D0%BB%D1%83%D0%B3%D0%B8"
    );
}

#[test]
fn output_path_is_named_after_the_city() {
    let config = ScrapeConfig::builder()
        .city_slug("ekb")
        .output_dir(PathBuf::from("/tmp/run"))
        .build()
        .unwrap();
    assert_eq!(config.output_path(), PathBuf::from("/tmp/run/out_ekb.csv"));
}

#[test]
fn zero_record_limit_means_unbounded() {
    let config = ScrapeConfig::builder()
        .record_limit(Some(0))
        .build()
        .unwrap();
    assert_eq!(config.record_limit(), None);

    let config = ScrapeConfig::builder()
        .record_limit(Some(25))
        .build()
        .unwrap();
    assert_eq!(config.record_limit(), Some(25));
}

#[test]
fn builder_rejects_invalid_city_slugs() {
    assert!(ScrapeConfig::builder().city_slug("").build().is_err());
    assert!(ScrapeConfig::builder().city_slug("a/b").build().is_err());
    assert!(ScrapeConfig::builder().city_slug("spb ").build().is_ok());
    assert!(ScrapeConfig::builder().city_slug("nnov").build().is_ok());
}

#[test]
fn builder_rejects_empty_queries() {
    assert!(ScrapeConfig::builder().query("  ").build().is_err());
}

#[test]
fn listing_page_urls_use_primary_and_fallback_forms() {
    let search = "https://2gis.ru/spb/search/flowers";

    let (primary, fallback) = page_urls(search, 1);
    assert_eq!(primary, search);
    assert_eq!(fallback, "https://2gis.ru/spb/search/flowers?page=1");

    let (primary, fallback) = page_urls(search, 3);
    assert_eq!(primary, "https://2gis.ru/spb/search/flowers/page/3");
    assert_eq!(fallback, "https://2gis.ru/spb/search/flowers?page=3");
}
