//! Tests for record construction and the set-union enrichment merge.

use dirscrape::scrape_engine::merge_unique;
use dirscrape::{CardDetails, Record, SiteContacts};

#[test]
fn record_dedups_collections_on_construction() {
    let details = CardDetails {
        name: "Shop".to_string(),
        address: String::new(),
        phones: vec![
            "+78120000000".to_string(),
            "+78120000000".to_string(),
            String::new(),
        ],
        website: Some(String::new()),
        email: vec!["info@x.com".to_string(), "info@x.com".to_string()],
        telegram: Vec::new(),
    };
    let record = Record::from_details(details, "https://2gis.ru/spb/firm/1");

    assert_eq!(record.phones, vec!["+78120000000"]);
    assert_eq!(record.email, vec!["info@x.com"]);
    // An empty website string means no website.
    assert_eq!(record.website, None);
}

#[test]
fn enrichment_merge_is_a_set_union() {
    let details = CardDetails {
        email: vec!["info@x.com".to_string()],
        website: Some("https://x.com".to_string()),
        ..CardDetails::default()
    };
    let mut record = Record::from_details(details, "https://2gis.ru/spb/firm/1");

    let harvested = SiteContacts {
        email: vec!["info@x.com".to_string(), "sales@x.com".to_string()],
        telegram: vec!["https://t.me/xcom".to_string()],
    };

    record.merge_site_contacts(harvested.clone());
    assert_eq!(record.email, vec!["info@x.com", "sales@x.com"]);
    assert_eq!(record.telegram, vec!["https://t.me/xcom"]);

    // Applying the same source data again adds nothing.
    record.merge_site_contacts(harvested);
    assert_eq!(record.email, vec!["info@x.com", "sales@x.com"]);
    assert_eq!(record.telegram, vec!["https://t.me/xcom"]);
}

#[test]
fn merge_unique_preserves_first_seen_order() {
    let mut values = vec!["b".to_string(), "a".to_string()];
    merge_unique(
        &mut values,
        vec!["a".to_string(), "c".to_string(), "b".to_string()],
    );
    assert_eq!(values, vec!["b", "a", "c"]);
}

#[test]
fn merge_unique_skips_empty_strings() {
    let mut values: Vec<String> = Vec::new();
    merge_unique(&mut values, vec![String::new(), "x".to_string()]);
    assert_eq!(values, vec!["x"]);
}

#[test]
fn record_limit_caps_the_emitted_count() {
    use dirscrape::scrape_engine::effective_target;

    assert_eq!(effective_target(None, 42), 42);
    assert_eq!(effective_target(Some(10), 42), 10);
    assert_eq!(effective_target(Some(100), 42), 42);
    assert_eq!(effective_target(Some(10), 0), 0);
}

#[test]
fn empty_details_still_yield_a_record() {
    let record = Record::from_details(CardDetails::default(), "https://2gis.ru/spb/firm/9");
    assert!(record.name.is_empty());
    assert!(record.phones.is_empty());
    assert_eq!(record.website, None);
    assert_eq!(record.source_url, "https://2gis.ru/spb/firm/9");
}
