//! Tests for URL canonicalization, card identity derivation and the
//! first-seen dedup behavior of the listing index.

use dirscrape::{CardKind, ListingIndex, canonicalize_url, extract_card_id};

#[test]
fn canonicalize_strips_query_fragment_and_trailing_slash() {
    assert_eq!(
        canonicalize_url("https://2gis.ru/spb/firm/123?ref=x#map"),
        "https://2gis.ru/spb/firm/123"
    );
    assert_eq!(
        canonicalize_url("https://2gis.ru/spb/place/456/"),
        "https://2gis.ru/spb/place/456"
    );
}

#[test]
fn canonicalize_is_idempotent() {
    let urls = [
        "https://2gis.ru/spb/firm/123?ref=x#map",
        "https://2gis.ru/spb/place/456/",
        "https://example.com/",
        "https://example.com/a/b?c=d",
    ];
    for url in urls {
        let once = canonicalize_url(url);
        assert_eq!(canonicalize_url(&once), once, "not idempotent for {url}");
    }
}

#[test]
fn canonicalize_passes_through_unparseable_input() {
    assert_eq!(canonicalize_url("not a url"), "not a url");
    assert_eq!(canonicalize_url(""), "");
}

#[test]
fn identifier_is_stable_across_url_variants() {
    let variants = [
        "https://2gis.ru/spb/firm/123",
        "https://2gis.ru/spb/firm/123?ref=abc",
        "https://2gis.ru/spb/firm/123#reviews",
        "https://2gis.ru/spb/firm/123/",
    ];
    let ids: Vec<_> = variants
        .iter()
        .map(|u| extract_card_id(u).expect("card id"))
        .collect();
    for id in &ids {
        assert_eq!(id, &ids[0]);
    }
    assert_eq!(ids[0].to_string(), "firm:123");
}

#[test]
fn identifier_kinds_parse_case_insensitively() {
    let firm = extract_card_id("https://2gis.ru/spb/FIRM/70000001006745431").unwrap();
    assert_eq!(firm.kind(), CardKind::Firm);
    assert_eq!(firm.token(), "70000001006745431");

    let place = extract_card_id("https://2gis.ru/spb/place/456").unwrap();
    assert_eq!(place.kind(), CardKind::Place);

    let entity = extract_card_id("https://2gis.ru/spb/entity/789").unwrap();
    assert_eq!(entity.kind(), CardKind::Entity);
}

#[test]
fn non_card_urls_yield_no_identifier() {
    assert!(extract_card_id("https://2gis.ru/spb/search/flowers").is_none());
    assert!(extract_card_id("https://example.com/firmware/123").is_none());
    assert!(extract_card_id("garbage").is_none());
}

#[test]
fn listing_index_keeps_first_seen_url() {
    let mut index = ListingIndex::new();

    let first = "https://2gis.ru/spb/firm/123?ref=x";
    let id = extract_card_id(first).unwrap();
    assert!(index.insert(id.clone(), canonicalize_url(first)));

    // A later page links the same firm under a different variant.
    let later = "https://2gis.ru/spb/firm/123";
    assert!(!index.insert(extract_card_id(later).unwrap(), canonicalize_url(later)));

    assert_eq!(index.len(), 1);
    let (_, stored) = index.iter().next().unwrap();
    assert_eq!(stored, "https://2gis.ru/spb/firm/123");
    assert!(index.contains(&id));
}

#[test]
fn listing_index_dedups_across_pages_in_discovery_order() {
    // Pages 1-3 each link the same three hrefs; two distinct entities.
    let page_links = [
        "https://2gis.ru/spb/firm/123?ref=x",
        "https://2gis.ru/spb/firm/123",
        "https://2gis.ru/spb/place/456/",
    ];

    let mut index = ListingIndex::new();
    for _page in 0..3 {
        for link in page_links {
            if let Some(id) = extract_card_id(link) {
                index.insert(id, canonicalize_url(link));
            }
        }
    }

    assert_eq!(index.len(), 2);
    let urls = index.into_urls();
    assert_eq!(
        urls,
        vec![
            "https://2gis.ru/spb/firm/123".to_string(),
            "https://2gis.ru/spb/place/456".to_string(),
        ]
    );
}
