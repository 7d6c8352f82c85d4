//! Card identity and listing deduplication.
//!
//! A business card on the directory is reachable through many URL variants
//! (query strings, fragments, trailing slashes). Identity is derived from the
//! `/{firm|place|entity}/{token}` path segment, so two variants that share a
//! `(kind, token)` pair denote the same real-world entity.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// Matches the detail-page path segment, e.g. `/firm/70000001006745431`.
static CARD_PATH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)/(firm|place|entity)/([^/?#]+)").expect("card path regex must compile")
});

/// The kind of directory entity a card describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    Firm,
    Place,
    Entity,
}

impl CardKind {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "firm" => Some(Self::Firm),
            "place" => Some(Self::Place),
            "entity" => Some(Self::Entity),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firm => "firm",
            Self::Place => "place",
            Self::Entity => "entity",
        }
    }
}

/// Canonical dedup key for a card, stable across URL variants.
///
/// Immutable once derived; used purely for equality during listing dedup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardIdentifier {
    kind: CardKind,
    token: String,
}

impl CardIdentifier {
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.token)
    }
}

/// Canonicalize a URL: strip query and fragment, drop any trailing slash.
///
/// Idempotent. Unparseable input is returned as-is so a malformed href never
/// aborts link collection; it simply won't yield a card identifier.
#[must_use]
pub fn canonicalize_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.set_query(None);
            parsed.set_fragment(None);
            parsed.to_string().trim_end_matches('/').to_string()
        }
        Err(_) => raw.to_string(),
    }
}

/// Derive the card identifier from any URL variant of a detail page.
///
/// Returns `None` for URLs that don't contain a card path segment.
#[must_use]
pub fn extract_card_id(url: &str) -> Option<CardIdentifier> {
    let canonical = canonicalize_url(url);
    let caps = CARD_PATH_RE.captures(&canonical)?;
    let kind = CardKind::parse(caps.get(1)?.as_str())?;
    let token = caps.get(2)?.as_str().to_string();
    Some(CardIdentifier { kind, token })
}

/// Ordered, first-seen-wins mapping from card identifier to canonical URL.
///
/// Built incrementally while paging through listing results. Insertion order
/// reflects first-discovery order; a later page's URL for an already-seen
/// identifier never replaces the stored one.
#[derive(Debug, Default)]
pub struct ListingIndex {
    seen: HashSet<CardIdentifier>,
    cards: Vec<(CardIdentifier, String)>,
}

impl ListingIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card under its first-seen canonical URL.
    ///
    /// Returns `true` when the identifier was new, `false` when it had
    /// already been discovered (the stored URL is left untouched).
    pub fn insert(&mut self, id: CardIdentifier, canonical_url: String) -> bool {
        if !self.seen.insert(id.clone()) {
            return false;
        }
        self.cards.push((id, canonical_url));
        true
    }

    #[must_use]
    pub fn contains(&self, id: &CardIdentifier) -> bool {
        self.seen.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardIdentifier, &str)> {
        self.cards.iter().map(|(id, url)| (id, url.as_str()))
    }

    /// Consume the index into the ordered URL sequence for the detail phase.
    #[must_use]
    pub fn into_urls(self) -> Vec<String> {
        self.cards.into_iter().map(|(_, url)| url).collect()
    }
}
