//! JavaScript evaluation scripts
//!
//! In-page extraction sources for pagination detection, card-link
//! collection, detail-page fields and enrichment-site contacts. Each script
//! is a self-contained IIFE returning a JSON-shaped value that maps onto a
//! type in [`super::schema`].

/// Detect the total page count of the current search result.
///
/// The directory renders pagination inconsistently: sometimes as links with
/// `/page/N` targets, sometimes as numbered buttons. Taking the maximum of
/// both signals avoids undercounting on either rendering; with no signal at
/// all the result is 1.
pub const PAGE_COUNT_SCRIPT: &str = r#"
    (() => {
        const fromLinks = Array.from(document.querySelectorAll('a[href*="/page/"]'))
            .map(a => (a.getAttribute('href') || '').match(/\/page\/(\d+)/))
            .filter(Boolean)
            .map(m => parseInt(m[1], 10))
            .filter(n => Number.isFinite(n));

        const fromText = Array.from(document.querySelectorAll('a,button'))
            .map(el => (el.textContent || '').trim())
            .map(t => parseInt(t, 10))
            .filter(n => Number.isFinite(n));

        const maxLink = fromLinks.length ? Math.max(...fromLinks) : 1;
        const maxText = fromText.length ? Math.max(...fromText) : 1;
        return Math.max(maxLink, maxText, 1);
    })()
"#;

/// Collect unique anchor targets pointing at card detail pages.
///
/// A card link carries a `/firm/`, `/place/` or `/entity/` path segment and
/// stays on the directory's own host.
pub const CARD_LINKS_SCRIPT: &str = r#"
    (() => {
        const hrefs = Array.from(document.querySelectorAll('a'))
            .map(a => a.href)
            .filter(Boolean)
            .filter(u => /\/(firm|place|entity)\//.test(u) && u.includes('2gis.'));
        return Array.from(new Set(hrefs));
    })()
"#;

/// Click the "show phone" control when present.
///
/// Contacts are sometimes hidden behind a reveal button; matching is a
/// heuristic over button captions. Returns whether a control was activated
/// so the caller knows to wait for the revealed content to render.
pub const REVEAL_PHONE_SCRIPT: &str = r#"
    (() => {
        const button = Array.from(document.querySelectorAll('button'))
            .find(b => /показ(ать|ыть).+телефон/i.test(b.innerText || ''));
        if (!button) return false;
        button.click();
        return true;
    })()
"#;

/// Extract the structured contact fields of a card detail page.
///
/// Field strategies, in order:
/// - name: `h1`, else the header test-id block
/// - address: address test-id block, else the microdata street address
/// - phones: `tel:` hrefs with the scheme stripped
/// - website: first outbound link that is neither the directory itself nor a
///   known social/messenger redirect, or null
/// - telegram: all `t.me` links
/// - email: `mailto:` hrefs with the scheme stripped
pub const CARD_DETAILS_SCRIPT: &str = r#"
    (() => {
        const text = el => (el ? el.textContent.trim() : '');
        const name =
            text(document.querySelector('h1')) ||
            text(document.querySelector('[data-testid="header"]'));
        const address =
            text(document.querySelector('[data-testid="address"]')) ||
            text(document.querySelector('[itemprop="streetAddress"]')) ||
            '';

        const phones = Array.from(document.querySelectorAll('a[href^="tel:"]'))
            .map(a => a.getAttribute('href') || '')
            .map(h => h.replace(/^tel:/, ''))
            .filter(Boolean);

        const links = Array.from(document.querySelectorAll('a[href^="http"]'))
            .map(a => a.href);

        const website =
            links.find(u =>
                !/2gis\./i.test(u) &&
                !/yandex\./i.test(u) &&
                !/vk\.com\/share/i.test(u) &&
                !/wa\.me/i.test(u) &&
                !/t\.me/i.test(u)
            ) || null;

        const telegram = links.filter(u => /t\.me\//i.test(u));
        const email = Array.from(document.querySelectorAll('a[href^="mailto:"]'))
            .map(a => (a.getAttribute('href') || '').replace(/^mailto:/, ''))
            .filter(Boolean);

        return { name, address, phones, website, email, telegram };
    })()
"#;

/// Harvest mail and messaging handles from an entity's own website.
pub const SITE_CONTACTS_SCRIPT: &str = r#"
    (() => {
        const hrefs = Array.from(document.querySelectorAll('a')).map(a => a.href);
        const email = hrefs
            .filter(h => /^mailto:/i.test(h))
            .map(h => h.replace(/^mailto:/i, ''))
            .filter(Boolean);
        const telegram = hrefs.filter(h => /t\.me\//i.test(h));
        return { email, telegram };
    })()
"#;
