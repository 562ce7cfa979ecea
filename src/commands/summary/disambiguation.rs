use scraper::ElementRef;
use tracing::debug;

use super::extract::flatten_text;
use super::{PageSelectors, ResolvedSummary, WIKI_PATH_PREFIX};
use crate::model::{ArticleListing, ListingEntry};
use crate::util::{article_url, display_title, invocation_line};

fn disambiguation_header(display: &str) -> String {
    format!("{display} may refer to:")
}

/// Literal substring test; phrasing variants are not detected.
pub(super) fn is_disambiguation(title: &str, summary: &str) -> bool {
    summary.contains(&disambiguation_header(&display_title(title)))
}

/// Replaces a "<title> may refer to:" summary with the page's list of candidates.
///
/// Leaves the summary untouched when the phrase is absent or the page has no
/// list items.
pub(super) fn resolve_disambiguation(
    title: &str,
    summary: String,
    content: ElementRef<'_>,
    selectors: &PageSelectors,
    base_url: &str,
) -> ResolvedSummary {
    if !is_disambiguation(title, &summary) {
        return ResolvedSummary {
            text: summary,
            listing: ArticleListing::default(),
        };
    }

    let listing = collect_listing(content, selectors);
    if listing.is_empty() {
        debug!(title = %title, "disambiguation phrase without list items, keeping summary");
        return ResolvedSummary {
            text: summary,
            listing,
        };
    }

    ResolvedSummary {
        text: render_listing(title, &listing, base_url),
        listing,
    }
}

pub(super) fn collect_listing(content: ElementRef<'_>, selectors: &PageSelectors) -> ArticleListing {
    let entries = content
        .select(&selectors.list_item)
        .map(|item| ListingEntry {
            label: flatten_text(item).trim().to_string(),
            target: link_target(item, selectors),
        })
        .collect();

    ArticleListing { entries }
}

fn link_target(item: ElementRef<'_>, selectors: &PageSelectors) -> Option<String> {
    item.select(&selectors.link)
        .filter_map(|link| link.value().attr("href"))
        .find_map(|href| href.strip_prefix(WIKI_PATH_PREFIX))
        .filter(|target| !target.is_empty())
        .map(str::to_string)
}

pub(super) fn render_listing(title: &str, listing: &ArticleListing, base_url: &str) -> String {
    let mut rendered = disambiguation_header(&display_title(title));

    for entry in &listing.entries {
        rendered.push_str("\n- ");
        rendered.push_str(&entry.label);
        if let Some(target) = &entry.target {
            rendered.push_str("\n  ");
            rendered.push_str(&article_url(base_url, target));
            rendered.push_str("\n  ");
            rendered.push_str(&invocation_line(target));
        }
    }

    rendered
}
