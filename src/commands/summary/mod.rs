//! Article summary pipeline: fetch a page, pick its lede, expand
//! disambiguation listings, strip citation markers and reflow for display.

use anyhow::{Result, anyhow};
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::error::SummaryError;
use crate::model::ArticleListing;

mod disambiguation;
mod extract;
mod fetch;
mod references;
mod run;
mod wrap;

pub use run::run;

use disambiguation::resolve_disambiguation;
use extract::{find_content_block, select_summary};
use references::ReferenceStripper;

/// Article body container: `<div class="mw-content-ltr mw-parser-output" ...>`.
const CONTENT_BLOCK_SELECTOR: &str = "div.mw-content-ltr.mw-parser-output";
const WIKI_PATH_PREFIX: &str = "/wiki/";

/// Compiled CSS selectors used to walk an article document.
struct PageSelectors {
    content_block: Selector,
    paragraph: Selector,
    bold: Selector,
    list_item: Selector,
    link: Selector,
}

impl PageSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            content_block: parse_selector(CONTENT_BLOCK_SELECTOR)?,
            paragraph: parse_selector("p")?,
            bold: parse_selector("b")?,
            list_item: parse_selector("li")?,
            link: parse_selector("a[href]")?,
        })
    }
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|err| anyhow!("failed to compile selector {raw:?}: {err}"))
}

#[derive(Debug, Clone)]
struct ResolvedSummary {
    text: String,
    /// Empty unless the page was expanded as a disambiguation listing.
    listing: ArticleListing,
}

/// Runs the extraction pipeline over an already parsed article.
///
/// `title` must be in canonical form (see [`crate::util::normalize_title`]).
fn summarize(
    document: &Html,
    title: &str,
    base_url: &str,
    selectors: &PageSelectors,
    stripper: &ReferenceStripper,
) -> Result<ResolvedSummary, SummaryError> {
    let content = find_content_block(document, selectors)?;
    let summary = select_summary(content, selectors)?;
    debug!(chars = summary.chars().count(), "selected summary paragraph");

    let resolved = resolve_disambiguation(title, summary, content, selectors, base_url);
    if !resolved.listing.is_empty() {
        info!(entries = resolved.listing.len(), "expanded disambiguation listing");
    }

    Ok(ResolvedSummary {
        text: stripper.strip(&resolved.text),
        listing: resolved.listing,
    })
}
