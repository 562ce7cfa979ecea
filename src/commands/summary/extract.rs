use scraper::{ElementRef, Html};

use super::PageSelectors;
use crate::error::SummaryError;

pub(super) fn find_content_block<'a>(
    document: &'a Html,
    selectors: &PageSelectors,
) -> Result<ElementRef<'a>, SummaryError> {
    document
        .select(&selectors.content_block)
        .next()
        .ok_or(SummaryError::ContentBlockNotFound)
}

/// Picks the first paragraph carrying bold text.
///
/// Ledes open with the bolded subject, so this skips hatnotes and
/// infobox captions that come before the real summary.
pub(super) fn select_summary(
    content: ElementRef<'_>,
    selectors: &PageSelectors,
) -> Result<String, SummaryError> {
    let paragraph = content
        .select(&selectors.paragraph)
        .find(|paragraph| paragraph.select(&selectors.bold).next().is_some())
        .ok_or(SummaryError::SummaryNotFound)?;

    let text = flatten_text(paragraph);
    if text.trim().is_empty() {
        return Err(SummaryError::SummaryNotFound);
    }
    Ok(text)
}

pub(super) fn flatten_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}
