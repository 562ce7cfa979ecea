use serde::Serialize;

/// One candidate article on a disambiguation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingEntry {
    pub label: String,
    /// Canonical title taken from the entry's `/wiki/` link, underscores intact.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleListing {
    pub entries: Vec<ListingEntry>,
}

impl ArticleListing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub title: String,
    pub url: String,
    pub summary: String,
    pub disambiguation: bool,
    pub entries: Vec<ListingEntry>,
}
