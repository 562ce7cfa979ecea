use thiserror::Error;

/// Failures reported by the summary pipeline and its fetch collaborator.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("page title must not be empty")]
    EmptyTitle,

    #[error("failed to find article content block")]
    ContentBlockNotFound,

    #[error("failed to find summary paragraph")]
    SummaryNotFound,

    #[error("page not found")]
    PageNotFound,

    #[error("received non-200 response code: {0}")]
    UnexpectedStatus(u16),

    #[error("failed to fetch page: {0}")]
    Transport(#[from] reqwest::Error),
}
