//! Error types for the chain scraper.

use reqwest::StatusCode;

/// Errors that can occur while fetching or reshaping an option chain.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// DNS or socket-level failure reaching the site.
    #[error("connection failure: {0}")]
    Connection(#[source] reqwest::Error),
    /// The request exceeded the client timeout.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),
    /// Any other transport-level failure.
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    /// The site answered with a non-success status code.
    #[error("unexpected status {status}")]
    HttpStatus { status: StatusCode },
    /// The configured base URL does not parse.
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    /// No option table could be located in the page.
    #[error("option table not found in page")]
    TableMissing,
    /// The scraped cell count does not divide into fixed-width rows.
    #[error("cell count {cells} is not a multiple of row width {width}")]
    ShapeMismatch { cells: usize, width: usize },
    /// A page added no rows to the accumulated table.
    #[error("page {page} added no rows; pagination stalled")]
    PaginationStall { page: u32 },
    /// The accumulated row count shrank between pages.
    #[error("row count dropped from {before} to {after} on page {page}")]
    PaginationRegression {
        page: u32,
        before: usize,
        after: usize,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(err)
        } else if err.is_connect() {
            Error::Connection(err)
        } else {
            Error::Http(err)
        }
    }
}
