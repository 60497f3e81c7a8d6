//! HTTP client and pagination driver for the option chain pages.

use std::cmp::Ordering;
use std::time::Duration;

use url::Url;

use crate::error::Error;
use crate::grid::{ChainGrid, OptionChain};
use crate::page::ChainDocument;
use crate::query::ChainQuery;
use crate::user_agent::get_user_agent;

const DEFAULT_BASE_URL: &str = "http://www.nasdaq.com";

/// Client fetching option chain pages from the Nasdaq website.
///
/// Sends requests with browser-like headers and a randomized user agent,
/// with a 30-second timeout per request. Fetches are sequential; one
/// request is in flight at a time.
pub struct ChainClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ChainClient {
    /// Creates a client pointing at the production Nasdaq site.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { base_url, http })
    }

    /// Fetches every page of the chain described by `query` and splits
    /// the accumulated grid into calls and puts.
    ///
    /// The page count comes from the first page's pager link; chains
    /// short enough to render no pager are a single page. A page that
    /// fails to grow the accumulated table aborts the scrape with
    /// [`Error::PaginationStall`] rather than looping on stale data.
    pub async fn chain(&self, query: &ChainQuery) -> Result<OptionChain, Error> {
        let mut grid = ChainGrid::default();
        let mut total_pages = 1u32; // corrected after the first fetch
        let mut page = 1u32;
        let mut prev_rows = 0usize;

        while page <= total_pages {
            let url = query.page_url(&self.base_url, page);
            let html = self.fetch_page(&url).await?;
            let doc = ChainDocument::parse(&html);

            if page == 1 {
                total_pages = doc.page_count();
                tracing::debug!(ticker = %query.ticker, total_pages, "parsed pager");
            }

            let batch = ChainGrid::from_cells(doc.option_cells()?)?;
            grid.extend(batch);

            match grid.len().cmp(&prev_rows) {
                Ordering::Greater => {
                    tracing::debug!(page, rows = grid.len(), "accumulated chain page");
                    prev_rows = grid.len();
                    page += 1;
                }
                Ordering::Equal => {
                    tracing::error!(page, rows = grid.len(), "page added no rows");
                    return Err(Error::PaginationStall { page });
                }
                // Appending cannot shrink the grid; kept as an invariant check.
                Ordering::Less => {
                    return Err(Error::PaginationRegression {
                        page,
                        before: prev_rows,
                        after: grid.len(),
                    });
                }
            }
        }

        Ok(grid.split())
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, Error> {
        tracing::debug!(%url, "fetching chain page");
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "text/html,application/xhtml+xml")
            .header("accept-language", "en-US,en;q=0.9")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%url, %status, "chain page request failed");
            return Err(Error::HttpStatus { status });
        }

        Ok(resp.text().await?)
    }
}
