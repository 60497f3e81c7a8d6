//! Scraper for the legacy Nasdaq option chain pages.
//!
//! Fetches the chain table for one underlying, walks the pager, reshapes
//! the scraped cells into a 16-column grid, and splits it into a calls
//! table and a puts table keyed by strike.

mod client;
mod error;
mod grid;
mod page;
mod query;
mod user_agent;

pub use self::client::ChainClient;
pub use self::error::Error;
pub use self::grid::{ChainGrid, OptionChain, Quote, SideTable, HEADERS, ROW_WIDTH, STRIKE_COL};
pub use self::page::ChainDocument;
pub use self::query::{ChainQuery, Expiry, Market, Moneyness};
