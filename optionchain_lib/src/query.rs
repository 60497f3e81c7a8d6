//! Query builder for the option chain pages: venue, moneyness, expiration
//! category, expiration cycle, and page number.

use std::fmt;
use std::str::FromStr;

use url::Url;

/// Moneyness filter for the chain listing.
///
/// `Near` is the site default and is encoded by omitting the `money`
/// parameter entirely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Moneyness {
    All,
    In,
    Out,
    #[default]
    Near,
}

impl fmt::Display for Moneyness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Moneyness::All => "all",
            Moneyness::In => "in",
            Moneyness::Out => "out",
            Moneyness::Near => "near",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Moneyness {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Moneyness::All),
            "in" => Ok(Moneyness::In),
            "out" => Ok(Moneyness::Out),
            "near" => Ok(Moneyness::Near),
            _ => Err(()),
        }
    }
}

/// Options exchange to quote from, encoded into the `excode` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Market {
    /// Composite quote across venues.
    Composite,
    /// Chicago Board Options Exchange. This is the default.
    #[default]
    Cbo,
    /// American Options Exchange.
    Aoe,
    /// New York Options Exchange.
    Nyo,
    /// Philadelphia Options Exchange.
    Pho,
    /// Montreal Options Exchange.
    Moe,
    /// Boston Options Exchange.
    Box,
    /// International Securities Exchange.
    Ise,
    /// Bats Exchange Options Market.
    Bto,
    /// NASDAQ Options.
    Nso,
    /// C2 (Chicago) Options Exchange.
    C2o,
    /// NASDAQ OMX BX Options Exchange.
    Bxo,
    /// MIAX.
    Miax,
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Market::Composite => "composite",
            Market::Cbo => "cbo",
            Market::Aoe => "aoe",
            Market::Nyo => "nyo",
            Market::Pho => "pho",
            Market::Moe => "moe",
            Market::Box => "box",
            Market::Ise => "ise",
            Market::Bto => "bto",
            Market::Nso => "nso",
            Market::C2o => "c2o",
            Market::Bxo => "bxo",
            Market::Miax => "miax",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Market {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "composite" => Ok(Market::Composite),
            "cbo" => Ok(Market::Cbo),
            "aoe" => Ok(Market::Aoe),
            "nyo" => Ok(Market::Nyo),
            "pho" => Ok(Market::Pho),
            "moe" => Ok(Market::Moe),
            "box" => Ok(Market::Box),
            "ise" => Ok(Market::Ise),
            "bto" => Ok(Market::Bto),
            "nso" => Ok(Market::Nso),
            "c2o" => Ok(Market::C2o),
            "bxo" => Ok(Market::Bxo),
            "miax" => Ok(Market::Miax),
            _ => Err(()),
        }
    }
}

/// Expiration category, encoded into the `expir` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Expiry {
    /// Weekly options.
    Week,
    /// Monthly (standard) options. This is the default.
    #[default]
    Stand,
    /// Quarterly options.
    Quart,
    /// Credit Event Binary Options.
    Cebo,
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Expiry::Week => "week",
            Expiry::Stand => "stand",
            Expiry::Quart => "quart",
            Expiry::Cebo => "cebo",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Expiry {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(Expiry::Week),
            "stand" => Ok(Expiry::Stand),
            "quart" => Ok(Expiry::Quart),
            "cebo" => Ok(Expiry::Cebo),
            _ => Err(()),
        }
    }
}

/// Parameters for one scrape session. Immutable once constructed; the
/// page number varies per fetch and is passed to [`ChainQuery::page_url`].
#[derive(Clone, Debug)]
pub struct ChainQuery {
    /// Ticker of the underlying. Not validated; an unknown ticker shows
    /// up downstream as a page without an option table.
    pub ticker: String,
    pub market: Market,
    pub money: Moneyness,
    pub expiry: Expiry,
    /// Which upcoming expiration cycle to fetch (0 = front cycle).
    pub nearby: u32,
}

impl ChainQuery {
    pub fn new(ticker: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            market: Market::default(),
            money: Moneyness::default(),
            expiry: Expiry::default(),
            nearby: 0,
        }
    }

    pub fn with_market(mut self, market: Market) -> Self {
        self.market = market;
        self
    }

    pub fn with_moneyness(mut self, money: Moneyness) -> Self {
        self.money = money;
        self
    }

    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expiry = expiry;
        self
    }

    pub fn with_nearby(mut self, nearby: u32) -> Self {
        self.nearby = nearby;
        self
    }

    /// Builds the URL for one page of the chain (`page` is 1-indexed).
    pub fn page_url(&self, base: &Url, page: u32) -> Url {
        let mut url = base.clone();
        url.set_path(&format!("/symbol/{}/option-chain", self.ticker));
        url.query_pairs_mut()
            .append_pair("excode", &self.market.to_string());
        if self.money != Moneyness::Near {
            url.query_pairs_mut()
                .append_pair("money", &self.money.to_string());
        }
        url.query_pairs_mut()
            .append_pair("expir", &self.expiry.to_string())
            .append_pair("dateindex", &self.nearby.to_string())
            .append_pair("page", &page.to_string());
        url
    }
}
