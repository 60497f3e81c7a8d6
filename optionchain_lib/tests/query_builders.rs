use optionchain_lib::{ChainQuery, Expiry, Market, Moneyness};
use url::Url;

fn base_url() -> Url {
    Url::parse("http://www.nasdaq.com").unwrap()
}

#[test]
fn chain_query_defaults() {
    let url = ChainQuery::new("vxx").page_url(&base_url(), 1);
    assert_eq!(url.path(), "/symbol/vxx/option-chain");
    let query = url.query().unwrap();
    assert!(query.contains("excode=cbo"));
    assert!(query.contains("expir=stand"));
    assert!(query.contains("dateindex=0"));
    assert!(query.contains("page=1"));
    // Near-the-money is the site default and sends no money parameter.
    assert!(!query.contains("money="));
}

#[test]
fn chain_query_with_moneyness() {
    let url = ChainQuery::new("vxx")
        .with_moneyness(Moneyness::In)
        .page_url(&base_url(), 1);
    assert!(url.query().unwrap().contains("money=in"));

    let url = ChainQuery::new("vxx")
        .with_moneyness(Moneyness::All)
        .page_url(&base_url(), 1);
    assert!(url.query().unwrap().contains("money=all"));
}

#[test]
fn chain_query_with_market_and_expiry() {
    let url = ChainQuery::new("aapl")
        .with_market(Market::Miax)
        .with_expiry(Expiry::Week)
        .page_url(&base_url(), 1);
    let query = url.query().unwrap();
    assert!(query.contains("excode=miax"));
    assert!(query.contains("expir=week"));
}

#[test]
fn chain_query_with_nearby_and_page() {
    let url = ChainQuery::new("vxx")
        .with_nearby(3)
        .page_url(&base_url(), 7);
    let query = url.query().unwrap();
    assert!(query.contains("dateindex=3"));
    assert!(query.contains("page=7"));
}

#[test]
fn chain_query_is_deterministic() {
    let query = ChainQuery::new("spy")
        .with_market(Market::Composite)
        .with_moneyness(Moneyness::Out)
        .with_expiry(Expiry::Quart)
        .with_nearby(2);
    let first = query.page_url(&base_url(), 4);
    let second = query.page_url(&base_url(), 4);
    assert_eq!(first, second);
}

#[test]
fn enum_round_trips_through_strings() {
    for market in ["composite", "cbo", "aoe", "box", "ise", "miax"] {
        assert_eq!(market.parse::<Market>().unwrap().to_string(), market);
    }
    for expiry in ["week", "stand", "quart", "cebo"] {
        assert_eq!(expiry.parse::<Expiry>().unwrap().to_string(), expiry);
    }
    assert!("nyse".parse::<Market>().is_err());
    assert!("monthly".parse::<Expiry>().is_err());
}

#[test]
fn enum_parsing_ignores_case() {
    assert_eq!("CBO".parse::<Market>().unwrap(), Market::Cbo);
    assert_eq!("Miax".parse::<Market>().unwrap(), Market::Miax);
    assert_eq!("NEAR".parse::<Moneyness>().unwrap(), Moneyness::Near);
    assert_eq!("Week".parse::<Expiry>().unwrap(), Expiry::Week);
}
