mod output;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use optionchain_lib::{ChainClient, ChainQuery, Expiry, Market, Moneyness};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "optionchain")]
#[command(about = "Scrape Nasdaq option chains into calls and puts tables")]
struct Cli {
    /// Ticker of the underlying
    ticker: String,

    /// Moneyness filter: all, in, out, near
    #[arg(long, default_value = "near")]
    money: String,

    /// Exchange code: composite, cbo, aoe, nyo, pho, moe, box, ise, bto, nso, c2o, bxo, miax
    #[arg(long, default_value = "cbo")]
    market: String,

    /// Expiration category: week, stand, quart, cebo
    #[arg(long, default_value = "stand")]
    expiry: String,

    /// Expiration cycle to fetch; omit to sweep cycles 0 through 6
    #[arg(long)]
    nearby: Option<u32>,

    /// Output format: table or json
    #[arg(long, default_value = "table")]
    output: String,

    /// Directory the per-cycle calls CSV files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("optionchain_lib=info".parse().unwrap())
                .add_directive("optionchain_cli=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let money: Moneyness = match cli.money.parse() {
        Ok(money) => money,
        Err(()) => bail!("unknown moneyness filter: {}", cli.money),
    };
    let market: Market = match cli.market.parse() {
        Ok(market) => market,
        Err(()) => bail!("unknown exchange code: {}", cli.market),
    };
    let expiry: Expiry = match cli.expiry.parse() {
        Ok(expiry) => expiry,
        Err(()) => bail!("unknown expiration category: {}", cli.expiry),
    };
    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let client = ChainClient::new()?;
    let cycles: Vec<u32> = match cli.nearby {
        Some(nearby) => vec![nearby],
        None => (0..7).collect(),
    };

    for nearby in cycles {
        let query = ChainQuery::new(&cli.ticker)
            .with_market(market)
            .with_moneyness(money)
            .with_expiry(expiry)
            .with_nearby(nearby);

        let chain = client
            .chain(&query)
            .await
            .with_context(|| format!("scraping {} cycle {}", cli.ticker, nearby))?;
        tracing::info!(
            ticker = %cli.ticker,
            nearby,
            calls = chain.calls.len(),
            puts = chain.puts.len(),
            "scraped chain"
        );

        match format {
            OutputFormat::Table => output::print_chain_tables(&chain),
            OutputFormat::Json => output::print_json(&chain)?,
        }

        let path = output::calls_csv_path(&cli.out_dir, &cli.ticker, nearby);
        output::write_side_csv(&chain.calls, &path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote calls table");
    }

    Ok(())
}
