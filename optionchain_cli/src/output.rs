use std::path::{Path, PathBuf};

use anyhow::Result;
use optionchain_lib::{OptionChain, SideTable, HEADERS};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct QuoteRow {
    #[tabled(rename = "Strike")]
    strike: String,
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Last")]
    last: String,
    #[tabled(rename = "Chg")]
    chg: String,
    #[tabled(rename = "Bid")]
    bid: String,
    #[tabled(rename = "Ask")]
    ask: String,
    #[tabled(rename = "Vol")]
    vol: String,
    #[tabled(rename = "OI")]
    oi: String,
}

fn build_quote_rows(side: &SideTable) -> Vec<QuoteRow> {
    side.rows
        .iter()
        .map(|(strike, q)| QuoteRow {
            strike: strike.clone(),
            day: q.day.clone(),
            last: q.last.clone(),
            chg: q.chg.clone(),
            bid: q.bid.clone(),
            ask: q.ask.clone(),
            vol: q.vol.clone(),
            oi: q.oi.clone(),
        })
        .collect()
}

pub fn print_chain_tables(chain: &OptionChain) {
    println!("Calls:");
    print_side_table(&chain.calls);
    println!("\nPuts:");
    print_side_table(&chain.puts);
}

fn print_side_table(side: &SideTable) {
    let mut table = Table::new(build_quote_rows(side));
    table.with(Style::sharp());
    println!("{}", table);
}

pub fn print_json(chain: &OptionChain) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(chain)?);
    Ok(())
}

/// Path of the per-cycle calls CSV. The ticker is used exactly as the
/// caller gave it; no case normalization.
pub fn calls_csv_path(out_dir: &Path, ticker: &str, nearby: u32) -> PathBuf {
    out_dir.join(format!("{}-{}-calls.csv", ticker, nearby))
}

/// Writes one side of the chain as CSV, strike column first.
pub fn write_side_csv(side: &SideTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut header = vec!["Strike"];
    header.extend_from_slice(&HEADERS);
    writer.write_record(&header)?;
    for (strike, q) in &side.rows {
        writer.write_record([
            strike, &q.day, &q.last, &q.chg, &q.bid, &q.ask, &q.vol, &q.oi,
        ])?;
    }
    writer.flush()?;
    Ok(())
}
