//! Fixed-width grid the scraped cells reshape into, and the calls/puts
//! split keyed by strike.

use serde::Serialize;

use crate::error::Error;

/// Cells per grid row: 7 call fields, the option root symbol, the strike,
/// then 7 put fields.
pub const ROW_WIDTH: usize = 16;

/// Grid column holding the strike price shared by both sides.
pub const STRIKE_COL: usize = 8;

/// Canonical header set for each side of the chain.
pub const HEADERS: [&str; 7] = ["Day", "Last", "Chg", "Bid", "Ask", "Vol", "OI"];

/// Accumulated 16-column grid across all fetched pages. Row order is
/// page order, then on-page order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainGrid {
    rows: Vec<Vec<String>>,
}

impl ChainGrid {
    /// Reshapes a flat cell sequence into 16-wide rows.
    ///
    /// Fails with [`Error::ShapeMismatch`] when the cell count is not a
    /// multiple of 16 (malformed table, missing cells, layout change);
    /// cells are never truncated or padded to fit.
    pub fn from_cells(cells: Vec<String>) -> Result<Self, Error> {
        if cells.len() % ROW_WIDTH != 0 {
            return Err(Error::ShapeMismatch {
                cells: cells.len(),
                width: ROW_WIDTH,
            });
        }
        let rows = cells
            .chunks(ROW_WIDTH)
            .map(|chunk| chunk.to_vec())
            .collect();
        Ok(Self { rows })
    }

    /// Appends another batch of rows, preserving insertion order.
    pub fn extend(&mut self, batch: ChainGrid) {
        self.rows.extend(batch.rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Inverse of [`ChainGrid::from_cells`]: the cells back in document order.
    pub fn flatten(&self) -> Vec<String> {
        self.rows.iter().flatten().cloned().collect()
    }

    /// Splits the grid into the call-side and put-side tables, both keyed
    /// by the strike column. Grid column 7 (the option root symbol) is
    /// carried by neither side.
    pub fn split(&self) -> OptionChain {
        let mut calls = SideTable::default();
        let mut puts = SideTable::default();
        for row in &self.rows {
            let strike = row[STRIKE_COL].clone();
            calls
                .rows
                .push((strike.clone(), Quote::from_cells(&row[0..7])));
            puts.rows
                .push((strike, Quote::from_cells(&row[STRIKE_COL + 1..ROW_WIDTH])));
        }
        OptionChain { calls, puts }
    }
}

/// One side's quote at a strike. Field order matches [`HEADERS`]. Values
/// stay as the page's text; the site leaves blanks and dashes in untraded
/// strikes, so no numeric parse is attempted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quote {
    pub day: String,
    pub last: String,
    pub chg: String,
    pub bid: String,
    pub ask: String,
    pub vol: String,
    pub oi: String,
}

impl Quote {
    fn from_cells(cells: &[String]) -> Self {
        Self {
            day: cells[0].clone(),
            last: cells[1].clone(),
            chg: cells[2].clone(),
            bid: cells[3].clone(),
            ask: cells[4].clone(),
            vol: cells[5].clone(),
            oi: cells[6].clone(),
        }
    }
}

/// One side of the chain, keyed by strike.
///
/// Strikes are not unique: overlapping pages can repeat a strike, and
/// repeats are kept as-is in row order rather than merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SideTable {
    pub rows: Vec<(String, Quote)>,
}

impl SideTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All quotes recorded at `strike`, in row order.
    pub fn at_strike(&self, strike: &str) -> Vec<&Quote> {
        self.rows
            .iter()
            .filter(|(s, _)| s == strike)
            .map(|(_, q)| q)
            .collect()
    }
}

/// The scraped chain: calls and puts over the same strike column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionChain {
    pub calls: SideTable,
    pub puts: SideTable,
}
