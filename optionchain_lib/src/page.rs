//! HTML extraction: the pager's "last page" link and the option data table.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::Error;

/// Element id of the pager link pointing at the last page of the chain.
const LAST_PAGE_ID: &str = "quotes_content_left_lb_LastPage";

/// Where the chain table has historically sat among the page's tables,
/// used when no table announces itself by header.
const OPTION_TABLE_INDEX: usize = 5;

/// One fetched chain page, parsed and ready to query.
pub struct ChainDocument {
    doc: Html,
}

impl ChainDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Html::parse_document(html),
        }
    }

    /// Total page count advertised by the "last page" pager link.
    ///
    /// Single-page chains render no pager at all, so a missing link (or
    /// one whose href carries no page number) means one page.
    pub fn page_count(&self) -> u32 {
        let link = Selector::parse(&format!("a#{}", LAST_PAGE_ID)).unwrap();
        let page_re = Regex::new(r"page=(\d+)").unwrap();
        self.doc
            .select(&link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .and_then(|href| page_re.captures(href))
            .and_then(|caps| caps[1].parse().ok())
            .unwrap_or(1)
    }

    /// Every cell text of the option table, in document order.
    ///
    /// Fails with [`Error::TableMissing`] when no table can be located,
    /// e.g. for an unknown ticker or a site layout change.
    pub fn option_cells(&self) -> Result<Vec<String>, Error> {
        let table = self.option_table().ok_or(Error::TableMissing)?;
        let td = Selector::parse("td").unwrap();
        Ok(table.select(&td).map(element_text).collect())
    }

    /// Locates the chain table. Prefers the table whose header row names
    /// the strike column; falls back to the sixth table on the page, the
    /// slot the site has always used.
    fn option_table(&self) -> Option<ElementRef<'_>> {
        let table = Selector::parse("table").unwrap();
        let th = Selector::parse("th").unwrap();
        let tables: Vec<ElementRef<'_>> = self.doc.select(&table).collect();
        tables
            .iter()
            .copied()
            .find(|t| {
                t.select(&th)
                    .any(|h| element_text(h).eq_ignore_ascii_case("strike"))
            })
            .or_else(|| tables.get(OPTION_TABLE_INDEX).copied())
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager_page(href: &str) -> String {
        format!(
            r#"<html><body>
            <a id="quotes_content_left_lb_LastPage" href="{}">Last</a>
            </body></html>"#,
            href
        )
    }

    #[test]
    fn page_count_reads_last_page_link() {
        let doc = ChainDocument::parse(&pager_page(
            "/symbol/vxx/option-chain?excode=cbo&dateindex=0&page=4",
        ));
        assert_eq!(doc.page_count(), 4);
    }

    #[test]
    fn page_count_defaults_to_one_without_pager() {
        let doc = ChainDocument::parse("<html><body><p>no pager here</p></body></html>");
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn page_count_defaults_to_one_for_href_without_page() {
        let doc = ChainDocument::parse(&pager_page("/symbol/vxx/option-chain"));
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn option_cells_prefers_table_with_strike_header() {
        let html = r#"<html><body>
            <table><tr><td>nav junk</td></tr></table>
            <table>
              <tr><th>Calls</th><th>Strike</th><th>Puts</th></tr>
              <tr><td>a</td><td>b</td><td>c</td></tr>
            </table>
        </body></html>"#;
        let doc = ChainDocument::parse(html);
        assert_eq!(doc.option_cells().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn option_cells_falls_back_to_sixth_table() {
        let mut html = String::from("<html><body>");
        for i in 0..7 {
            html.push_str(&format!("<table><tr><td>t{}</td></tr></table>", i));
        }
        html.push_str("</body></html>");
        let doc = ChainDocument::parse(&html);
        assert_eq!(doc.option_cells().unwrap(), vec!["t5"]);
    }

    #[test]
    fn option_cells_errors_when_no_table_qualifies() {
        let html = "<html><body><table><tr><td>only one</td></tr></table></body></html>";
        let doc = ChainDocument::parse(html);
        assert!(matches!(doc.option_cells(), Err(Error::TableMissing)));
    }

    #[test]
    fn cell_text_is_trimmed() {
        let html = r#"<html><body>
            <table>
              <tr><th>Strike</th></tr>
              <tr><td>  190.00
              </td></tr>
            </table>
        </body></html>"#;
        let doc = ChainDocument::parse(html);
        assert_eq!(doc.option_cells().unwrap(), vec!["190.00"]);
    }
}
