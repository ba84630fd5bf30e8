// src/specs/roster.rs
//! Scraping spec for a single team roster page.
//!
//! A roster page carries up to five sections, each a plain `<table>`:
//! offense, defense, special teams, then (when present) injured reserve and
//! practice squad. The spec returns every table in document order and leaves
//! the positional meaning of that order to the extractor.
//!
//! Cell text is flattened with `strip_tags`, which is also where the infamous
//! fused jersey numbers come from: a name cell like
//! `<a>Patrick Mahomes</a><span>15</span>` flattens to "Patrick Mahomes15".
//! The normalizer cleans those up later.

use std::error::Error;

use super::Table;
use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;

pub fn fetch(url: &str) -> Result<Vec<Table>, Box<dyn Error>> {
    let doc = net::http_get(url)?;
    Ok(parse_doc(&doc))
}

/// Every non-empty `<table>` on the page, in document order.
pub fn parse_doc(doc: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut pos = 0usize;

    while let Some((t_s, t_e)) = next_tag_block_ci(doc, "<table", "</table>", pos) {
        let block = &doc[t_s..t_e];
        pos = t_e;

        let table = parse_table(block);
        if !table.headers.is_empty() || !table.rows.is_empty() {
            tables.push(table);
        }
    }

    tables
}

fn parse_table(block: &str) -> Table {
    let mut headers = Vec::new();
    let mut th_pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(block, "<th", "</th>", th_pos) {
        headers.push(cell_text(&block[s..e]));
        th_pos = e;
    }

    let mut rows = Vec::new();
    let mut tr_pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(block, "<tr", "</tr>", tr_pos) {
        let tr = &block[s..e];
        tr_pos = e;

        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((c_s, c_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            cells.push(cell_text(&tr[c_s..c_e]));
            td_pos = c_e;
        }
        // header-only rows carry no <td> cells; skip them
        if !cells.is_empty() {
            rows.push(cells);
        }
    }

    Table { headers, rows }
}

fn cell_text(block: &str) -> String {
    normalize_entities(&strip_tags(inner_after_open_tag(block)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_FIXTURE: &str = r#"
        <div class="ResponsiveTable">
          <table class="Table">
            <thead>
              <tr><th>Name</th><th>POS</th><th>HT</th><th>College</th></tr>
            </thead>
            <tbody>
              <tr>
                <td><a href="/p/1">Patrick Mahomes</a><span class="n">15</span></td>
                <td>QB</td><td>6' 2"</td><td>Texas Tech</td>
              </tr>
              <tr>
                <td><a href="/p/2">Travis Kelce</a><span class="n">87</span></td>
                <td>TE</td><td>6' 5"</td><td>Cincinnati</td>
              </tr>
            </tbody>
          </table>
        </div>
        <div class="ResponsiveTable">
          <table class="Table">
            <thead><tr><th>Name</th><th>POS</th><th>HT</th><th>College</th></tr></thead>
            <tbody>
              <tr><td>Chris Jones95</td><td>DT</td><td>6' 6"</td><td>Mississippi State</td></tr>
            </tbody>
          </table>
        </div>
    "#;

    #[test]
    fn tables_in_document_order() {
        let tables = parse_doc(ROSTER_FIXTURE);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 2);
        assert_eq!(tables[1].rows.len(), 1);
    }

    #[test]
    fn headers_read_despite_thead() {
        let tables = parse_doc(ROSTER_FIXTURE);
        assert_eq!(tables[0].headers, vec!["Name", "POS", "HT", "College"]);
    }

    #[test]
    fn jersey_numbers_fuse_onto_names() {
        let tables = parse_doc(ROSTER_FIXTURE);
        assert_eq!(tables[0].rows[0][0], "Patrick Mahomes15");
        assert_eq!(tables[0].rows[0][3], "Texas Tech");
    }

    #[test]
    fn header_row_not_counted_as_body_row() {
        let doc = "<table><tr><th>A</th></tr><tr><td>1</td></tr></table>";
        let tables = parse_doc(doc);
        assert_eq!(tables[0].headers, vec!["A"]);
        assert_eq!(tables[0].rows, vec![vec!["1"]]);
    }

    #[test]
    fn empty_tables_are_dropped() {
        assert!(parse_doc("<table></table><p>no players</p>").is_empty());
    }

    #[test]
    fn entities_decoded_in_cells() {
        let doc = "<table><tr><td>Texas A&amp;M</td></tr></table>";
        let tables = parse_doc(doc);
        assert_eq!(tables[0].rows[0][0], "Texas A&M");
    }
}
