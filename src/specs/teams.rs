// src/specs/teams.rs
//! Scraping spec for the team index page.
//!
//! The index lists every team with a small cluster of links; the one whose
//! anchor text is exactly `Roster` points at the roster page we want. The
//! team's display name is not taken from the page at all: it is derived from
//! the final segment of the roster URL ("kansas-city-chiefs" →
//! "Kansas City Chiefs"), which is stable across site redesigns.

use std::error::Error;

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, strip_tags, tag_attr};
use crate::core::sanitize::{normalize_entities, title_case};
use crate::core::net;

/// Anchor text that marks a roster link on the index page.
const ROSTER_ANCHOR: &str = "Roster";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamLink {
    pub name: String,
    pub url: String,
}

pub fn fetch(teams_url: &str) -> Result<Vec<TeamLink>, Box<dyn Error>> {
    let doc = net::http_get(teams_url)?;
    let links = parse_doc(&doc, teams_url);
    if links.is_empty() {
        return Err(format!(
            "No roster links found at {teams_url}; site format may have changed"
        )
        .into());
    }
    Ok(links)
}

/// Collect roster links from the index page, in page order, deduplicated.
pub fn parse_doc(doc: &str, base_url: &str) -> Vec<TeamLink> {
    let mut out: Vec<TeamLink> = Vec::new();
    let mut pos = 0usize;

    while let Some((a_s, a_e)) = next_tag_block_ci(doc, "<a ", "</a>", pos) {
        let block = &doc[a_s..a_e];
        pos = a_e;

        let text = strip_tags(normalize_entities(&inner_after_open_tag(block)));
        if text != ROSTER_ANCHOR {
            continue;
        }

        let opener_end = match block.find('>') {
            Some(e) => e,
            None => continue,
        };
        let Some(href) = tag_attr(&block[..opener_end + 1], "href") else {
            continue;
        };

        let url = absolutize(&href, base_url);
        if out.iter().any(|t| t.url == url) {
            continue;
        }
        let name = team_name_from_url(&url);
        out.push(TeamLink { name, url });
    }

    out
}

/// "…/roster/_/name/kc/kansas-city-chiefs" → "Kansas City Chiefs".
pub fn team_name_from_url(url: &str) -> String {
    let slug = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
    title_case(&slug.replace('-', " "))
}

/// Join a relative href against the origin of the page it came from.
fn absolutize(href: &str, base_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return s!(href);
    }
    let origin = base_url
        .find("://")
        .and_then(|i| base_url[i + 3..].find('/').map(|j| &base_url[..i + 3 + j]))
        .unwrap_or(base_url);
    if href.starts_with('/') {
        join!(origin, href)
    } else {
        format!("{origin}/{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.espn.com/nfl/teams";

    const INDEX_FIXTURE: &str = r#"
        <div class="ContentList__Item">
          <a class="AnchorLink" href="https://www.espn.com/nfl/team/_/name/kc/kansas-city-chiefs">Chiefs</a>
          <a class="AnchorLink" href="https://www.espn.com/nfl/team/stats/_/name/kc/kansas-city-chiefs">Statistics</a>
          <a class="AnchorLink" href="https://www.espn.com/nfl/team/roster/_/name/kc/kansas-city-chiefs">Roster</a>
        </div>
        <div class="ContentList__Item">
          <a class="AnchorLink" href="/nfl/team/roster/_/name/sf/san-francisco-49ers">Roster</a>
          <a class="AnchorLink" href="/nfl/team/depth/_/name/sf/san-francisco-49ers">Depth Chart</a>
        </div>
    "#;

    #[test]
    fn roster_links_only() {
        let links = parse_doc(INDEX_FIXTURE, BASE);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].name, "Kansas City Chiefs");
        assert_eq!(
            links[0].url,
            "https://www.espn.com/nfl/team/roster/_/name/kc/kansas-city-chiefs"
        );
    }

    #[test]
    fn relative_hrefs_join_origin() {
        let links = parse_doc(INDEX_FIXTURE, BASE);
        assert_eq!(
            links[1].url,
            "https://www.espn.com/nfl/team/roster/_/name/sf/san-francisco-49ers"
        );
    }

    #[test]
    fn slug_title_casing() {
        assert_eq!(
            team_name_from_url("https://x/nfl/team/roster/_/name/kc/kansas-city-chiefs"),
            "Kansas City Chiefs"
        );
        // digits break words
        assert_eq!(
            team_name_from_url("https://x/nfl/team/roster/_/name/sf/san-francisco-49ers"),
            "San Francisco 49Ers"
        );
    }

    #[test]
    fn duplicate_links_collapse() {
        let doc = r#"
            <a href="/r/_/name/kc/kansas-city-chiefs">Roster</a>
            <a href="/r/_/name/kc/kansas-city-chiefs">Roster</a>
        "#;
        assert_eq!(parse_doc(doc, BASE).len(), 1);
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(parse_doc("<html><body></body></html>", BASE).is_empty());
    }
}
