// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Which teams to keep from the scraped team index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamSelector {
    All,
    Names(Vec<String>),
}

impl TeamSelector {
    pub fn keeps(&self, name: &str) -> bool {
        match self {
            TeamSelector::All => true,
            TeamSelector::Names(wanted) => {
                wanted.iter().any(|w| w.eq_ignore_ascii_case(name))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub teams_url: String,
    pub teams: TeamSelector,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            teams_url: s!(TEAMS_URL),
            teams: TeamSelector::All,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn json_path(&self) -> PathBuf { self.out_dir.join(JSON_FILE) }
    pub fn text_path(&self) -> PathBuf { self.out_dir.join(TEXT_FILE) }
    pub fn html_path(&self) -> PathBuf { self.out_dir.join(HTML_FILE) }
}
