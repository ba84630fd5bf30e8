// src/config/consts.rs

// Net config
pub const TEAMS_URL: &str = "https://www.espn.com/nfl/teams";
pub const USER_AGENT: &str = "nfl_scrape/0.8";
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const RETRY_LIMIT: u32 = 3;
pub const RETRY_PAUSE_MS: u64 = 500;

// Scrape pacing
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Export
pub const DEFAULT_OUT_DIR: &str = ".";
pub const JSON_FILE: &str = "nfl_players.json";
pub const TEXT_FILE: &str = "nfl_players.text";
pub const HTML_FILE: &str = "nfl_players.html";
pub const RECORD_SEP: char = '|';
