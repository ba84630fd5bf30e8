// src/normalize.rs
//
// The heart of the pipeline: reduce scraped rows to the five output fields,
// clean the names, collapse statuses, and derive the last-name-first key
// used for ordering.

use std::error::Error;

use serde::{Deserialize, Serialize};

use crate::core::sanitize::strip_digits;
use crate::extract::{ExtractedPlayer, Status};

/// Post-normalization roster status. The three on-field sections all
/// collapse to `Active`; the bench categories pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterStatus {
    Active,
    #[serde(rename = "Injured Reserve")]
    InjuredReserve,
    #[serde(rename = "Practice Squad")]
    PracticeSquad,
}

impl RosterStatus {
    pub fn label(self) -> &'static str {
        match self {
            RosterStatus::Active => "Active",
            RosterStatus::InjuredReserve => "Injured Reserve",
            RosterStatus::PracticeSquad => "Practice Squad",
        }
    }
}

/// The five fields kept for output, serialized in this exact order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPlayer {
    #[serde(rename = "College")]
    pub college: String,
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "POS")]
    pub pos: String,
    #[serde(rename = "Status")]
    pub status: RosterStatus,
}

/// Reduce extracted rows to normalized records. A row missing `Name`, `POS`
/// or `College` means the source table layout changed; abort rather than
/// emit corrupt records.
pub fn normalize(players: &[ExtractedPlayer]) -> Result<Vec<NormalizedPlayer>, Box<dyn Error>> {
    players.iter().map(normalize_one).collect()
}

fn normalize_one(p: &ExtractedPlayer) -> Result<NormalizedPlayer, Box<dyn Error>> {
    Ok(NormalizedPlayer {
        college: s!(required(p, "College")?),
        team: p.team.clone(),
        name: clean_name(required(p, "Name")?),
        pos: s!(required(p, "POS")?),
        status: collapse_status(p.status),
    })
}

fn required<'a>(p: &'a ExtractedPlayer, key: &str) -> Result<&'a str, Box<dyn Error>> {
    p.field(key)
        .ok_or_else(|| format!("{}: row is missing required column {key:?}", p.team).into())
}

/// Jersey numbers sometimes ride along on scraped names ("Patrick
/// Mahomes15"). Drop the digits, touch nothing else.
pub fn clean_name(name: &str) -> String {
    strip_digits(name)
}

pub fn collapse_status(status: Status) -> RosterStatus {
    match status {
        Status::Offense | Status::Defense | Status::SpecialTeams => RosterStatus::Active,
        Status::InjuredReserve => RosterStatus::InjuredReserve,
        Status::PracticeSquad => RosterStatus::PracticeSquad,
    }
}

/// Generational suffixes dropped from the end of a name before reordering.
const NAME_SUFFIXES: [&str; 5] = ["ii", "iii", "iv", "jr", "sr"];

/// Last-name-first ordering key.
///
/// The steps run in a fixed order, and the order matters: lowercase, delete
/// apostrophes, delete periods, delete hyphens (fusing adjacent segments),
/// drop a trailing generational suffix token, then move the final token to
/// the front. Compound surnames ("St. Brown", "Van Noy") get no special
/// treatment: the final token alone moves, so "Amon-Ra St. Brown" keys as
/// "brown amonra st".
pub fn sort_key(name: &str) -> String {
    let mut flat = name.to_lowercase();
    flat.retain(|c| c != '\'');
    flat.retain(|c| c != '.');
    flat.retain(|c| c != '-');
    last_name_first(&pull_suffix(&flat))
}

fn pull_suffix(s: &str) -> String {
    let parts: Vec<&str> = s.split(' ').collect();
    match parts.split_last() {
        Some((last, rest)) if NAME_SUFFIXES.contains(last) => rest.join(" "),
        _ => s!(s),
    }
}

fn last_name_first(s: &str) -> String {
    let parts: Vec<&str> = s.split(' ').collect();
    match parts.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            let mut key = s!(*last);
            for part in rest {
                key.push(' ');
                key.push_str(part);
            }
            key
        }
        _ => s!(s),
    }
}
