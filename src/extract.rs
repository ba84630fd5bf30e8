// src/extract.rs
//
// Flatten per-team roster tables into one list of player rows, attaching the
// team name and the roster section each row came from.

use std::error::Error;

use crate::specs::Table;

/// The five roster sections, in the order they appear on a roster page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Offense,
    Defense,
    SpecialTeams,
    InjuredReserve,
    PracticeSquad,
}

impl Status {
    /// Positional mapping from a team's table index. Pages carry at most
    /// five sections; a sixth table means the source page is malformed and
    /// the run must not continue with mislabeled records.
    pub fn from_table_index(ix: usize) -> Result<Status, Box<dyn Error>> {
        match ix {
            0 => Ok(Status::Offense),
            1 => Ok(Status::Defense),
            2 => Ok(Status::SpecialTeams),
            3 => Ok(Status::InjuredReserve),
            4 => Ok(Status::PracticeSquad),
            n => Err(format!("roster section index {n} out of range (0..=4)").into()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Offense => "Offense",
            Status::Defense => "Defense",
            Status::SpecialTeams => "Special Teams",
            Status::InjuredReserve => "Injured Reserve",
            Status::PracticeSquad => "Practice Squad",
        }
    }
}

/// One scraped player row with team and roster section attached.
/// All source columns ride along; the normalizer picks the ones it keeps.
#[derive(Clone, Debug)]
pub struct ExtractedPlayer {
    pub fields: Vec<(String, String)>,
    pub team: String,
    pub status: Status,
}

impl ExtractedPlayer {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Flatten every team's tables into one list, preserving team order, table
/// order within a team, and row order within a table.
pub fn extract_players(
    teams: &[(String, Vec<Table>)],
) -> Result<Vec<ExtractedPlayer>, Box<dyn Error>> {
    let mut out = Vec::new();

    for (team, tables) in teams {
        for (ix, table) in tables.iter().enumerate() {
            let status = match Status::from_table_index(ix) {
                Ok(status) => status,
                Err(e) => return Err(format!("{team}: {e}").into()),
            };
            for row in &table.rows {
                let fields = table
                    .headers
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect();
                out.push(ExtractedPlayer {
                    fields,
                    team: team.clone(),
                    status,
                });
            }
        }
    }

    Ok(out)
}
