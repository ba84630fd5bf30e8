// src/group.rs
//
// Partition normalized players by college. The resulting map is the
// pipeline's terminal artifact; its key order and per-college row order are
// part of the output contract.

use indexmap::IndexMap;

use crate::normalize::{sort_key, NormalizedPlayer};

/// College marker the source uses for players with no listed school.
/// Data artifacts keep it verbatim; only the HTML report substitutes a
/// friendlier label.
pub const NO_COLLEGE: &str = "--";

/// college → players, colleges in case-insensitive order, players in
/// last-name order within each college.
pub type Solution = IndexMap<String, Vec<NormalizedPlayer>>;

pub fn group_by_college(mut players: Vec<NormalizedPlayer>) -> Solution {
    // stable, so equal keys keep their scrape order
    players.sort_by_cached_key(|p| sort_key(&p.name));

    let mut colleges: Vec<String> = Vec::new();
    for p in &players {
        if !colleges.iter().any(|c| c == &p.college) {
            colleges.push(p.college.clone());
        }
    }
    colleges.sort_by_key(|c| c.to_lowercase());

    let mut solution = Solution::new();
    for college in colleges {
        let bucket: Vec<NormalizedPlayer> = players
            .iter()
            .filter(|p| p.college == college)
            .cloned()
            .collect();
        solution.insert(college, bucket);
    }
    solution
}
