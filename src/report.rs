// src/report.rs
//
// HTML report: a dated header, then one ranked section per college with its
// player table. Ranking favors colleges with the most active players.

use chrono::Local;

use crate::group::{Solution, NO_COLLEGE};
use crate::normalize::{NormalizedPlayer, RosterStatus};

/// College is implied by the section heading, so tables carry the rest.
const TABLE_COLUMNS: [&str; 4] = ["Team", "Name", "POS", "Status"];

struct Section {
    name: String,
    active: usize,
    total: usize,
    table: String,
}

pub fn render(solution: &Solution) -> String {
    let date = Local::now().format("%B %d, %Y").to_string();
    render_for_date(solution, &date)
}

/// Split out from [`render`] so tests can pin the date.
pub fn render_for_date(solution: &Solution, date: &str) -> String {
    let mut sections: Vec<Section> = solution
        .iter()
        .map(|(college, players)| section(college, players))
        .collect();

    // most active first, then largest, then name; stable
    sections.sort_by(|a, b| {
        b.active
            .cmp(&a.active)
            .then(b.total.cmp(&a.total))
            .then(a.name.cmp(&b.name))
    });

    let title = join!("NFL players on ", date);
    let mut body = s!();
    for (rank, sec) in sections.iter().enumerate() {
        body.push_str(&format!(
            "  <h2>{}. {} (Active {}, Total {})</h2>\n{}",
            rank + 1,
            escape(&sec.name),
            sec.active,
            sec.total,
            sec.table
        ));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n  <h1>{title}</h1>\n{body}</body>\n</html>\n"
    )
}

fn section(college: &str, players: &[NormalizedPlayer]) -> Section {
    let display = if college == NO_COLLEGE { "None" } else { college };
    let active = players
        .iter()
        .filter(|p| p.status == RosterStatus::Active)
        .count();
    Section {
        name: s!(display),
        active,
        total: players.len(),
        table: player_table(players),
    }
}

fn player_table(players: &[NormalizedPlayer]) -> String {
    let mut t = s!("  <table>\n    <tr>");
    for col in TABLE_COLUMNS {
        t.push_str(&join!("<th>", col, "</th>"));
    }
    t.push_str("</tr>\n");

    for p in players {
        t.push_str("    <tr>");
        for cell in [p.team.as_str(), p.name.as_str(), p.pos.as_str(), p.status.label()] {
            t.push_str(&join!("<td>", &escape(cell), "</td>"));
        }
        t.push_str("</tr>\n");
    }

    t.push_str("  </table>\n");
    t
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
