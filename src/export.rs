// src/export.rs
//
// Solution → data artifacts: the pipe-delimited text dump and the pretty
// JSON document. Both walk the solution in its own order; nothing is
// re-sorted here.

use std::error::Error;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::consts::RECORD_SEP;
use crate::group::Solution;
use crate::normalize::NormalizedPlayer;

/// One `College|Team|Name|POS|Status` line per player. Lines are joined
/// with `\n` and carry no trailing newline.
pub fn to_text_dump(solution: &Solution) -> String {
    let mut lines = Vec::new();
    for players in solution.values() {
        for p in players {
            lines.push(record_line(p));
        }
    }
    lines.join("\n")
}

fn record_line(p: &NormalizedPlayer) -> String {
    let sep = s!(RECORD_SEP);
    [
        p.college.as_str(),
        p.team.as_str(),
        p.name.as_str(),
        p.pos.as_str(),
        p.status.label(),
    ]
    .join(sep.as_str())
}

/// Four-space-indented JSON document; non-ASCII text stays literal.
pub fn to_json(solution: &Solution) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    solution.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}
