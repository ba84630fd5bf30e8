// tests/outputs.rs
//
// File-writing tests: all three artifacts land in the output directory
// with the expected names and contents.

use std::fs;
use std::path::PathBuf;

use nfl_scrape::config::options::ExportOptions;
use nfl_scrape::file::write_outputs;
use nfl_scrape::group::{group_by_college, Solution};
use nfl_scrape::normalize::{NormalizedPlayer, RosterStatus};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(name);
    let _ = fs::remove_dir_all(&p);
    p
}

fn sample_solution() -> Solution {
    group_by_college(vec![
        NormalizedPlayer {
            college: "Texas Tech".to_string(),
            team: "Kansas City Chiefs".to_string(),
            name: "Patrick Mahomes".to_string(),
            pos: "QB".to_string(),
            status: RosterStatus::Active,
        },
        NormalizedPlayer {
            college: "--".to_string(),
            team: "Detroit Lions".to_string(),
            name: "No School".to_string(),
            pos: "WR".to_string(),
            status: RosterStatus::PracticeSquad,
        },
    ])
}

#[test]
fn writes_all_three_artifacts() {
    let dir = tmp_dir("nfl_scrape_outputs");
    let opts = ExportOptions { out_dir: dir.clone() };

    let written = write_outputs(&opts, &sample_solution()).unwrap();
    assert_eq!(written.len(), 3);
    assert_eq!(written[0], dir.join("nfl_players.text"));
    assert_eq!(written[1], dir.join("nfl_players.json"));
    assert_eq!(written[2], dir.join("nfl_players.html"));
    for path in &written {
        assert!(path.exists(), "{} exists", path.display());
    }
}

#[test]
fn artifacts_agree_with_in_memory_solution() {
    let dir = tmp_dir("nfl_scrape_outputs_content");
    let opts = ExportOptions { out_dir: dir.clone() };
    let solution = sample_solution();
    write_outputs(&opts, &solution).unwrap();

    let text = fs::read_to_string(dir.join("nfl_players.text")).unwrap();
    assert_eq!(
        text,
        "--|Detroit Lions|No School|WR|Practice Squad\n\
         Texas Tech|Kansas City Chiefs|Patrick Mahomes|QB|Active"
    );

    let json = fs::read_to_string(dir.join("nfl_players.json")).unwrap();
    let back: Solution = serde_json::from_str(&json).unwrap();
    assert_eq!(back, solution);

    let html = fs::read_to_string(dir.join("nfl_players.html")).unwrap();
    // the sentinel college renders as None, ranked below the active school
    assert!(html.contains("1. Texas Tech (Active 1, Total 1)"));
    assert!(html.contains("2. None (Active 0, Total 1)"));
}

#[test]
fn output_dir_is_created_when_missing() {
    let dir = tmp_dir("nfl_scrape_outputs_nested").join("a").join("b");
    let opts = ExportOptions { out_dir: dir.clone() };
    write_outputs(&opts, &sample_solution()).unwrap();
    assert!(dir.join("nfl_players.json").exists());
}
