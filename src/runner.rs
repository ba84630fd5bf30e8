// src/runner.rs
//
// Top-level pipeline: fetch the team index, fetch each roster sequentially,
// then extract → normalize → group → write the three artifacts.
// One synchronous pass; any malformed source data aborts the run before
// anything is written.

use std::{error::Error, path::PathBuf, thread, time::Duration};

use crate::{
    config::consts::{JITTER_MS, REQUEST_PAUSE_MS},
    config::options::AppOptions,
    extract, file, group, normalize,
    progress::Progress,
    specs::{roster, teams, Table},
};

/// Summary of what a run produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub players: usize,
    pub colleges: usize,
}

pub fn run(
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    logf!("Run started: {}", opts.scrape.teams_url);

    let links = teams::fetch(&opts.scrape.teams_url)?;
    let links: Vec<_> = links
        .into_iter()
        .filter(|t| opts.scrape.teams.keeps(&t.name))
        .collect();
    if links.is_empty() {
        return Err("No teams matched the requested selection".into());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    let mut scraped: Vec<(String, Vec<Table>)> = Vec::with_capacity(links.len());
    for (i, link) in links.iter().enumerate() {
        if i > 0 {
            // be polite between page fetches
            let jitter = (i as u64) % JITTER_MS;
            thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter));
        }
        match roster::fetch(&link.url) {
            Ok(tables) => {
                logd!("{}: {} roster sections", link.name, tables.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&link.name);
                }
                scraped.push((link.name.clone(), tables));
            }
            Err(e) => {
                loge!("{}: {}", link.name, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(format!("{}: {}", link.name, e).into());
            }
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    let players = extract::extract_players(&scraped)?;
    let normalized = normalize::normalize(&players)?;
    let solution = group::group_by_college(normalized);

    let colleges = solution.len();
    let players: usize = solution.values().map(|v| v.len()).sum();
    let files_written = file::write_outputs(&opts.export, &solution)?;
    logf!("Run complete: {players} players across {colleges} colleges");

    Ok(RunSummary {
        files_written,
        players,
        colleges,
    })
}

/// Team names for `--list-teams`.
pub fn list_teams(teams_url: &str) -> Result<Vec<String>, Box<dyn Error>> {
    Ok(teams::fetch(teams_url)?
        .into_iter()
        .map(|t| t.name)
        .collect())
}
