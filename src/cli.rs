// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{AppOptions, TeamSelector};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let (opts, list_only) = parse_cli()?;

    if list_only {
        for name in runner::list_teams(&opts.scrape.teams_url)? {
            println!("{name}");
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress::default();
    let summary = runner::run(&opts, Some(&mut progress))?;
    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    println!(
        "{} players across {} colleges",
        summary.players, summary.colleges
    );
    Ok(())
}

fn parse_cli() -> Result<(AppOptions, bool), Box<dyn Error>> {
    let mut opts = AppOptions::default();
    let mut names: Vec<String> = Vec::new();
    let mut list_only = false;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                opts.export.out_dir =
                    PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "--teams-url" => {
                opts.scrape.teams_url = args.next().ok_or("Missing value for --teams-url")?;
            }
            "--team" => names.push(args.next().ok_or("Missing value for --team")?),
            "--list-teams" => list_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !names.is_empty() {
        opts.scrape.teams = TeamSelector::Names(names);
    }
    Ok((opts, list_only))
}

#[derive(Default)]
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, name: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, name);
    }
}
