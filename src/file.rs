// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::export;
use crate::group::Solution;
use crate::report;

/// Write all three artifacts (text dump, JSON, HTML report).
/// Returns the paths in write order.
pub fn write_outputs(
    export_opts: &ExportOptions,
    solution: &Solution,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(&export_opts.out_dir)?;

    let text_path = export_opts.text_path();
    fs::write(&text_path, export::to_text_dump(solution))?;

    let json_path = export_opts.json_path();
    fs::write(&json_path, export::to_json(solution)?)?;

    let html_path = export_opts.html_path();
    fs::write(&html_path, report::render(solution))?;

    Ok(vec![text_path, json_path, html_path])
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
