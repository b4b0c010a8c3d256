//! `tree2strm folders <input>` – list folders that hold media entries.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use strm_core::tree;

use crate::input::read_tree_lines;
use crate::settings::Settings;

pub fn run_folders(
    settings: &Settings,
    input: Option<PathBuf>,
    keyword: Option<String>,
    json: bool,
) -> Result<()> {
    let input = input
        .or_else(|| settings.input_path.clone())
        .context("no input tree file given and none saved")?;
    let keyword = keyword.or_else(|| settings.start_keyword.clone());

    let lines = read_tree_lines(&input)?;
    let entries = tree::parse_tree(&lines, keyword.as_deref());

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in &entries {
        *counts.entry(entry.parent()).or_default() += 1;
    }

    if json {
        let folders: Vec<&str> = counts.keys().copied().collect();
        println!("{}", serde_json::to_string_pretty(&folders)?);
    } else if counts.is_empty() {
        println!("No media entries found.");
    } else {
        println!("{:<8} {}", "FILES", "FOLDER");
        for (folder, n) in &counts {
            let shown = if folder.is_empty() { "(top level)" } else { *folder };
            println!("{:<8} {}", n, shown);
        }
    }
    Ok(())
}
