//! `tree2strm config` – show the saved configuration.

use anyhow::Result;

use crate::settings::{settings_path, Settings};

pub fn run_config(settings: &Settings, path_only: bool) -> Result<()> {
    let path = settings_path()?;
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(settings)?);
    Ok(())
}
