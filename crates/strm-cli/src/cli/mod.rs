//! CLI for tree2strm.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::settings::Settings;
use commands::{run_completions, run_config, run_folders, run_generate};

/// Top-level CLI for tree2strm.
#[derive(Debug, Parser)]
#[command(name = "tree2strm")]
#[command(about = "Turn a directory-tree export into a mirrored tree of .strm pointer files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options for `generate`. Unset options fall back to the saved config.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Directory-tree text file.
    pub input: Option<PathBuf>,

    /// Base URL prepended to every path (e.g. http://alist.local:5244/d).
    #[arg(long, short = 'p')]
    pub prefix: Option<String>,

    /// Output root for the pointer files.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Pointer-file extension.
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Start collecting after the line containing this keyword; also used to trim paths.
    #[arg(long, short = 'k')]
    pub keyword: Option<String>,

    /// Percent-encode each path segment (overrides a saved `encode_url = false`).
    #[arg(long, overrides_with = "no_encode")]
    pub encode: bool,

    /// Write raw paths instead of percent-encoding each segment.
    #[arg(long, overrides_with = "encode")]
    pub no_encode: bool,

    /// Declared minimum media size in MB (recorded, not enforced).
    #[arg(long, value_name = "MB")]
    pub min_size_mb: Option<u64>,

    /// Maximum pointer files written at once.
    #[arg(long, short = 'j', value_name = "N")]
    pub workers: Option<usize>,

    /// Only generate entries directly inside this folder (repeatable; see `folders`).
    #[arg(long = "folder", value_name = "DIR")]
    pub folders: Vec<String>,

    /// Save the effective options as the new defaults after a successful run.
    #[arg(long)]
    pub save: bool,

    /// Print the final report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exit with status 2 if any entry failed.
    #[arg(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Merges these options over `settings`.
    pub fn resolve(&self, settings: &Settings) -> strm_core::config::GenerateConfig {
        let mut cfg = strm_core::config::GenerateConfig::new(
            self.input
                .clone()
                .or_else(|| settings.input_path.clone())
                .unwrap_or_default(),
            self.prefix
                .clone()
                .or_else(|| settings.url_prefix.clone())
                .unwrap_or_default(),
            self.output
                .clone()
                .or_else(|| settings.output_dir.clone())
                .unwrap_or_default(),
        );
        cfg.min_size_mb = self.min_size_mb.unwrap_or(settings.min_size_mb);
        cfg.output_extension = self
            .ext
            .clone()
            .unwrap_or_else(|| settings.output_extension.clone());
        cfg.start_keyword = self
            .keyword
            .clone()
            .or_else(|| settings.start_keyword.clone());
        cfg.encode_url = if self.encode {
            true
        } else if self.no_encode {
            false
        } else {
            settings.encode_url
        };
        cfg.workers = self.workers.unwrap_or(settings.workers);
        cfg
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Parse the tree file and write one pointer file per media entry.
    Generate(GenerateArgs),

    /// List the folders that contain media entries.
    Folders {
        /// Directory-tree text file.
        input: Option<PathBuf>,

        /// Anchor keyword (defaults to the saved one).
        #[arg(long, short = 'k')]
        keyword: Option<String>,

        /// Print as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Show the saved configuration.
    Config {
        /// Print only the config file path.
        #[arg(long)]
        path: bool,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    /// Parses arguments and runs the command; returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = &cli.command {
            run_completions(*shell);
            return Ok(0);
        }

        let settings = Settings::load_or_init()?;
        tracing::debug!("loaded settings: {:?}", settings);

        match cli.command {
            CliCommand::Generate(args) => run_generate(&settings, &args).await,
            CliCommand::Folders {
                input,
                keyword,
                json,
            } => {
                run_folders(&settings, input, keyword, json)?;
                Ok(0)
            }
            CliCommand::Config { path } => {
                run_config(&settings, path)?;
                Ok(0)
            }
            CliCommand::Completions { .. } => Ok(0),
        }
    }
}
