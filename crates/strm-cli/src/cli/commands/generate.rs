//! `tree2strm generate` – write pointer files for a tree export.

use anyhow::{Context, Result};
use strm_core::control::StopToken;
use strm_core::pipeline;
use strm_core::scheduler::{BatchReport, JobEvent};
use strm_core::selection::Selection;

use crate::cli::GenerateArgs;
use crate::input::read_tree_lines;
use crate::settings::Settings;

/// Exit status when `--strict` is set and at least one entry failed.
const EXIT_PARTIAL_FAILURE: i32 = 2;

fn print_summary(report: &BatchReport) {
    if report.is_empty() {
        println!("No matching media entries found.");
        return;
    }
    println!(
        "Done: {} written, {} skipped, {} failed (of {}).",
        report.written,
        report.skipped,
        report.failed_count(),
        report.total
    );
    if report.cancelled > 0 {
        println!("Stopped early: {} entries not processed.", report.cancelled);
    }
    for item in &report.failed {
        println!("  failed: {} ({})", item.source, item.message);
    }
}

pub async fn run_generate(settings: &Settings, args: &GenerateArgs) -> Result<i32> {
    let cfg = args.resolve(settings);
    cfg.validate()?;
    let lines = read_tree_lines(&cfg.input_path)?;
    let selection = Selection::from_folders(args.folders.iter().cloned());

    let stop = StopToken::new();
    let ctrl_c = {
        let stop = stop.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                eprintln!("Stop requested; letting running jobs finish...");
                stop.request_stop();
            }
        })
    };

    let (event_tx, mut event_rx) = tokio::sync::mpsc::channel::<JobEvent>(64);
    let quiet = args.json;
    let printer = tokio::spawn(async move {
        let mut done = 0usize;
        while let Some(event) = event_rx.recv().await {
            done += 1;
            if !quiet {
                println!("[{}] {}", done, event);
            }
        }
    });

    let report = pipeline::generate(&cfg, &lines, &selection, Some(event_tx), Some(stop)).await;
    let _ = printer.await;
    ctrl_c.abort();
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    if args.save && !report.is_empty() {
        let path = Settings::from_config(&cfg)
            .save()
            .context("save settings")?;
        tracing::info!("saved settings to {}", path.display());
    }

    if args.strict && !report.failed.is_empty() {
        return Ok(EXIT_PARTIAL_FAILURE);
    }
    Ok(0)
}
