use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{error, info, warn};
use pal3_formats::{DecoderConfig, GameVariant, SceneFileDecoder};
use walkdir::WalkDir;

/// Decode every scene file below a directory and report failures.
#[derive(Parser, Debug)]
#[command(about = "Batch-validate extracted PAL3 scene files", version)]
struct Args {
    /// Directory to scan recursively for `.scn` files
    root: PathBuf,

    /// Object record layout to use (pal3 or pal3a)
    #[arg(long, default_value_t = GameVariant::Pal3)]
    variant: GameVariant,

    /// Windows code page of embedded strings
    #[arg(long, default_value_t = 936)]
    codepage: u16,
}

#[derive(Default)]
struct ScanSummary {
    decoded: usize,
    failed: usize,
    diagnostics: usize,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    let decoder = SceneFileDecoder::new(DecoderConfig {
        variant: args.variant,
        codepage: args.codepage,
    })?;

    let files = collect_scene_files(&args.root);
    let mut summary = ScanSummary::default();
    for path in &files {
        scan_file(&decoder, path, &mut summary);
    }

    println!(
        "{} scene files: {} decoded, {} failed, {} diagnostics",
        files.len(),
        summary.decoded,
        summary.failed,
        summary.diagnostics
    );

    Ok(if summary.failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn collect_scene_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|res| res.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("scn"))
                .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

fn scan_file(decoder: &SceneFileDecoder, path: &Path, summary: &mut ScanSummary) {
    match decoder.open(path) {
        Ok(decoded) => {
            summary.decoded += 1;
            summary.diagnostics += decoded.diagnostics.len();
            for diagnostic in &decoded.diagnostics {
                warn!("{}: {diagnostic}", path.display());
            }
            info!(
                "{}: {} npcs, {} objects",
                path.display(),
                decoded.scene.npcs.len(),
                decoded.scene.objects.len()
            );
        }
        Err(err) => {
            summary.failed += 1;
            error!("{err:#}");
        }
    }
}
