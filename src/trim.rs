use crate::sox::{Edge, Threshold, TrimError, Trimmer};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of one trimming pass over a directory.
#[derive(Debug, Default)]
pub struct TrimReport {
    pub trimmed: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub interrupted: bool,
}

/// Strip leading and trailing silence from every .mp3 file in `dir`.
///
/// One scratch file is shared by all iterations and removed when this
/// function returns, interruption included. Failures are isolated per file:
/// a file that fails either pass is reported with a warning and left as the
/// previous step produced it, and the loop moves on.
pub fn trim_directory(
    trimmer: &dyn Trimmer,
    dir: &Path,
    quiet: bool,
    interrupted: &AtomicBool,
) -> Result<TrimReport> {
    let threshold = Threshold::default();
    let scratch = tempfile::Builder::new()
        .suffix(".mp3")
        .tempfile()
        .context("could not create temporary file for trimming")?;

    let mut report = TrimReport::default();
    for entry in fs::read_dir(dir).with_context(|| format!("could not read {}", dir.display()))? {
        let path = entry?.path();
        if !is_mp3(&path) {
            continue;
        }
        if interrupted.load(Ordering::SeqCst) {
            report.interrupted = true;
            break;
        }

        match trim_file(trimmer, &path, scratch.path(), threshold) {
            Ok(()) => {
                if !quiet {
                    println!("Silence trimmed from {}", file_name(&path));
                }
                report.trimmed.push(path);
            }
            // A failure right after the interrupt signal is the child dying
            // to the same signal, not a broken file.
            Err(_) if interrupted.load(Ordering::SeqCst) => {
                report.interrupted = true;
                break;
            }
            Err(_) => {
                println!("WARNING: Failed to trim silence from {}", file_name(&path));
                report.failed.push(path);
            }
        }
    }
    Ok(report)
}

fn trim_file(
    trimmer: &dyn Trimmer,
    file: &Path,
    scratch: &Path,
    threshold: Threshold,
) -> Result<(), TrimError> {
    trimmer.strip_silence(file, scratch, Edge::Trailing, threshold)?;
    trimmer.strip_silence(scratch, file, Edge::Leading, threshold)?;
    Ok(())
}

fn is_mp3(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
