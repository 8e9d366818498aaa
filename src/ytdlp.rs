use std::{
    io,
    path::Path,
    process::{Command, ExitStatus},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("`yt-dlp` command not found. Please ensure it is installed and in your PATH.")]
    CommandNotFound,
    #[error("yt-dlp exited with {0}")]
    Failed(ExitStatus),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Options forwarded to the downloader for one batch.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub quiet: bool,
    pub force: bool,
    pub playlist: bool,
}

/// Capability of fetching a batch of audio tracks into a directory.
///
/// One invocation covers the whole song list; the aggregate exit status is
/// the only failure signal. With `force` the tool keeps going past broken
/// items and per-item failures never surface here.
pub trait Fetcher {
    fn fetch_batch(
        &self,
        song_list: &Path,
        dir: &Path,
        opts: FetchOptions,
    ) -> Result<(), FetchError>;
}

pub struct YtDlp;

impl Fetcher for YtDlp {
    fn fetch_batch(
        &self,
        song_list: &Path,
        dir: &Path,
        opts: FetchOptions,
    ) -> Result<(), FetchError> {
        let mut command = Command::new("yt-dlp");
        command.args([
            "--extract-audio",
            "--audio-format",
            "mp3",
            "--audio-quality",
            "0",
            "--geo-bypass",
        ]);
        if opts.quiet {
            command.args(["--quiet", "--console-title"]);
        }
        if opts.force {
            command.arg("--ignore-errors");
        }
        command.arg(if opts.playlist {
            "--yes-playlist"
        } else {
            "--no-playlist"
        });
        // Bare lines that are not URLs are treated as YouTube searches.
        command.args(["--default-search", "ytsearch"]);
        command.arg("--batch-file").arg(song_list);
        command.args(["--output", "%(title)s.%(ext)s"]);
        command.current_dir(dir);

        let status = command.status().map_err(map_spawn_error)?;
        if !status.success() {
            return Err(FetchError::Failed(status));
        }
        Ok(())
    }
}

/// Report the installed yt-dlp version, for the tools report.
pub fn probe() -> Result<String, FetchError> {
    let output = Command::new("yt-dlp")
        .arg("--version")
        .output()
        .map_err(map_spawn_error)?;
    if !output.status.success() {
        return Err(FetchError::Failed(output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn map_spawn_error(err: io::Error) -> FetchError {
    if err.kind() == io::ErrorKind::NotFound {
        FetchError::CommandNotFound
    } else {
        FetchError::Io(err)
    }
}
