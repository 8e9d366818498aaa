use regex::Regex;
use std::{
    io,
    path::Path,
    process::{Command, ExitStatus},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrimError {
    #[error("`sox` command not found. Please ensure it is installed and in your PATH.")]
    CommandNotFound,
    #[error("sox exited with {0}")]
    Failed(ExitStatus),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Which edge of the audio to strip silence from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Leading,
    Trailing,
}

/// Anything quieter than `amplitude_pct` percent of full scale for at least
/// `duration_secs` seconds counts as silence.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    pub duration_secs: f64,
    pub amplitude_pct: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            duration_secs: 0.1,
            amplitude_pct: 0.1,
        }
    }
}

/// Capability of stripping silence from one edge of an audio file, writing
/// the result to a separate destination.
pub trait Trimmer {
    fn strip_silence(
        &self,
        input: &Path,
        output: &Path,
        edge: Edge,
        threshold: Threshold,
    ) -> Result<(), TrimError>;
}

pub struct Sox;

impl Trimmer for Sox {
    fn strip_silence(
        &self,
        input: &Path,
        output: &Path,
        edge: Edge,
        threshold: Threshold,
    ) -> Result<(), TrimError> {
        let duration = threshold.duration_secs.to_string();
        let amplitude = format!("{}%", threshold.amplitude_pct);

        let mut command = Command::new("sox");
        command.arg(input).arg(output);
        // The silence effect only strips the leading edge, so trailing
        // silence is removed by reversing the signal around it.
        if edge == Edge::Trailing {
            command.arg("reverse");
        }
        command.args(["silence", "1", &duration, &amplitude]);
        if edge == Edge::Trailing {
            command.arg("reverse");
        }

        let status = command.status().map_err(map_spawn_error)?;
        if !status.success() {
            return Err(TrimError::Failed(status));
        }
        Ok(())
    }
}

/// Report the installed sox version, for the tools report.
pub fn probe() -> Result<String, TrimError> {
    let output = Command::new("sox")
        .arg("--version")
        .output()
        .map_err(map_spawn_error)?;
    if !output.status.success() {
        return Err(TrimError::Failed(output.status));
    }
    let text = String::from_utf8_lossy(&output.stdout);
    // e.g. "sox:      SoX v14.4.2"
    let re = Regex::new(r"SoX v?(\d+\.\d+(?:\.\d+)?)").unwrap();
    Ok(re
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| text.trim().to_string()))
}

fn map_spawn_error(err: io::Error) -> TrimError {
    if err.kind() == io::ErrorKind::NotFound {
        TrimError::CommandNotFound
    } else {
        TrimError::Io(err)
    }
}
