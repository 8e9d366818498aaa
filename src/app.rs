use crate::cli::Args;
use crate::profile::Profile;
use crate::sox::{self, Sox, Trimmer};
use crate::trim::trim_directory;
use crate::workdir;
use crate::ytdlp::{self, FetchOptions, Fetcher, YtDlp};
use anyhow::{Context, Result, bail};
use comfy_table::{Table, presets::UTF8_FULL};
use std::fs;
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

const DEFAULT_SONG_LIST: &str = "song-list.txt";
const INTERRUPT_NOTICE: &str =
    "INTERRUPTED: Terminating. Some files may be left partially processed.";

/// Fully resolved options for one run: CLI arguments merged over the
/// optional profile file, with the working directory already decided.
/// Built once at startup, read-only afterwards.
#[derive(Debug)]
pub struct Config {
    pub workdir: PathBuf,
    pub song_list: PathBuf,
    /// The list path as the user gave it, for messages.
    pub song_list_name: String,
    pub playlist: bool,
    pub force: bool,
    pub quiet: bool,
    pub download: bool,
    pub trim: bool,
    pub clear: bool,
}

impl Config {
    pub fn resolve(args: &Args) -> Result<Self> {
        let profile = match &args.profile {
            Some(path) => Profile::load(path)
                .with_context(|| format!("could not load profile \"{path}\""))?,
            None => Profile::default(),
        };
        let on = |cli: bool, saved: Option<bool>| cli || saved.unwrap_or(false);

        let notrim = on(args.notrim, profile.notrim);
        let nodownload = on(args.nodownload, profile.nodownload);
        // clap already rejects the CLI pair; the profile can reintroduce it.
        if notrim && nodownload {
            bail!("--notrim and --nodownload cannot be combined");
        }

        let song_list_name = args
            .song_list
            .clone()
            .or(profile.song_list)
            .unwrap_or_else(|| DEFAULT_SONG_LIST.to_string());
        let workdir = workdir::resolve(on(args.wd, profile.wd))?;
        let song_list = {
            let path = PathBuf::from(&song_list_name);
            if path.is_absolute() {
                path
            } else {
                workdir.join(path)
            }
        };

        Ok(Self {
            workdir,
            song_list,
            song_list_name,
            playlist: on(args.playlist, profile.playlist),
            force: on(args.force, profile.force),
            quiet: on(args.quiet, profile.quiet),
            download: !nodownload,
            trim: !notrim,
            clear: !on(args.noclear, profile.noclear),
        })
    }
}

pub fn run(args: Args) -> Result<()> {
    if args.check_tools {
        return print_tool_report();
    }
    let config = Config::resolve(&args)?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("could not install interrupt handler")?;

    execute(&config, &YtDlp, &Sox, &interrupted)
}

fn execute(
    config: &Config,
    fetcher: &dyn Fetcher,
    trimmer: &dyn Trimmer,
    interrupted: &AtomicBool,
) -> Result<()> {
    if config.download {
        if !config.song_list.is_file() {
            bail!("Could not find song list \"{}\".", config.song_list_name);
        }

        let fetched = fetcher.fetch_batch(
            &config.song_list,
            &config.workdir,
            FetchOptions {
                quiet: config.quiet,
                force: config.force,
                playlist: config.playlist,
            },
        );
        // A non-zero exit right after Ctrl-C is the child dying to the same
        // signal, not a download failure.
        if interrupted.load(Ordering::SeqCst) {
            println!("{INTERRUPT_NOTICE}");
            return Ok(());
        }
        fetched.context("Could not download from list. Try \"yt-dlp -U\"")?;

        if config.clear {
            fs::write(&config.song_list, "").with_context(|| {
                format!("could not clear song list \"{}\"", config.song_list_name)
            })?;
            if !config.quiet {
                println!("Download list cleared");
            }
        }
    }

    if config.trim {
        if interrupted.load(Ordering::SeqCst) {
            println!("{INTERRUPT_NOTICE}");
            return Ok(());
        }
        let report = trim_directory(trimmer, &config.workdir, config.quiet, interrupted)?;
        if report.interrupted {
            println!("{INTERRUPT_NOTICE}");
        }
    }

    Ok(())
}

fn print_tool_report() -> Result<()> {
    let checks = [
        ("yt-dlp", ytdlp::probe().map_err(|err| err.to_string())),
        ("sox", sox::probe().map_err(|err| err.to_string())),
    ];

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Tool", "Status", "Version"]);

    let mut missing = Vec::new();
    for (name, outcome) in checks {
        match outcome {
            Ok(version) => {
                table.add_row(vec![name.to_string(), "ok".to_string(), version]);
            }
            Err(err) => {
                table.add_row(vec![name.to_string(), "missing".to_string(), err]);
                missing.push(name);
            }
        }
    }
    println!("{table}");

    if !missing.is_empty() {
        bail!("missing required tools: {}", missing.join(", "));
    }
    Ok(())
}
