mod app;
mod cli;
mod profile;
mod sox;
mod trim;
mod workdir;
mod ytdlp;

use clap::Parser;

fn main() {
    let args = cli::Args::parse();
    if let Err(err) = app::run(args) {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}
