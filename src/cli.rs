use clap::Parser;

/// Downloads audio from YouTube, Soundcloud, Bandcamp and more using yt-dlp,
/// and trims silence from the downloaded files using SoX. URLs of songs to
/// download are read from the file given by --song-list, one per line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// File containing URLs to download (defaults to "song-list.txt")
    #[arg(long, value_name = "FILE")]
    pub song_list: Option<String>,

    /// Download all songs in any playlists linked to by URLs
    #[arg(long)]
    pub playlist: bool,

    /// Do not abort the batch if a single download fails
    #[arg(long)]
    pub force: bool,

    /// Suppress downloader output and per-file trim notices
    #[arg(long)]
    pub quiet: bool,

    /// Run in the current directory rather than the downloads directory
    /// (must contain the song list)
    #[arg(long)]
    pub wd: bool,

    /// Do not trim silence from .mp3 files in the working directory
    #[arg(long, conflicts_with = "nodownload")]
    pub notrim: bool,

    /// Do not download or clear the song list (only trim silence)
    #[arg(long)]
    pub nodownload: bool,

    /// Do not clear the song list after downloading (implied by --nodownload)
    #[arg(long)]
    pub noclear: bool,

    /// Path to a JSON profile with saved defaults. CLI flags override values
    /// from the profile.
    #[arg(short = 'p', long, value_name = "FILE")]
    pub profile: Option<String>,

    /// Check that yt-dlp and sox are installed and show their versions
    #[arg(long)]
    pub check_tools: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notrim_conflicts_with_nodownload() {
        let result = Args::try_parse_from(["songpull", "--notrim", "--nodownload"]);
        assert!(result.is_err());
    }

    #[test]
    fn all_flags_default_off() {
        let args = Args::try_parse_from(["songpull"]).unwrap();
        assert!(args.song_list.is_none());
        assert!(!args.playlist);
        assert!(!args.force);
        assert!(!args.quiet);
        assert!(!args.wd);
        assert!(!args.notrim);
        assert!(!args.nodownload);
        assert!(!args.noclear);
        assert!(args.profile.is_none());
        assert!(!args.check_tools);
    }

    #[test]
    fn song_list_takes_a_value() {
        let args = Args::try_parse_from(["songpull", "--song-list", "mix.txt"]).unwrap();
        assert_eq!(args.song_list.as_deref(), Some("mix.txt"));
    }
}
