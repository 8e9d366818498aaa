use anyhow::{Context, Result};
use directories::UserDirs;
use std::env;
use std::path::PathBuf;

/// Resolve the directory every step operates in. With `use_cwd` the program
/// stays where it was started; otherwise the user's downloads directory is
/// used. The directory is threaded through the run explicitly, the process
/// current directory is never changed.
pub fn resolve(use_cwd: bool) -> Result<PathBuf> {
    if use_cwd {
        return env::current_dir().context("could not determine current directory");
    }
    let dirs = UserDirs::new().context("could not determine home directory")?;
    Ok(dirs
        .download_dir()
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs.home_dir().join("Downloads")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cwd_mode_returns_current_directory() {
        let resolved = resolve(true).unwrap();
        assert_eq!(resolved, env::current_dir().unwrap());
    }

    #[test]
    fn default_mode_resolves_under_home() {
        let resolved = resolve(false).unwrap();
        let home = UserDirs::new().unwrap().home_dir().to_path_buf();
        assert!(resolved.starts_with(&home));
    }
}
