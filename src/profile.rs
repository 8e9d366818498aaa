use serde::{Deserialize, Serialize};

/// Saved defaults for a run, loaded from a JSON file given by --profile.
/// Every field is optional; flags passed on the command line win over
/// values from the profile.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub song_list: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wd: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notrim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodownload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noclear: Option<bool>,
}

impl Profile {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&contents)?;
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_profile_has_no_values() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.song_list.is_none());
        assert!(profile.playlist.is_none());
        assert!(profile.nodownload.is_none());
    }

    #[test]
    fn partial_profile_parses() {
        let profile: Profile =
            serde_json::from_str(r#"{"song_list": "mix.txt", "quiet": true}"#).unwrap();
        assert_eq!(profile.song_list.as_deref(), Some("mix.txt"));
        assert_eq!(profile.quiet, Some(true));
        assert!(profile.force.is_none());
    }

    #[test]
    fn load_reads_a_profile_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"playlist": true, "noclear": true}}"#).unwrap();

        let profile = Profile::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.playlist, Some(true));
        assert_eq!(profile.noclear, Some(true));
    }

    #[test]
    fn load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Profile::load(file.path().to_str().unwrap()).is_err());
    }
}
