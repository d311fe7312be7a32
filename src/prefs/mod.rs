//! Durable client-local preferences.
//!
//! A single key-value entry survives restarts: the dark-mode flag,
//! stored as the string `"true"` or `"false"` in
//! `~/.local/share/freshet/darkmode`. It is read once at process start
//! and written on every toggle.

use std::fs;
use std::path::PathBuf;

use crate::app::error::{FreshetError, Result};

pub struct Preferences {
    path: PathBuf,
}

impl Preferences {
    /// Open the preferences at the platform data directory, creating
    /// the directory if needed.
    pub fn open() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| FreshetError::Config("Could not find data directory".into()))?;
        let freshet_dir = data_dir.join("freshet");
        fs::create_dir_all(&freshet_dir)?;
        Ok(Self::at(freshet_dir.join("darkmode")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Stored dark-mode flag; a missing or unreadable entry reads as
    /// light mode.
    pub fn dark_mode(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|s| s.trim() == "true")
            .unwrap_or(false)
    }

    pub fn set_dark_mode(&self, dark: bool) -> Result<()> {
        fs::write(&self.path, if dark { "true" } else { "false" })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_reads_light() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::at(dir.path().join("darkmode"));
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::at(dir.path().join("darkmode"));

        prefs.set_dark_mode(true).unwrap();
        assert!(prefs.dark_mode());
        assert_eq!(
            fs::read_to_string(dir.path().join("darkmode")).unwrap(),
            "true"
        );

        prefs.set_dark_mode(false).unwrap();
        assert!(!prefs.dark_mode());
    }

    #[test]
    fn test_garbage_entry_reads_light() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("darkmode");
        fs::write(&path, "maybe").unwrap();
        assert!(!Preferences::at(path).dark_mode());
    }
}
