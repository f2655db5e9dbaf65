use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::forecast::DEFAULT_PACE_WINDOW;

const CONFIG_FILE_NAME: &str = "config.json";
pub const HOME_ENV: &str = "INBOUND_HOME";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Root for the series files; `~/.inbound` when unset.
    pub data_dir: Option<PathBuf>,
    /// Trailing business days averaged into the pace.
    pub pace_window: usize,
    /// Volume assumed per remaining holiday in the pace landing.
    pub holiday_pace: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            pace_window: DEFAULT_PACE_WINDOW,
            holiday_pace: 0.0,
        }
    }
}

impl Settings {
    /// Reads `config.json` from the resolved data directory, if any.
    ///
    /// `override_dir` (the CLI flag) wins over `INBOUND_HOME`, which wins
    /// over the home directory default.
    pub fn load(override_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match override_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let mut settings = Self::load_from(&dir)?;
        settings.data_dir = Some(dir);
        Ok(settings)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| anyhow!("Invalid config {}: {}", path.display(), e))?;
        if settings.pace_window == 0 {
            return Err(anyhow!("pace_window must be at least 1"));
        }
        Ok(settings)
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    pub fn series_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join("series"))
    }
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".inbound"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(settings.pace_window, 7);
        assert_eq!(settings.holiday_pace, 0.0);
        assert_eq!(settings.series_dir().unwrap(), dir.path().join("series"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"pace_window": 5}"#).unwrap();
        let settings = Settings::load_from(dir.path()).unwrap();
        assert_eq!(settings.pace_window, 5);
        assert_eq!(settings.holiday_pace, 0.0);
    }

    #[test]
    fn test_rejects_zero_window_and_bad_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{"pace_window": 0}"#).unwrap();
        assert!(Settings::load_from(dir.path()).is_err());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "not json").unwrap();
        assert!(Settings::load_from(dir.path()).is_err());
    }
}
