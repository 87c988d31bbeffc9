//! Settings persistence.
//!
//! Settings are stored as a `bincode`-encoded `GameSettings`. Loading never
//! fails from the caller's point of view: [`GameSettings::load_or_default`]
//! logs the problem and falls back to the defaults.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::config::GameSettings;
use super::error::SettingsError;

/// File name used when the application does not choose one.
pub const DEFAULT_SETTINGS_FILE: &str = "config.ser";

impl GameSettings {
    /// Write the settings to `path`, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Read settings from `path`.
    ///
    /// Decoded settings whose board dimensions are unusable are rejected.
    pub fn try_load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let reader = BufReader::new(File::open(path)?);
        let settings: GameSettings = bincode::deserialize_from(reader)?;
        settings.validate_board()?;
        Ok(settings)
    }

    /// Read settings from `path`, substituting the defaults on any failure.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "couldn't load settings, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DiscColor, Player};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("reversi-persist-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("roundtrip");
        let settings = GameSettings::new()
            .with_board_size(12)
            .with_starting_player(Player::Two)
            .with_colors(DiscColor::Green, DiscColor::Orange);

        settings.save_to(&path).unwrap();
        let loaded = GameSettings::try_load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = temp_path("missing");
        assert!(matches!(
            GameSettings::try_load_from(&path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());
    }

    #[test]
    fn test_invalid_stored_settings_rejected() {
        let path = temp_path("odd");
        GameSettings::new().with_board_size(5).save_to(&path).unwrap();

        assert!(matches!(
            GameSettings::try_load_from(&path),
            Err(SettingsError::Invalid(_))
        ));
        assert_eq!(GameSettings::load_or_default(&path), GameSettings::default());

        std::fs::remove_file(&path).unwrap();
    }
}
