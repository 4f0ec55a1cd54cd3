//! Story configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults when the file or a
//! value is missing.
//!
//! # Configuration File Format
//!
//! ```ini
//! [playback]
//! tick_rate = 60
//! master_volume = 0.7
//!
//! [session]
//! autoplay = false
//! autoplay_delay = 2.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_MASTER_VOLUME: f32 = 0.7;
const DEFAULT_AUTOPLAY_DELAY: f32 = 2.0;
const DEFAULT_CONFIG_PATH: &str = "./fablestage.ini";

/// Playback and session settings.
#[derive(Resource, Debug, Clone)]
pub struct StoryConfig {
    /// Simulation ticks per second for the main loop.
    pub tick_rate: u32,
    /// Volume for narration voices and effects, 0.0..=1.0.
    pub master_volume: f32,
    /// Activate the first available affordance automatically.
    pub autoplay: bool,
    /// Seconds an affordance stays idle before autoplay activates it.
    pub autoplay_delay: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryConfig {
    pub fn new() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            master_volume: DEFAULT_MASTER_VOLUME,
            autoplay: false,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load settings from the INI file. Missing values retain their current
    /// (default) values. Returns an error if the file cannot be read.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(rate) = config.getuint("playback", "tick_rate").ok().flatten() {
            self.tick_rate = (rate as u32).max(1);
        }
        if let Some(vol) = config.getfloat("playback", "master_volume").ok().flatten() {
            self.master_volume = (vol as f32).clamp(0.0, 1.0);
        }
        if let Some(auto) = config.getbool("session", "autoplay").ok().flatten() {
            self.autoplay = auto;
        }
        if let Some(delay) = config.getfloat("session", "autoplay_delay").ok().flatten() {
            self.autoplay_delay = (delay as f32).max(0.0);
        }

        info!(
            "Loaded config: tick_rate={}, volume={}, autoplay={} (delay {}s)",
            self.tick_rate, self.master_volume, self.autoplay, self.autoplay_delay
        );

        Ok(())
    }

    /// Save settings to the INI file.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("playback", "tick_rate", Some(self.tick_rate.to_string()));
        config.set(
            "playback",
            "master_volume",
            Some(self.master_volume.to_string()),
        );
        config.set("session", "autoplay", Some(self.autoplay.to_string()));
        config.set(
            "session",
            "autoplay_delay",
            Some(self.autoplay_delay.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoryConfig::new();
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
        assert!(!config.autoplay);
        assert!((config.master_volume - DEFAULT_MASTER_VOLUME).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_is_error_but_defaults_stand() {
        let mut config = StoryConfig::with_path("/nonexistent/fablestage.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.tick_rate, DEFAULT_TICK_RATE);
    }
}
