//  Created by Hasebe Masahiko on 2024/09/28.
//  Copyright (c) 2024 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fmt, fs, io};

use crate::wave::params::{WaveParams, WaveState};
use crate::wavelib::*;

//*******************************************************************
//      Settings Error
//*******************************************************************
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(toml::de::Error),
}
impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "Failed to parse TOML: {e}"),
        }
    }
}
impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}
impl From<io::Error> for SettingsError {
    fn from(error: io::Error) -> Self {
        SettingsError::Io(error)
    }
}
impl From<toml::de::Error> for SettingsError {
    fn from(error: toml::de::Error) -> Self {
        SettingsError::Parse(error)
    }
}

//*******************************************************************
//      Settings
//*******************************************************************
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}
impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
        }
    }
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSetting {
    pub kind: WaveKind,
    pub playing: bool,
    pub amplitude: f32,
    pub frequency: f32,
    pub wavelength: f32,
    pub speed: f32,
    pub show_points: bool,
}
impl Default for WaveSetting {
    fn default() -> Self {
        Self {
            kind: WaveKind::Transverse,
            playing: true,
            amplitude: AMPLITUDE_RANGE.default,
            frequency: FREQUENCY_RANGE.default,
            wavelength: DEFAULT_WAVELENGTH,
            speed: SPEED_RANGE.default,
            show_points: true,
        }
    }
}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSize,
    pub wave: WaveSetting,
}

impl Settings {
    const SETTINGS_FILE: &'static str = "settings.toml";

    pub fn from_toml(text: &str) -> Result<Settings, SettingsError> {
        Ok(toml::from_str(text)?)
    }
    pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
    /// 見つからなければ既定値、壊れていればエラー
    pub fn load() -> Result<Settings, SettingsError> {
        match Self::find_setting_file() {
            Some(path) => {
                log::info!("Settings: {}", path.display());
                Self::load_from(&path)
            }
            None => {
                log::warn!("Settings file not found. Using defaults.");
                Ok(Settings::default())
            }
        }
    }
    /// working directory first, then the executable's directory
    pub fn find_setting_file() -> Option<PathBuf> {
        let here = PathBuf::from(Self::SETTINGS_FILE);
        if here.is_file() {
            return Some(here);
        }
        let exe_path = env::current_exe().ok()?;
        let beside = exe_path.parent()?.join(Self::SETTINGS_FILE);
        beside.is_file().then_some(beside)
    }
    /// Writes through the store setters, so bad values are clamped or ignored.
    pub fn apply_to(&self, state: &mut WaveState) {
        let w = &self.wave;
        state.set_kind(w.kind);
        state.playing = w.playing;
        state.show_points = w.show_points;
        let prm: &mut WaveParams = &mut state.params;
        prm.set_amplitude(w.amplitude);
        prm.set_frequency(w.frequency);
        prm.set_wavelength(w.wavelength);
        prm.set_speed(w.speed);
    }
    pub fn wave_state(&self) -> WaveState {
        let mut st = WaveState::default();
        self.apply_to(&mut st);
        st
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_full_file() {
        let sts = Settings::from_toml(
            r#"
            [window]
            width = 1280.0
            height = 640.0

            [wave]
            kind = "longitudinal"
            playing = false
            amplitude = 40.0
            frequency = 1.5
            wavelength = 200.0
            speed = 2.0
            show_points = false
            "#,
        )
        .unwrap();
        assert_relative_eq!(sts.window.width, 1280.0);
        let st = sts.wave_state();
        assert_eq!(st.kind, WaveKind::Longitudinal);
        assert!(!st.playing);
        assert!(!st.show_points);
        assert_relative_eq!(st.params.frequency(), 1.5);
        assert_relative_eq!(st.params.wavelength(), 200.0);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let sts = Settings::from_toml("[wave]\nspeed = 1.5\n").unwrap();
        assert_eq!(sts.window, WindowSize::default());
        assert_relative_eq!(sts.wave.amplitude, 60.0);
        assert_relative_eq!(sts.wave_state().params.speed(), 1.5);
    }

    #[test]
    fn bad_values_go_through_the_store() {
        let sts = Settings::from_toml("[wave]\namplitude = -5.0\nspeed = 10.0\n").unwrap();
        let st = sts.wave_state();
        assert_relative_eq!(st.params.amplitude(), 60.0);
        assert_relative_eq!(st.params.speed(), 3.0);
    }

    #[test]
    fn parse_error_is_typed() {
        let err = Settings::from_toml("[wave]\nkind = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse TOML"));

        let err = Settings::load_from(Path::new("/nonexistent/settings.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
