//  Created by Hasebe Masahiko on 2025/06/14.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use crate::wavelib::*;

//*******************************************************************
//      Wave Parameters
//          every field is kept strictly positive
//*******************************************************************
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    amplitude: f32,  // [units]
    frequency: f32,  // [Hz]
    wavelength: f32, // [units]
    speed: f32,      // multiplier
}
impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude: AMPLITUDE_RANGE.default,
            frequency: FREQUENCY_RANGE.default,
            wavelength: DEFAULT_WAVELENGTH,
            speed: SPEED_RANGE.default,
        }
    }
}
impl WaveParams {
    pub fn new(amplitude: f32, frequency: f32, wavelength: f32, speed: f32) -> Self {
        let mut prm = Self::default();
        prm.set_amplitude(amplitude);
        prm.set_frequency(frequency);
        prm.set_wavelength(wavelength);
        prm.set_speed(speed);
        prm
    }
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }
    pub fn frequency(&self) -> f32 {
        self.frequency
    }
    pub fn wavelength(&self) -> f32 {
        self.wavelength
    }
    pub fn speed(&self) -> f32 {
        self.speed
    }

    //*******************************************************************
    //      Setters: return whether the write was accepted
    //*******************************************************************
    pub fn set_amplitude(&mut self, value: f32) -> bool {
        Self::write("amplitude", &mut self.amplitude, AMPLITUDE_RANGE.accept(value), value)
    }
    pub fn set_frequency(&mut self, value: f32) -> bool {
        Self::write("frequency", &mut self.frequency, FREQUENCY_RANGE.accept(value), value)
    }
    pub fn set_speed(&mut self, value: f32) -> bool {
        Self::write("speed", &mut self.speed, SPEED_RANGE.accept(value), value)
    }
    /// wavelength has no slider, so only the sign/finiteness is checked
    pub fn set_wavelength(&mut self, value: f32) -> bool {
        let accepted = (value.is_finite() && value > 0.0).then_some(value);
        Self::write("wavelength", &mut self.wavelength, accepted, value)
    }
    fn write(name: &str, slot: &mut f32, accepted: Option<f32>, requested: f32) -> bool {
        match accepted {
            Some(v) => {
                *slot = v;
                log::debug!("{name} <- {v}");
                true
            }
            None => {
                log::warn!("Ignored {name} write: {requested}");
                false
            }
        }
    }

    //*******************************************************************
    //      Slider steps
    //*******************************************************************
    pub fn step_amplitude(&mut self, dir: i32) {
        let v = Self::stepped(self.amplitude, dir, AMPLITUDE_RANGE);
        self.set_amplitude(v);
    }
    pub fn step_frequency(&mut self, dir: i32) {
        let v = Self::stepped(self.frequency, dir, FREQUENCY_RANGE);
        self.set_frequency(v);
    }
    pub fn step_speed(&mut self, dir: i32) {
        let v = Self::stepped(self.speed, dir, SPEED_RANGE);
        self.set_speed(v);
    }
    /// 目盛りに揃える (0.1 刻みの誤差が溜まらないように)
    fn stepped(crnt: f32, dir: i32, range: ParamRange) -> f32 {
        let idx = (crnt / range.step).round() + dir.signum() as f32;
        (idx * range.step).clamp(range.min, range.max)
    }
}

//*******************************************************************
//      Wave State (Parameter Store)
//*******************************************************************
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveState {
    pub kind: WaveKind,
    pub playing: bool,
    pub show_points: bool,
    pub params: WaveParams,
}
impl Default for WaveState {
    fn default() -> Self {
        Self {
            kind: WaveKind::Transverse,
            playing: true,
            show_points: true,
            params: WaveParams::default(),
        }
    }
}
impl WaveState {
    pub fn set_kind(&mut self, kind: WaveKind) {
        if self.kind != kind {
            log::debug!("Wave kind: {:?} -> {:?}", self.kind, kind);
            self.kind = kind;
        }
    }
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
        log::debug!("{}", if self.playing { "Play" } else { "Pause" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_non_positive_writes() {
        let mut prm = WaveParams::default();
        assert!(!prm.set_amplitude(0.0));
        assert!(!prm.set_frequency(-0.5));
        assert!(!prm.set_wavelength(0.0));
        assert!(!prm.set_speed(f32::NAN));
        assert_eq!(prm, WaveParams::default());
    }

    #[test]
    fn clamps_out_of_range_writes() {
        let mut prm = WaveParams::default();
        assert!(prm.set_amplitude(500.0));
        assert_relative_eq!(prm.amplitude(), 80.0);
        assert!(prm.set_frequency(0.01));
        assert_relative_eq!(prm.frequency(), 0.1);
        assert!(prm.set_speed(9.0));
        assert_relative_eq!(prm.speed(), 3.0);
        assert!(prm.set_wavelength(1234.0));
        assert_relative_eq!(prm.wavelength(), 1234.0);
    }

    #[test]
    fn steps_stay_on_the_grid() {
        let mut prm = WaveParams::default();
        for _ in 0..7 {
            prm.step_frequency(1);
        }
        assert_relative_eq!(prm.frequency(), 1.2, epsilon = 1e-5);
        for _ in 0..40 {
            prm.step_frequency(-1);
        }
        assert_relative_eq!(prm.frequency(), 0.1, epsilon = 1e-5);

        prm.step_amplitude(1);
        assert_relative_eq!(prm.amplitude(), 61.0);
        for _ in 0..40 {
            prm.step_speed(1);
        }
        assert_relative_eq!(prm.speed(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn state_toggles() {
        let mut st = WaveState::default();
        st.toggle_playing();
        assert!(!st.playing);
        st.set_kind(WaveKind::Longitudinal);
        assert_eq!(st.kind, WaveKind::Longitudinal);
    }
}
