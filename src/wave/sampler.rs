//  Created by Hasebe Masahiko on 2025/06/14.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use std::f32::consts::TAU;

use super::params::WaveParams;
use crate::wavelib::*;

//*******************************************************************
//      Waveform Sampler
//          physical parameters rescaled to the current viewport
//*******************************************************************
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSampler {
    visual_amplitude: f32,  // [px]
    visual_wavelength: f32, // [px], never below MIN_WAVELENGTH_PX
    frequency: f32,         // [Hz]
}
impl WaveSampler {
    pub fn new(prm: &WaveParams, width: f32, height: f32) -> Self {
        let amp = prm.amplitude() / REF_AMPLITUDE_UNIT * height;
        let wl = prm.wavelength() / REF_WAVELENGTH_UNIT * width;
        Self {
            visual_amplitude: if amp.is_finite() { amp.max(0.0) } else { 0.0 },
            visual_wavelength: if wl.is_finite() && wl > MIN_WAVELENGTH_PX {
                wl
            } else {
                MIN_WAVELENGTH_PX
            },
            frequency: if prm.frequency().is_finite() {
                prm.frequency().max(0.0)
            } else {
                0.0
            },
        }
    }
    pub fn visual_amplitude(&self) -> f32 {
        self.visual_amplitude
    }
    pub fn visual_wavelength(&self) -> f32 {
        self.visual_wavelength
    }

    /// t·f − x/λ, reduced to one cycle before going to f32
    fn cycle(&self, x: f32, t: f64) -> f32 {
        let c = t * self.frequency as f64 - (x / self.visual_wavelength) as f64;
        if c.is_finite() {
            c.rem_euclid(1.0) as f32
        } else {
            0.0
        }
    }
    /// vertical offset [px]
    pub fn transverse(&self, x: f32, t: f64) -> f32 {
        self.visual_amplitude * (TAU * self.cycle(x, t)).sin()
    }
    /// horizontal offset of a marker resting at `rest_x` [px]
    pub fn longitudinal(&self, rest_x: f32, t: f64) -> f32 {
        LONGITUDINAL_SWAY * self.visual_amplitude * (TAU * self.cycle(rest_x, t)).sin()
    }
    pub fn displacement(&self, kind: WaveKind, x: f32, t: f64) -> f32 {
        match kind {
            WaveKind::Transverse => self.transverse(x, t),
            WaveKind::Longitudinal => self.longitudinal(x, t),
        }
    }
}

//*******************************************************************
//      Layout helpers
//*******************************************************************
/// rest positions of longitudinal markers, one per MARKER_SPACING_PX
pub fn marker_rest_positions(width: u32) -> impl Iterator<Item = f32> {
    let count = width / MARKER_SPACING_PX;
    (0..count).map(move |i| i as f32 / count as f32 * width as f32)
}
pub fn highlighted_marker(width: u32) -> usize {
    (width / MARKER_SPACING_PX / 3) as usize
}
pub fn tracking_points(width: u32) -> impl Iterator<Item = f32> {
    TRACKING_POINT_RATIO.into_iter().map(move |r| width as f32 * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn scenario() -> WaveSampler {
        WaveSampler::new(&WaveParams::new(40.0, 0.5, 150.0, 1.0), 800.0, 400.0)
    }

    #[test]
    fn scales_with_viewport() {
        let sp = scenario();
        assert_relative_eq!(sp.visual_amplitude(), 40.0);
        assert_relative_eq!(sp.visual_wavelength(), 150.0);

        let half = WaveSampler::new(&WaveParams::new(40.0, 0.5, 150.0, 1.0), 400.0, 200.0);
        assert_relative_eq!(half.visual_amplitude(), 20.0);
        assert_relative_eq!(half.visual_wavelength(), 75.0);
    }

    #[test]
    fn center_line_then_crest() {
        let sp = scenario();
        assert_abs_diff_eq!(sp.transverse(0.0, 0.0), 0.0, epsilon = 1e-4);
        // quarter of the 2s period
        assert_abs_diff_eq!(sp.transverse(0.0, 0.5), 40.0, epsilon = 1e-3);
    }

    #[test]
    fn periodic_in_time_and_space() {
        let sp = scenario();
        let period = 1.0 / 0.5;
        for x in [0.0, 13.0, 150.0, 377.5, 799.0] {
            for t in [0.0, 0.3, 4.71, 100.0] {
                let d = sp.transverse(x, t);
                assert_abs_diff_eq!(d, sp.transverse(x, t + period), epsilon = 1e-2);
                assert_abs_diff_eq!(
                    d,
                    sp.transverse(x + sp.visual_wavelength(), t),
                    epsilon = 1e-2
                );
            }
        }
    }

    #[test]
    fn longitudinal_is_scaled_transverse() {
        let sp = scenario();
        for x in [0.0, 40.0, 260.0] {
            assert_relative_eq!(
                sp.longitudinal(x, 1.25),
                0.8 * sp.transverse(x, 1.25),
                epsilon = 1e-4
            );
        }
        assert_relative_eq!(
            sp.displacement(WaveKind::Longitudinal, 10.0, 0.7),
            sp.longitudinal(10.0, 0.7)
        );
    }

    #[test]
    fn degenerate_viewport_stays_finite() {
        let prm = WaveParams::default();
        let sp = WaveSampler::new(&prm, 0.0, 0.0);
        assert_relative_eq!(sp.visual_wavelength(), MIN_WAVELENGTH_PX);
        for x in [0.0, 1.0, 799.0] {
            let d = sp.transverse(x, 3.0);
            assert!(d.is_finite());
            assert_abs_diff_eq!(d, 0.0);
        }
        let sp = WaveSampler::new(&prm, f32::NAN, f32::INFINITY);
        assert!(sp.transverse(5.0, 1.0).is_finite());
        assert!(sp.longitudinal(5.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn finite_over_whole_width() {
        let prm = WaveParams::new(80.0, 2.0, 1.0, 3.0);
        let sp = WaveSampler::new(&prm, 1920.0, 1080.0);
        for x in 0..1920 {
            for t in [0.0, 0.016, 1.0e6] {
                assert!(sp.transverse(x as f32, t).is_finite());
            }
        }
    }

    #[test]
    fn marker_layout() {
        let xs: Vec<f32> = marker_rest_positions(800).collect();
        assert_eq!(xs.len(), 40);
        assert_relative_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], 20.0);
        assert_eq!(highlighted_marker(800), 13);
        assert_eq!(marker_rest_positions(19).count(), 0);

        let pts: Vec<f32> = tracking_points(900).collect();
        assert_relative_eq!(pts[0], 300.0, epsilon = 1e-3);
        assert_relative_eq!(pts[1], 540.0, epsilon = 1e-3);
    }
}
