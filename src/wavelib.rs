//  Created by Hasebe Masahiko on 2025/06/14.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use serde::{Deserialize, Serialize};

//*******************************************************************
//          wave kind
//*******************************************************************
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveKind {
    #[default]
    Transverse, // 横波: 縦方向に変位
    Longitudinal, // 縦波: 横方向に変位
}
impl WaveKind {
    pub fn toggled(self) -> WaveKind {
        match self {
            WaveKind::Transverse => WaveKind::Longitudinal,
            WaveKind::Longitudinal => WaveKind::Transverse,
        }
    }
    pub fn caption(self) -> &'static str {
        match self {
            WaveKind::Transverse => "Transverse wave",
            WaveKind::Longitudinal => "Longitudinal wave",
        }
    }
}

//*******************************************************************
//          time
//*******************************************************************
pub const FRAME_STEP_SEC: f64 = 0.016; // nominal step, independent of real frame delta

//*******************************************************************
//          viewport scaling
//*******************************************************************
pub const REF_AMPLITUDE_UNIT: f32 = 400.0; // amplitude / 400 * height
pub const REF_WAVELENGTH_UNIT: f32 = 800.0; // wavelength / 800 * width
pub const MIN_WAVELENGTH_PX: f32 = 1.0e-3;
pub const GRID_DIVISION: f32 = 8.0; // cell = min(w, h) / 8

//*******************************************************************
//          longitudinal markers
//*******************************************************************
pub const MARKER_SPACING_PX: u32 = 20;
pub const LONGITUDINAL_SWAY: f32 = 0.8;
pub const MARKER_HALF_LENGTH: f32 = 0.1; // ratio of height

//*******************************************************************
//          tracking points
//*******************************************************************
pub const TRACKING_POINT_RATIO: [f32; 2] = [1.0 / 3.0, 0.6];

//*******************************************************************
//          parameter range (min, max, step, default)
//*******************************************************************
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}
impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }
    /// 範囲外は丸め、非正・非有限は None
    pub fn accept(&self, value: f32) -> Option<f32> {
        if !value.is_finite() || value <= 0.0 {
            None
        } else {
            Some(value.clamp(self.min, self.max))
        }
    }
}
pub const AMPLITUDE_RANGE: ParamRange = ParamRange::new(10.0, 80.0, 1.0, 60.0);
pub const FREQUENCY_RANGE: ParamRange = ParamRange::new(0.1, 2.0, 0.1, 0.5);
pub const SPEED_RANGE: ParamRange = ParamRange::new(0.1, 3.0, 0.1, 1.0);
pub const DEFAULT_WAVELENGTH: f32 = 150.0;

//*******************************************************************
//          colors (r, g, b)
//*******************************************************************
pub const BG_COLOR: (u8, u8, u8) = (255, 255, 255);
pub const GRID_COLOR: (u8, u8, u8) = (0xe2, 0xe8, 0xf0);
pub const TRANSVERSE_COLOR: (u8, u8, u8) = (0x3b, 0x82, 0xf6);
pub const LONGITUDINAL_COLOR: (u8, u8, u8) = (0x63, 0x66, 0xf1);
pub const POINT_COLOR: [(u8, u8, u8); 2] = [(0xef, 0x44, 0x44), (0x22, 0xc5, 0x5e)];
pub const LABEL_COLOR: (u8, u8, u8) = (0x47, 0x55, 0x69);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_clamps_and_rejects() {
        assert_eq!(AMPLITUDE_RANGE.accept(120.0), Some(80.0));
        assert_eq!(AMPLITUDE_RANGE.accept(3.0), Some(10.0));
        assert_eq!(FREQUENCY_RANGE.accept(0.7), Some(0.7));
        assert_eq!(SPEED_RANGE.accept(0.0), None);
        assert_eq!(SPEED_RANGE.accept(-1.0), None);
        assert_eq!(SPEED_RANGE.accept(f32::NAN), None);
        assert_eq!(SPEED_RANGE.accept(f32::INFINITY), None);
    }

    #[test]
    fn kind_toggles() {
        assert_eq!(WaveKind::Transverse.toggled(), WaveKind::Longitudinal);
        assert_eq!(WaveKind::Longitudinal.toggled(), WaveKind::Transverse);
    }
}
