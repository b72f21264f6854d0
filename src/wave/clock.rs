//  Created by Hasebe Masahiko on 2025/06/14.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use crate::wavelib::FRAME_STEP_SEC;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Paused,
    Playing,
}

//*******************************************************************
//      Time Integrator
//          elapsed time never decreases; reset only by re-creation
//*******************************************************************
#[derive(Debug, Default, Clone)]
pub struct WaveClock {
    elapsed: f64, // [sec]
    transport: Transport,
    frames: u64,
}
impl WaveClock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
    pub fn transport(&self) -> Transport {
        self.transport
    }
    /// Number of ticks that actually moved time.
    pub fn frames(&self) -> u64 {
        self.frames
    }
    /// One scheduled frame. `playing` is sampled every tick (level, not edge).
    pub fn advance(&mut self, playing: bool, speed: f32) -> f64 {
        let next = if playing {
            Transport::Playing
        } else {
            Transport::Paused
        };
        if next != self.transport {
            log::debug!("Transport: {:?} -> {:?}", self.transport, next);
            self.transport = next;
        }
        if self.transport == Transport::Playing {
            // 負の速度や NaN で時間を巻き戻さない
            let speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
            let step = FRAME_STEP_SEC * speed as f64;
            if step > 0.0 {
                self.elapsed += step;
                self.frames += 1;
            }
        }
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pause_freezes_time() {
        let mut clk = WaveClock::new();
        for _ in 0..10 {
            clk.advance(true, 1.0);
        }
        let frozen = clk.elapsed();
        for _ in 0..30 {
            assert_eq!(clk.advance(false, 1.0), frozen);
        }
        assert_eq!(clk.transport(), Transport::Paused);
        assert_eq!(clk.frames(), 10);
    }

    #[test]
    fn speed_scales_rate() {
        let mut single = WaveClock::new();
        let mut double = WaveClock::new();
        for _ in 0..120 {
            single.advance(true, 1.0);
            double.advance(true, 2.0);
        }
        assert_relative_eq!(single.elapsed(), 120.0 * FRAME_STEP_SEC, epsilon = 1e-9);
        assert_relative_eq!(double.elapsed(), 2.0 * single.elapsed(), epsilon = 1e-9);
    }

    #[test]
    fn zero_speed_freezes_while_playing() {
        let mut clk = WaveClock::new();
        for _ in 0..60 {
            clk.advance(true, 0.0);
        }
        assert_eq!(clk.elapsed(), 0.0);
        assert_eq!(clk.transport(), Transport::Playing);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clk = WaveClock::new();
        clk.advance(true, 1.0);
        let before = clk.elapsed();
        clk.advance(true, -3.0);
        clk.advance(true, f32::NAN);
        assert_eq!(clk.elapsed(), before);
    }
}
