//  Created by Hasebe Masahiko on 2025/06/15.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use super::canvas::{Canvas, rgb};
use super::draw_graph::Resize;
use super::generative_view::get_view_instance;
use crate::wave::clock::WaveClock;
use crate::wave::params::WaveState;
use crate::wave::sampler::WaveSampler;
use crate::wavelib::*;

//*******************************************************************
//      Loop Handle
//          cancel() is the only way to stop the loop
//*******************************************************************
#[derive(Debug, Clone)]
pub struct LoopHandle {
    alive: Rc<Cell<bool>>,
}
impl LoopHandle {
    pub fn cancel(&self) {
        if self.alive.replace(false) {
            log::info!("Render loop cancelled");
        }
    }
    pub fn is_cancelled(&self) -> bool {
        !self.alive.get()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameResult {
    Drawn,
    Skipped,   // surface has no area yet
    Cancelled, // owner already disposed
}

/// Read-only inputs of one tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub state: &'a WaveState,
    pub rs: &'a Resize,
}

//*******************************************************************
//      Render Loop
//*******************************************************************
#[derive(Debug)]
pub struct RenderLoop {
    clock: WaveClock,
    alive: Rc<Cell<bool>>,
    frame_no: u64,
}
impl RenderLoop {
    pub fn start() -> (RenderLoop, LoopHandle) {
        let alive = Rc::new(Cell::new(true));
        log::info!("Render loop started");
        (
            RenderLoop {
                clock: WaveClock::new(),
                alive: alive.clone(),
                frame_no: 0,
            },
            LoopHandle { alive },
        )
    }
    /// Next tick is still requested.
    pub fn is_scheduled(&self) -> bool {
        self.alive.get()
    }
    pub fn clock(&self) -> &WaveClock {
        &self.clock
    }
    pub fn frame_no(&self) -> u64 {
        self.frame_no
    }

    //*******************************************************************
    //      Update Model: step 1 of a tick
    //*******************************************************************
    pub fn advance(&mut self, state: &WaveState) -> bool {
        if !self.is_scheduled() {
            return false;
        }
        self.frame_no += 1;
        self.clock.advance(state.playing, state.params.speed());
        true
    }

    //*******************************************************************
    //      View: steps 2-4 of a tick (no mutable self)
    //*******************************************************************
    pub fn render(&self, inputs: FrameInputs, canvas: &mut dyn Canvas) -> FrameResult {
        if !self.is_scheduled() {
            return FrameResult::Cancelled;
        }
        let rs = inputs.rs;
        rs.sync_surface(canvas);
        if !rs.is_drawable() {
            log::trace!("Frame {} skipped: empty surface", self.frame_no);
            return FrameResult::Skipped;
        }

        // 画面クリア
        canvas.clear(rgb(BG_COLOR));
        Self::grid(canvas, rs);

        let width = rs.get_full_size_x() as f32;
        let height = rs.get_full_size_y() as f32;
        let sp = WaveSampler::new(&inputs.state.params, width, height);
        get_view_instance(inputs.state.kind).disp(
            canvas,
            &sp,
            self.clock.elapsed(),
            rs,
            inputs.state.show_points,
        );

        #[cfg(feature = "verbose")]
        log::trace!(
            "Frame {}: t={:.3} kind={:?}",
            self.frame_no,
            self.clock.elapsed(),
            inputs.state.kind
        );
        FrameResult::Drawn
    }

    /// One full tick: advance, then draw. Headless driver.
    #[allow(dead_code)]
    pub fn on_frame(&mut self, inputs: FrameInputs, canvas: &mut dyn Canvas) -> FrameResult {
        if !self.advance(inputs.state) {
            return FrameResult::Cancelled;
        }
        self.render(inputs, canvas)
    }

    /// Decorative only; never feeds the sampler.
    fn grid(canvas: &mut dyn Canvas, rs: &Resize) {
        let width = rs.get_full_size_x() as f32;
        let height = rs.get_full_size_y() as f32;
        let cell = width.min(height) / GRID_DIVISION;
        if cell <= 0.0 {
            return;
        }
        let color = rgb(GRID_COLOR);
        let mut x = 0.0;
        while x < width {
            canvas.line(pt2(x, 0.0), pt2(x, height), 1.0, color);
            x += cell;
        }
        let mut y = 0.0;
        while y < height {
            canvas.line(pt2(0.0, y), pt2(width, y), 1.0, color);
            y += cell;
        }
    }
}
