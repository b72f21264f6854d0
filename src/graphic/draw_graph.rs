//  Created by Hasebe Masahiko on 2024/11/06.
//  Copyright (c) 2024 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::image::{self, ColorType, ImageResult};
use nannou::prelude::*;
use std::path::Path;

use super::canvas::{Canvas, NannouCanvas, PixelBuffer, rgb};
use super::render_loop::*;
use crate::wave::clock::Transport;
use crate::wave::params::WaveState;
use crate::wavelib::*;

//*******************************************************************
//      struct Resize
//          measured drawing surface in device pixels
//*******************************************************************
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Resize {
    full_size_x: u32,
    full_size_y: u32,
    scale_factor: f32,
}
impl Resize {
    /// ウィンドウの現在の大きさを測る
    pub fn new(app: &App, id: WindowId) -> Option<Resize> {
        let win = app.window(id)?;
        let (w, h) = win.inner_size_pixels();
        Some(Resize::from_pixels(w, h, win.scale_factor()))
    }
    pub fn from_pixels(width: u32, height: u32, scale_factor: f32) -> Resize {
        Resize {
            full_size_x: width,
            full_size_y: height,
            scale_factor: if scale_factor > 0.0 { scale_factor } else { 1.0 },
        }
    }
    pub fn get_full_size_x(&self) -> u32 {
        self.full_size_x
    }
    pub fn get_full_size_y(&self) -> u32 {
        self.full_size_y
    }
    pub fn get_scale_factor(&self) -> f32 {
        self.scale_factor
    }
    pub fn is_drawable(&self) -> bool {
        self.full_size_x > 0 && self.full_size_y > 0
    }
    /// Buffer dimensions always follow the last measurement.
    pub fn sync_surface(&self, canvas: &mut dyn Canvas) {
        let want = (self.full_size_x, self.full_size_y);
        if canvas.size() != want {
            canvas.resize(want.0, want.1);
        }
    }
}

//*******************************************************************
//      struct ViewportSizer
//*******************************************************************
#[derive(Default, Debug)]
pub struct ViewportSizer {
    rs: Resize,
    changes: u32,
}
impl ViewportSizer {
    /// 変化があれば true
    pub fn observe(&mut self, measured: Resize) -> bool {
        if measured == self.rs {
            return false;
        }
        log::debug!(
            "Viewport: {}x{} -> {}x{} (scale {})",
            self.rs.full_size_x,
            self.rs.full_size_y,
            measured.full_size_x,
            measured.full_size_y,
            measured.scale_factor
        );
        self.rs = measured;
        self.changes += 1;
        true
    }
    pub fn viewport(&self) -> &Resize {
        &self.rs
    }
    pub fn changes(&self) -> u32 {
        self.changes
    }
}

//*******************************************************************
//      struct Graphic
//          one animated canvas: viewport + render loop
//*******************************************************************
pub struct Graphic {
    sizer: ViewportSizer,
    rloop: RenderLoop,
}

impl Graphic {
    const LABEL_FONT_SIZE: u32 = 16;
    const LABEL_MARGIN: f32 = 16.0;
    const LABEL_LINE: f32 = 22.0;

    pub fn new() -> (Graphic, LoopHandle) {
        let (rloop, handle) = RenderLoop::start();
        (
            Self {
                sizer: ViewportSizer::default(),
                rloop,
            },
            handle,
        )
    }
    pub fn set_rs(&mut self, rs: Resize) {
        self.sizer.observe(rs);
    }
    pub fn elapsed(&self) -> f64 {
        self.rloop.clock().elapsed()
    }
    pub fn frame_no(&self) -> u64 {
        self.rloop.frame_no()
    }
    /// (ticks that moved time, viewport changes)
    pub fn stats(&self) -> (u64, u32) {
        (self.rloop.clock().frames(), self.sizer.changes())
    }

    //*******************************************************************
    //      Update Model
    //*******************************************************************
    pub fn update_model(&mut self, state: &WaveState) -> bool {
        self.rloop.advance(state)
    }

    //*******************************************************************
    //      View (no mutable self)
    //*******************************************************************
    pub fn view_wave(&self, draw: Draw, state: &WaveState) -> FrameResult {
        let rs = *self.sizer.viewport();
        let mut canvas = NannouCanvas::new(
            draw.clone(),
            rs.get_full_size_x(),
            rs.get_full_size_y(),
            rs.get_scale_factor(),
        );
        let res = self.rloop.render(FrameInputs { state, rs: &rs }, &mut canvas);
        if res == FrameResult::Drawn {
            self.label(draw, state, &rs);
        }
        res
    }
    /// Renders the current frame off-screen into a PNG without advancing time.
    pub fn snapshot(&self, state: &WaveState, path: &Path) -> ImageResult<FrameResult> {
        let rs = *self.sizer.viewport();
        let mut pb = PixelBuffer::new(rs.get_full_size_x(), rs.get_full_size_y());
        let res = self.rloop.render(FrameInputs { state, rs: &rs }, &mut pb);
        if res == FrameResult::Drawn {
            let (w, h) = pb.size();
            image::save_buffer(path, pb.as_bytes(), w, h, ColorType::Rgba8)?;
            log::info!("Snapshot: {}", path.display());
        }
        Ok(res)
    }
    /// 波の種類とパラメータの表示
    fn label(&self, draw: Draw, state: &WaveState, rs: &Resize) {
        const LABEL_W: f32 = 400.0;
        let w = rs.get_full_size_x() as f32 / rs.get_scale_factor();
        let h = rs.get_full_size_y() as f32 / rs.get_scale_factor();
        let left = -w / 2.0 + Self::LABEL_MARGIN + LABEL_W / 2.0;
        let top = h / 2.0 - Self::LABEL_MARGIN - Self::LABEL_LINE / 2.0;
        let color = rgb(LABEL_COLOR);

        draw.text(state.kind.caption())
            .font_size(Self::LABEL_FONT_SIZE)
            .color(color)
            .left_justify()
            .x_y(left, top)
            .w_h(LABEL_W, Self::LABEL_LINE);

        let prm = &state.params;
        let readout = format!(
            "speed x{:.1}   f {:.1} Hz   A {} u{}",
            prm.speed(),
            prm.frequency(),
            prm.amplitude().round(),
            if self.rloop.clock().transport() == Transport::Paused {
                "   (paused)"
            } else {
                ""
            }
        );
        draw.text(&readout)
            .font_size(Self::LABEL_FONT_SIZE - 4)
            .color(color)
            .left_justify()
            .x_y(left, top - Self::LABEL_LINE)
            .w_h(LABEL_W, Self::LABEL_LINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizer_reports_changes_once() {
        let mut sz = ViewportSizer::default();
        assert!(sz.observe(Resize::from_pixels(800, 400, 1.0)));
        assert!(!sz.observe(Resize::from_pixels(800, 400, 1.0)));
        assert!(sz.observe(Resize::from_pixels(1600, 800, 2.0)));
        assert_eq!(sz.changes(), 2);
        assert_eq!(sz.viewport().get_full_size_x(), 1600);
    }

    #[test]
    fn sync_surface_matches_measurement() {
        let mut pb = PixelBuffer::new(800, 400);
        Resize::from_pixels(1024, 300, 1.0).sync_surface(&mut pb);
        assert_eq!(pb.size(), (1024, 300));
        assert!(!Resize::from_pixels(0, 300, 1.0).is_drawable());
        assert_eq!(Resize::from_pixels(10, 10, 0.0).get_scale_factor(), 1.0);
    }

    #[test]
    fn snapshot_writes_png_without_moving_time() {
        let (mut graph, _handle) = Graphic::new();
        graph.set_rs(Resize::from_pixels(64, 32, 1.0));
        let st = WaveState::default();
        graph.update_model(&st);
        let elapsed = graph.elapsed();

        let path = std::env::temp_dir().join("wavescope-snapshot-test.png");
        assert_eq!(graph.snapshot(&st, &path).unwrap(), FrameResult::Drawn);
        assert!(path.is_file());
        assert_eq!(graph.elapsed(), elapsed);
        let _ = std::fs::remove_file(&path);

        graph.set_rs(Resize::from_pixels(0, 0, 1.0));
        let none = std::env::temp_dir().join("wavescope-snapshot-empty.png");
        assert_eq!(graph.snapshot(&st, &none).unwrap(), FrameResult::Skipped);
        assert!(!none.exists());
        assert_eq!(graph.stats(), (1, 2));
    }
}
