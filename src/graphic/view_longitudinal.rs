//  Created by Hasebe Masahiko on 2025/06/15.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::prelude::*;

use super::canvas::{Canvas, rgb};
use super::draw_graph::Resize;
use super::generative_view::WaveView;
use crate::wave::sampler::{WaveSampler, highlighted_marker, marker_rest_positions};
use crate::wavelib::*;

//*******************************************************************
//      Longitudinal Wave
//          vertical ticks swaying around their rest positions
//*******************************************************************
pub struct LongitudinalView;

impl LongitudinalView {
    const KIND: WaveKind = WaveKind::Longitudinal;
    const MIN_WEIGHT: f32 = 1.0;
    const MIN_POINT_RADIUS: f32 = 3.0;
}
impl WaveView for LongitudinalView {
    fn disp(
        &self,
        canvas: &mut dyn Canvas,
        sp: &WaveSampler,
        crnt_time: f64,
        rs: &Resize,
        show_points: bool,
    ) {
        let width = rs.get_full_size_x();
        let height = rs.get_full_size_y() as f32;
        let center_y = height / 2.0;
        let half = height * MARKER_HALF_LENGTH;
        let weight = Self::MIN_WEIGHT.max(height / 150.0);
        let color = rgb(LONGITUDINAL_COLOR);
        let hl = highlighted_marker(width);

        for (i, rest_x) in marker_rest_positions(width).enumerate() {
            let x = rest_x + sp.displacement(Self::KIND, rest_x, crnt_time);
            canvas.line(pt2(x, center_y - half), pt2(x, center_y + half), weight, color);

            if show_points && i == hl {
                let radius = Self::MIN_POINT_RADIUS.max(height / 60.0);
                canvas.disc(pt2(x, center_y), radius, rgb(POINT_COLOR[0]));
            }
        }
    }
}
