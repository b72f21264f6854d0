//  Created by Hasebe Masahiko on 2025/06/15.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::prelude::*;

use super::canvas::{Canvas, rgb};
use super::draw_graph::Resize;
use super::generative_view::WaveView;
use crate::wave::sampler::{WaveSampler, tracking_points};
use crate::wavelib::*;

//*******************************************************************
//      Transverse Wave
//*******************************************************************
pub struct TransverseView;

impl TransverseView {
    const KIND: WaveKind = WaveKind::Transverse;
    const MIN_WEIGHT: f32 = 2.0;
    const MIN_POINT_RADIUS: f32 = 4.0;
}
impl WaveView for TransverseView {
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

        // 1 pixel 列ごとに標本化
        let points: Vec<Vec2> = (0..width)
            .map(|x| {
                let x = x as f32;
                pt2(x, center_y + sp.displacement(Self::KIND, x, crnt_time))
            })
            .collect();
        canvas.polyline(
            &points,
            Self::MIN_WEIGHT.max(height / 100.0),
            rgb(TRANSVERSE_COLOR),
        );

        if show_points {
            let radius = Self::MIN_POINT_RADIUS.max(height / 40.0);
            for (x, color) in tracking_points(width).zip(POINT_COLOR) {
                let y = center_y + sp.displacement(Self::KIND, x, crnt_time);
                canvas.disc(pt2(x, y), radius, rgb(color));
            }
        }
    }
}
