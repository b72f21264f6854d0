//  Created by Hasebe Masahiko on 2025/06/15.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use super::canvas::Canvas;
use super::draw_graph::Resize;
use super::view_longitudinal::LongitudinalView;
use super::view_transverse::TransverseView;
use crate::wave::sampler::WaveSampler;
use crate::wavelib::WaveKind;

//*******************************************************************
//      trait WaveView
//*******************************************************************
pub trait WaveView {
    /// 波形の描画
    fn disp(
        &self,
        canvas: &mut dyn Canvas,
        sp: &WaveSampler,
        crnt_time: f64, //  WaveClock の経過時間 [sec]
        rs: &Resize,    //  ウィンドウサイズ
        show_points: bool,
    );
}

//*******************************************************************
//      Get WaveView Instance
//*******************************************************************
pub fn get_view_instance(kind: WaveKind) -> &'static dyn WaveView {
    match kind {
        // ◆◆◆ WaveKind が追加されたらここに追加
        WaveKind::Transverse => &TransverseView,
        WaveKind::Longitudinal => &LongitudinalView,
    }
}
