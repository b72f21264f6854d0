//  Created by Hasebe Masahiko on 2025/06/16.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
use nannou::prelude::*;

use crate::wave::params::WaveState;
use crate::wavelib::WaveKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelCmd {
    Nothing,
    Changed,
    Snapshot,
    Quit,
}

//*******************************************************************
//      Control Panel
//          keyboard sliders/buttons writing into WaveState
//*******************************************************************
#[derive(Debug, Default)]
pub struct ControlPanel {
    state: WaveState,
}
impl ControlPanel {
    pub fn new(state: WaveState) -> Self {
        Self { state }
    }
    pub fn state(&self) -> &WaveState {
        &self.state
    }
    pub fn window_event(&mut self, event: &WindowEvent) -> PanelCmd {
        match event {
            WindowEvent::KeyPressed(key) => self.key_pressed(*key),
            WindowEvent::Closed => PanelCmd::Quit,
            _ => PanelCmd::Nothing,
        }
    }
    pub fn key_pressed(&mut self, key: Key) -> PanelCmd {
        let st = &mut self.state;
        match key {
            Key::Escape => return PanelCmd::Quit,
            Key::S => return PanelCmd::Snapshot,
            Key::Space => st.toggle_playing(),
            Key::T => st.set_kind(WaveKind::Transverse),
            Key::L => st.set_kind(WaveKind::Longitudinal),
            Key::Tab => st.set_kind(st.kind.toggled()),
            Key::P => st.show_points = !st.show_points,
            Key::Up => st.params.step_amplitude(1),
            Key::Down => st.params.step_amplitude(-1),
            Key::Right => st.params.step_frequency(1),
            Key::Left => st.params.step_frequency(-1),
            Key::RBracket => st.params.step_speed(1),
            Key::LBracket => st.params.step_speed(-1),
            _ => return PanelCmd::Nothing,
        }
        PanelCmd::Changed
    }
}
