//  Created by Hasebe Masahiko on 2025/06/14.
//  Copyright (c) 2025 Hasebe Masahiko.
//  Released under the MIT license
//  https://opensource.org/licenses/mit-license.php
//
mod cmd;
mod file;
mod graphic;
mod wave;
mod wavelib;

use nannou::prelude::*;
use std::path::PathBuf;

use cmd::control_panel::{ControlPanel, PanelCmd};
use file::settings::Settings;
use graphic::draw_graph::{Graphic, Resize};
use graphic::render_loop::LoopHandle;

//*******************************************************************
//      Model
//*******************************************************************
struct Model {
    window_id: WindowId,
    graph: Graphic,
    panel: ControlPanel,
    handle: LoopHandle,
}

//*******************************************************************
//      Main
//*******************************************************************
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).event(event).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    let sts = Settings::load().unwrap_or_else(|e| {
        log::error!("{e}");
        Settings::default()
    });

    let window_id = match app
        .new_window()
        .size(sts.window.width as u32, sts.window.height as u32)
        .title("Wavescope")
        .view(view)
        .build()
    {
        Ok(id) => id,
        Err(e) => {
            log::error!("Failed to build window: {e:?}");
            std::process::exit(1);
        }
    };
    // ディスプレイのリフレッシュに同期
    app.set_loop_mode(LoopMode::RefreshSync);

    let (mut graph, handle) = Graphic::new();
    if let Some(rs) = Resize::new(app, window_id) {
        graph.set_rs(rs);
    }
    Model {
        window_id,
        graph,
        panel: ControlPanel::new(sts.wave_state()),
        handle,
    }
}

//*******************************************************************
//      Event
//*******************************************************************
fn event(app: &App, model: &mut Model, event: Event) {
    if let Event::WindowEvent {
        id,
        simple: Some(wev),
        ..
    } = event
    {
        if id != model.window_id {
            return;
        }
        if let WindowEvent::Resized(_) = wev {
            if let Some(rs) = Resize::new(app, id) {
                model.graph.set_rs(rs);
            }
        }
        match model.panel.window_event(&wev) {
            PanelCmd::Quit => {
                stop_loop(app, &model.handle);
                app.quit();
            }
            PanelCmd::Snapshot => {
                let path = PathBuf::from(format!("wavescope-{:06}.png", model.graph.frame_no()));
                if let Err(e) = model.graph.snapshot(model.panel.state(), &path) {
                    log::error!("Failed to save snapshot: {e}");
                }
            }
            _ => {}
        }
    }
}

//*******************************************************************
//      Update Model
//*******************************************************************
fn update(app: &App, model: &mut Model, _update: Update) {
    // resize イベントを取りこぼしても毎フレーム測り直す
    if let Some(rs) = Resize::new(app, model.window_id) {
        model.graph.set_rs(rs);
    }
    if !model.graph.update_model(model.panel.state()) {
        stop_loop(app, &model.handle);
    }
}

//*******************************************************************
//      View
//*******************************************************************
fn view(app: &App, model: &Model, frame: Frame) {
    if model.handle.is_cancelled() {
        return;
    }
    let draw = app.draw();
    model.graph.view_wave(draw.clone(), model.panel.state());
    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {e:?}");
    }
}

fn stop_loop(app: &App, handle: &LoopHandle) {
    handle.cancel();
    app.set_loop_mode(LoopMode::Wait);
}

fn exit(app: &App, model: Model) {
    stop_loop(app, &model.handle);
    let (frames, resizes) = model.graph.stats();
    log::info!(
        "That's all. Thank you! ({:.1} sec of wave, {frames} frames, {resizes} resizes)",
        model.graph.elapsed()
    );
}
