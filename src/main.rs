//! Scripted headless session.
//!
//! Mounts an editor on an in-memory scene, plays a short gesture script
//! (create three points, link them, pan, zoom) and prints every dispatched
//! action as JSON. Pass a settings file path to override the default config.
//!
//! ```text
//! RUST_LOG=gridlink=debug cargo run --bin gridlink-demo -- settings.json
//! ```

use anyhow::Context;
use gridlink::{
    Action, EditorBuilder, EditorConfig, HostEvent, ManualClock, ManualFrameHost, MouseButton,
    RecordingScene, Viewport,
};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

/// Pixels per grid cell in the demo viewport
const CELL_PX: f64 = 10.0;

fn main() -> anyhow::Result<()> {
    gridlink::init_logging();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => EditorConfig::load(&path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => gridlink::config::default_settings_path()
            .map(|path| EditorConfig::load_or_default(&path))
            .transpose()
            .context("Failed to load user settings")?
            .unwrap_or_default(),
    };

    let extent = f64::from(config.size) * CELL_PX;
    let scene = RecordingScene::with_viewport(Viewport::new(0.0, 0.0, extent, extent));
    let frames = ManualFrameHost::new();
    let clock = ManualClock::new(0);
    let actions: Arc<Mutex<Vec<Action>>> = Arc::default();

    let sink = Arc::clone(&actions);
    let mut editor = EditorBuilder::new(scene.clone())
        .config(config)
        .frame_host(frames.clone())
        .clock(clock.clone())
        .listener(move |action| sink.lock().push(action.clone()))
        .build()
        .context("Failed to mount editor")?;

    let cell = |n: u32| f64::from(n) * CELL_PX + CELL_PX / 2.0;
    let mut script = vec![];
    for (x, y) in [(2, 2), (8, 5), (4, 9)] {
        script.push(HostEvent::pointer_move(cell(x), cell(y)));
        script.push(HostEvent::pointer_down(cell(x), cell(y), MouseButton::Secondary));
        script.push(HostEvent::pointer_up(cell(x), cell(y), MouseButton::Secondary));
    }
    for (x, y) in [(2, 2), (8, 5), (8, 5), (4, 9)] {
        script.push(HostEvent::pointer_move(cell(x), cell(y)));
        script.push(HostEvent::pointer_down(cell(x), cell(y), MouseButton::Primary));
        script.push(HostEvent::pointer_up(cell(x), cell(y), MouseButton::Primary));
    }
    // Pan from an empty cell
    script.push(HostEvent::pointer_move(cell(0), cell(0)));
    script.push(HostEvent::pointer_down(cell(0), cell(0), MouseButton::Primary));
    script.push(HostEvent::pointer_move(cell(3), cell(1)));
    script.push(HostEvent::pointer_up(cell(3), cell(1), MouseButton::Primary));
    script.push(HostEvent::key_down("="));
    script.push(HostEvent::key_up("="));

    // Mount frame
    if frames.take_frame().is_some() {
        editor.run_frame();
    }
    for event in script {
        editor.handle_event(event);
        clock.advance(16);
        if frames.take_frame().is_some() {
            editor.run_frame();
        }
    }

    for action in actions.lock().iter() {
        println!("{}", serde_json::to_string(action)?);
    }
    tracing::info!(
        scale = editor.view().scale(),
        pan = ?editor.view().pan(),
        frames = editor.monitor().total_frames(),
        avg_ms = editor.monitor().average_ms(),
        "Session finished"
    );

    editor.dispose();
    Ok(())
}
