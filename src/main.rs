//! Headless replay: feeds a timed input script through a session on a
//! simulated clock and logs the camera pose.
//!
//! ```text
//! RUST_LOG=info vantage-replay intro.replay [options.toml] [fps]
//! ```

use std::path::Path;

use glam::Vec2;
use vantage::camera::FrameOutcome;
use vantage::input::ScriptedInput;
use vantage::options::Options;
use vantage::session::{CameraReadout, PanelRefresh, Session};
use vantage::VantageError;
use web_time::{Duration, Instant};

const VIEWPORT: Vec2 = Vec2::new(1920.0, 1080.0);
const DEFAULT_FPS: u32 = 60;
/// Frames simulated after the last scripted event.
const TAIL: Duration = Duration::from_secs(2);
/// Longest simulated run, whatever the script and swoop length ask for.
const MAX_REPLAY: Duration = Duration::from_secs(3600);
/// How often to log the pose while nothing notable happens.
const LOG_EVERY: Duration = Duration::from_millis(500);

/// Counts camera readouts instead of keeping them.
#[derive(Default)]
struct RefreshCounter {
    refreshes: u64,
    last: Option<CameraReadout>,
}

impl PanelRefresh for RefreshCounter {
    fn refresh_camera(&mut self, readout: CameraReadout) {
        self.refreshes += 1;
        self.last = Some(readout);
    }
}

const BUILTIN_SCRIPT: &str = "\
0.0 progress 0 2048
0.3 progress 2048 2048
0.3 loaded 0 0 0
1.0 pointer 1440 270
5.0 scroll 400
5.5 scroll 1200
6.0 scroll 2160
6.5 pointer 960 540
";

fn run(script_path: Option<&str>, options_path: Option<&str>, fps: u32) -> Result<(), VantageError> {
    let options = match options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => Options::default(),
    };
    let script = match script_path {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN_SCRIPT.to_owned(),
    };
    let mut input = ScriptedInput::parse(&script)?;

    let end = input
        .last_time()
        .unwrap_or_default()
        .saturating_add(options.swoop.duration())
        .saturating_add(TAIL);
    if end > MAX_REPLAY {
        log::warn!("replay of {:.0}s capped at {}s", end.as_secs_f64(), MAX_REPLAY.as_secs());
    }
    let end = end.min(MAX_REPLAY);
    let frame = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));

    let start = Instant::now();
    let mut session = Session::with_panel(options, VIEWPORT, RefreshCounter::default(), start);
    let mut now = start;
    let mut last_logged = start;
    let mut frames = 0u64;

    while now.duration_since(start) <= end {
        let _ = session.pump(&mut input, now);
        let outcome = session.frame(now);
        frames += 1;

        let notable = matches!(outcome, FrameOutcome::HandedOff);
        if notable || now.duration_since(last_logged) >= LOG_EVERY {
            let camera = session.camera();
            log::info!(
                "t={:>6.3}s {:?} eye=({:.3}, {:.3}, {:.3}) target=({:.3}, {:.3}, {:.3})",
                session.elapsed(now).as_secs_f32(),
                outcome,
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                camera.target.x,
                camera.target.y,
                camera.target.z,
            );
            last_logged = now;
        }
        now += frame;
    }

    let panel = session.panel();
    log::info!(
        "{frames} frames, {} panel refreshes (last {:?}), asset {:?}",
        panel.refreshes,
        panel.last,
        session.asset_status(),
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fps = match args.get(2).map(|s| s.parse::<u32>()) {
        None => DEFAULT_FPS,
        Some(Ok(fps)) => fps,
        Some(Err(e)) => {
            log::error!("Usage: vantage-replay [script] [options.toml] [fps]: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(
        args.first().map(String::as_str),
        args.get(1).map(String::as_str),
        fps,
    ) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_keeps_only_the_latest_readout() {
        let t0 = Instant::now();
        let mut session =
            Session::with_panel(Options::default(), VIEWPORT, RefreshCounter::default(), t0);
        assert!(session.on_asset_loaded(glam::Vec3::ZERO, t0));
        for i in 1..=120 {
            let _ = session.frame(t0 + Duration::from_millis(16 * i));
        }
        let panel = session.panel();
        assert_eq!(panel.refreshes, 121);
        let eye = session.camera().eye;
        assert_eq!(panel.last, Some(CameraReadout::from(eye)));
    }

    #[test]
    fn oversized_swoop_runs_a_capped_replay() {
        let options = Options::from_toml_str("[swoop]\nduration_secs = 1e20\n").unwrap();
        let path = std::env::temp_dir().join(format!("vantage-replay-{}.toml", std::process::id()));
        options.save(&path).unwrap();
        let script = std::env::temp_dir().join(format!("vantage-replay-{}.txt", std::process::id()));
        std::fs::write(&script, "0 loaded 0 0 0\n").unwrap();

        let result = run(script.to_str(), path.to_str(), 1);
        std::fs::remove_file(&path).unwrap();
        std::fs::remove_file(&script).unwrap();
        assert!(result.is_ok());
    }
}
