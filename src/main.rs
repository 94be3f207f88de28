//! Time Drift entry point
//!
//! The browser build is driven from JS through `time_drift::web`. Natively
//! this runs a headless session with a simple autopilot and logs how long it
//! survived.
//!
//! Usage: `time-drift [seed] [max_seconds]`; set `TIME_DRIFT_TUNING` to a JSON
//! file to override game balance.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use time_drift::sim::{Command, GamePhase, GameState, TickInput, tick};
    use time_drift::tuning::Tuning;

    env_logger::init();
    log::info!("Time Drift (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5EED);
    let max_seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0);

    let tuning = match std::env::var("TIME_DRIFT_TUNING") {
        Ok(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Can't read {}: {}", path, e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let mut state = GameState::with_tuning(seed, tuning);
    let frame_ms = 1000.0 / 60.0;
    let mut frame: u64 = 0;
    let mut next_report = 10.0;

    tick(&mut state, &TickInput::command(Command::SelectPlay), 0.0);
    while state.phase == GamePhase::Playing && state.timer.time < max_seconds {
        frame += 1;
        let held = autopilot::steer(&state.snapshot());
        tick(&mut state, &TickInput::held(held), frame as f64 * frame_ms);

        if state.timer.time >= next_report {
            log::info!(
                "{} road speed {:.1}, {} obstacles",
                state.timer.label(),
                state.road_speed,
                state.obstacles.len()
            );
            next_report += 10.0;
        }
    }

    let outcome = if state.phase == GamePhase::GameOver {
        "crashed"
    } else {
        "survived"
    };
    println!("seed {}: {} after {} frames, {}", seed, outcome, frame, state.timer.label());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is time_drift::web::start, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use time_drift::sim::{Control, InputState, Lane, Snapshot};

    /// How far ahead (pixels) the bot looks for oncoming traffic
    const LOOKAHEAD: f32 = 160.0;

    /// Head for the strip between the two lanes' spawn columns, drifting
    /// while dodging so traffic slows down.
    pub fn steer(snap: &Snapshot) -> InputState {
        let car = snap.vehicle;
        let mut held = InputState::default();

        let threatened = snap.obstacles.iter().any(|o| {
            let overlaps_x = o.pos.x < car.pos.x + car.size.x && o.pos.x + o.size.x > car.pos.x;
            let gap = match o.lane {
                Lane::Left => car.pos.y - (o.pos.y + o.size.y),
                Lane::Right => o.pos.y - (car.pos.y + car.size.y),
            };
            overlaps_x && (0.0..LOOKAHEAD).contains(&gap)
        });

        let target_x = snap.canvas.x / 2.0 - car.size.x - 10.0;
        if car.pos.x > target_x + 1.0 {
            held.press(Control::Left);
        } else if car.pos.x < target_x - 1.0 {
            held.press(Control::Right);
        }
        if threatened {
            held.press(Control::Drift);
        }
        held
    }
}
