//! Per-frame simulation tick
//!
//! Resolves one-shot commands against the phase machine, then, while
//! Playing, runs the update sequence. The order of the steps is part of the
//! game's behavior: the crash check sees positions from the end of the
//! previous frame, and new obstacles use the road speed before this frame's
//! increase. A crash ends the run but not the frame, so movement, traffic
//! and road speed still take this frame's step.

use super::collision::first_overlap;
use super::input::{Command, Control, InputState, TickInput};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the session by one host frame stamped `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    for &command in &input.commands {
        apply_command(state, command, now_ms);
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    // First frame after (re)start and clock anomalies give dt == 0
    let dt = state.clock.advance(now_ms);
    if dt <= 0.0 {
        return;
    }

    step(state, &input.held, now_ms, dt);
}

/// Resolve a command against the current phase. Commands that mean nothing
/// in the current phase are ignored.
pub fn apply_command(state: &mut GameState, command: Command, now_ms: f64) {
    use Command::*;
    use GamePhase::*;

    match (command, state.phase) {
        (SelectInstructions, NotStarted) => state.set_phase(Instructions),
        (SelectBack | Click, Instructions) => state.set_phase(NotStarted),
        (SelectPlay | Click, NotStarted) => start_run(state),
        (TogglePause | Pause | Click, Playing) => pause(state, now_ms),
        (TogglePause | Click, Paused) => resume(state, now_ms),
        (Restart | Click, GameOver) => {
            log::info!("Restart after {}", state.timer.label());
            start_run(state);
        }
        (command, phase) => {
            log::trace!("Ignoring {:?} in {:?}", command, phase);
        }
    }
}

fn start_run(state: &mut GameState) {
    state.reset_run();
    state.set_phase(GamePhase::Playing);
}

fn pause(state: &mut GameState, now_ms: f64) {
    state.clock.pause(now_ms);
    state.set_phase(GamePhase::Paused);
}

fn resume(state: &mut GameState, now_ms: f64) {
    let paused_for = state.clock.resume(now_ms);
    state.obstacles.shift_spawn_reference(paused_for);
    log::debug!("Resumed after {:.0}ms", paused_for);
    state.set_phase(GamePhase::Playing);
}

/// The Playing update sequence for a frame with `dt > 0`
fn step(state: &mut GameState, held: &InputState, now_ms: f64, dt: f32) {
    state.time_ticks += 1;

    // Spawn using the elapsed time and road speed before this frame
    let spawned = state
        .obstacles
        .try_spawn(
            now_ms,
            state.timer.time,
            state.road_speed,
            &mut state.rng,
            &state.tuning,
        )
        .map(|o| (o.id, o.lane));
    if let Some((id, lane)) = spawned {
        state.push_event(GameEvent::ObstacleSpawned { id, lane });
    }

    state.timer.update(dt);

    let car = state.vehicle.rect();
    let hit = first_overlap(&car, state.obstacles.obstacles.iter().map(|o| o.rect()))
        .map(|index| state.obstacles.obstacles[index].id);
    if let Some(obstacle_id) = hit {
        log::info!("Crashed into #{} at {}", obstacle_id, state.timer.label());
        state.push_event(GameEvent::Crashed {
            obstacle_id,
            time: state.timer.time,
        });
        state.set_phase(GamePhase::GameOver);
    }

    state.vehicle.apply_input(held, &state.tuning);
    state
        .vehicle
        .decay_rotation(held.is_held(Control::Drift), &state.tuning);

    state.obstacles.update(dt, held.is_drifting(), &state.tuning);

    state.road_speed += state.tuning.road_acceleration * dt;
}
