//! Browser host
//!
//! JS calls `frame()` from `requestAnimationFrame` and forwards keyboard,
//! click and focus events. Held keys and one-shot commands are buffered
//! here and handed to the simulation at the start of the next frame.
//! Snapshots and events go back out as JSON for the canvas renderer and
//! the music player.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::sim::{Command, Control, GamePhase, GameState, InputState, TickInput, tick};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("Logger already set: {}", e);
    }
    log::info!("Time Drift (web) starting...");
}

/// Game instance owned by the page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    held: InputState,
    pending: Vec<Command>,
    running: bool,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, tuning_json: Option<String>) -> WebGame {
        let tuning = tuning_json
            .as_deref()
            .map(Tuning::from_json_or_default)
            .unwrap_or_default();
        WebGame {
            state: GameState::with_tuning(u64::from(seed), tuning),
            held: InputState::default(),
            pending: Vec::new(),
            running: true,
        }
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        let code = event.code();
        if let Some(control) = Control::from_key_code(&code) {
            self.held.press(control);
            // Keep arrows and space from scrolling the page
            event.prevent_default();
        }
        if !event.repeat() {
            if let Some(command) = Command::from_key_code(&code) {
                self.pending.push(command);
            }
        }
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) {
        if let Some(control) = Control::from_key_code(&event.code()) {
            self.held.release(control);
        }
    }

    /// Bare canvas click (simplified variant, and restart after a crash)
    pub fn click(&mut self) {
        self.pending.push(Command::Click);
    }

    /// Menu button press by name: "play", "instructions", "back", "restart", "pause"
    pub fn button(&mut self, name: &str) -> bool {
        let command = match name {
            "play" => Command::SelectPlay,
            "instructions" => Command::SelectInstructions,
            "back" => Command::SelectBack,
            "restart" => Command::Restart,
            "pause" => Command::TogglePause,
            _ => {
                log::warn!("Unknown button: {}", name);
                return false;
            }
        };
        self.pending.push(command);
        true
    }

    /// Window lost focus: release keys and pause a running game
    pub fn blur(&mut self) {
        self.held.clear();
        // Runs after anything queued this frame, including an Escape
        self.pending.push(Command::Pause);
        if self.state.phase == GamePhase::Playing {
            log::info!("Auto-paused (window blur)");
        }
    }

    /// Run one frame and return the snapshot as JSON
    pub fn frame(&mut self, timestamp: f64) -> String {
        if self.running {
            let input = TickInput {
                held: self.held,
                commands: std::mem::take(&mut self.pending),
            };
            tick(&mut self.state, &input, timestamp);
        }
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::new()
        })
    }

    /// Events since the last call, as a JSON array
    pub fn drain_events(&mut self) -> String {
        let events = self.state.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::error!("Event serialization failed: {}", e);
            String::from("[]")
        })
    }

    /// Stop simulating; later frames only re-emit the last snapshot
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Stopped at {}", self.state.timer.label());
        }
        self.running = false;
        self.pending.clear();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
