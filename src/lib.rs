//=========================================================================
// Gesture Gate - Library Root
//
// Routes taps, swipes and device tilt to a game level, gated by the
// level's lifecycle state.
//
// Responsibilities:
// - Expose the engine runtime (`Engine`, `EngineBuilder`)
// - Expose the router and the interfaces it consumes (`Level`, `Hud`,
//   `MotionSource`) for games and tests
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use gesture_gate::prelude::*;
//
// # struct Runway { state: LevelState }
// # impl Level for Runway {
// #     fn state(&self) -> LevelState { self.state }
// #     fn start(&mut self) { self.state = LevelState::Play; }
// #     fn update(&mut self, _time: f64, _hud: &mut dyn Hud) {}
// # }
// fn main() {
//     EngineBuilder::new(|| Runway { state: LevelState::Ready }).build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game-thread systems: input types, the motion source,
// the level and HUD interfaces, and the input router.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and gesture recognition (winit).
// `engine` wires platform and game thread together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
