//=========================================================================
// Level Interface
//=========================================================================
//
// Contract between the input router and the game-defined level.
//
// The level owns all gameplay rules and its own state. The router only
// reads the state to gate input, forwards commands, and replaces the
// whole level once it reaches a terminal state.
//
// Lifecycle:
//   factory() → create() → [Ready] → start() → [Play] → [Win | Loose]
//                                                          ↓ stop()
//                                                       discarded
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::hud::Hud;

//=== LevelState ==========================================================

/// Gameplay phase of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelState {
    /// Built and waiting for the player to start.
    #[default]
    Ready,

    /// Running; swipes and motion are forwarded.
    Play,

    /// Finished successfully. Terminal for this level instance.
    Win,

    /// Finished unsuccessfully. Terminal for this level instance.
    Loose,
}

impl LevelState {
    /// Returns `true` for [`LevelState::Win`] and [`LevelState::Loose`].
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Loose)
    }
}

//=== Level Trait =========================================================

/// Game-defined level driven by the input router.
///
/// All transitions into `Play`, `Win` and `Loose` belong to the level.
/// The router triggers `start()` from `Ready` and discards the level once
/// it reports a terminal state.
///
/// # Minimal Implementation
///
/// ```rust
/// # use gesture_gate::prelude::*;
/// struct Runway { state: LevelState }
///
/// impl Level for Runway {
///     fn state(&self) -> LevelState { self.state }
///     fn start(&mut self) { self.state = LevelState::Play; }
///     fn update(&mut self, _time: f64, _hud: &mut dyn Hud) {}
/// }
/// ```
pub trait Level: Send {
    /// Current gameplay phase.
    fn state(&self) -> LevelState;

    /// Builds the level content. Called once, right after construction.
    fn create(&mut self) {}

    /// Starts gameplay. Only called while `state() == Ready`.
    fn start(&mut self);

    /// Tears down gameplay before the level is discarded.
    fn stop(&mut self) {}

    //--- Gesture Commands -------------------------------------------------

    fn swipe_left(&mut self) {}

    fn swipe_right(&mut self) {}

    fn swipe_up(&mut self) {}

    fn swipe_down(&mut self) {}

    //--- Motion Commands --------------------------------------------------

    fn motion_move_up(&mut self) {}

    fn motion_move_down(&mut self) {}

    fn motion_move_left(&mut self) {}

    fn motion_move_right(&mut self) {}

    fn motion_stop_moving_up_down(&mut self) {}

    fn motion_stop_moving_left_right(&mut self) {}

    //--- Frame Hook -------------------------------------------------------

    /// Called once per frame after physics has been simulated.
    ///
    /// `time` is the elapsed runtime in seconds. The HUD is lent for the
    /// duration of the call so the level can post prompts.
    fn update(&mut self, time: f64, hud: &mut dyn Hud);
}

//=== LevelFactory ========================================================

/// Produces fresh levels for the initial load and every restart.
pub type LevelFactory = Box<dyn FnMut() -> Box<dyn Level> + Send>;

//=========================================================================
// Unit Tests
//=========================================================================
