//=========================================================================
// Motion System
//=========================================================================
//
// Turns device attitude into directional motion events.
//
// Architecture:
//   Attitude ─► MotionSource::process() ─► Vec<MotionEvent>
//                                               ↓
//                                   MotionDelegate callbacks
//
// The source is a pure producer: it never holds a reference to its
// delegate. The owner (the input router) feeds samples in and forwards
// whatever comes out through its own `MotionDelegate` implementation.
//
//=========================================================================

//=== Module Declarations =================================================

mod attitude_source;

//=== Public API ==========================================================

pub use attitude_source::AttitudeMotionSource;

use crate::core::input::{Attitude, MotionEvent};

//=== MotionConfig ========================================================

/// Tilt thresholds (radians) at which an axis starts reporting motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Pitch magnitude beyond which up/down motion begins.
    pub pitch_threshold: f32,

    /// Roll magnitude beyond which left/right motion begins.
    pub roll_threshold: f32,
}

impl MotionConfig {
    /// Creates a config with explicit thresholds.
    ///
    /// # Panics
    ///
    /// Panics if either threshold is not a positive finite number.
    pub fn new(pitch_threshold: f32, roll_threshold: f32) -> Self {
        assert!(
            pitch_threshold.is_finite() && pitch_threshold > 0.0,
            "Pitch threshold must be positive, got {}",
            pitch_threshold
        );
        assert!(
            roll_threshold.is_finite() && roll_threshold > 0.0,
            "Roll threshold must be positive, got {}",
            roll_threshold
        );
        Self { pitch_threshold, roll_threshold }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            pitch_threshold: 0.25,
            roll_threshold: 0.25,
        }
    }
}

//=== MotionSource Trait ==================================================

/// Producer of [`MotionEvent`]s with an explicit start/stop lifecycle.
///
/// # Contract
///
/// - `start()` begins emission. Calls must be paired: every `start()` is
///   followed by exactly one effective `stop()` before the next `start()`.
/// - `stop()` ceases emission and is idempotent.
/// - `process()` appends zero or more events to `out`. An inactive source
///   never emits.
/// - No buffering: only the latest sample matters.
pub trait MotionSource: Send {
    fn start(&mut self);

    fn stop(&mut self);

    fn is_active(&self) -> bool;

    fn process(&mut self, attitude: Attitude, out: &mut Vec<MotionEvent>);
}

//=== MotionDelegate Trait ================================================

/// Receiver of the six directional motion callbacks.
pub trait MotionDelegate {
    fn motion_move_up(&mut self);

    fn motion_move_down(&mut self);

    fn motion_stop_moving_up_down(&mut self);

    fn motion_move_left(&mut self);

    fn motion_move_right(&mut self);

    fn motion_stop_moving_left_right(&mut self);

    /// Routes a [`MotionEvent`] to the matching callback.
    fn dispatch_motion(&mut self, event: MotionEvent) {
        match event {
            MotionEvent::MoveUp => self.motion_move_up(),
            MotionEvent::MoveDown => self.motion_move_down(),
            MotionEvent::StopUpDown => self.motion_stop_moving_up_down(),
            MotionEvent::MoveLeft => self.motion_move_left(),
            MotionEvent::MoveRight => self.motion_move_right(),
            MotionEvent::StopLeftRight => self.motion_stop_moving_left_right(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
