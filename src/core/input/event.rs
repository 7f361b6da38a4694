//=========================================================================
// Input Event Types
//
// Defines the engine-level representation of touch-style input.
//
// This module abstracts away the host input layer (winit on desktop, a
// gesture recognizer on a touch device) into a small set of portable
// events consumed by the input router.
//
// Responsibilities:
// - Represent discrete gestures (tap, four swipe directions)
// - Represent raw device attitude samples (pitch / roll)
// - Represent the directional motion events produced from attitude
// - Provide coalescing semantics for continuous samples
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputRouter ──► MotionSource ──► MotionEvent
//         ↓
//    Level commands
// ```
//
//=========================================================================

//=== GestureEvent ========================================================

/// A discrete physical gesture.
///
/// Produced once per gesture by the host input layer and consumed
/// immediately by the router. Gestures never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureEvent {
    /// Single tap (or click / confirm key on desktop).
    Tap,

    /// Swipe towards the left edge.
    SwipeLeft,

    /// Swipe towards the right edge.
    SwipeRight,

    /// Swipe towards the top edge.
    SwipeUp,

    /// Swipe towards the bottom edge.
    SwipeDown,
}

impl GestureEvent {
    /// Returns `true` for the four swipe variants.
    #[inline]
    pub fn is_swipe(self) -> bool {
        !matches!(self, Self::Tap)
    }
}

//=== MotionEvent =========================================================

/// Directional start/stop event derived from device attitude.
///
/// Events are fire-and-forget with latest-value semantics: a stop event
/// cancels the effect of the previous move on the same axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionEvent {
    MoveUp,
    MoveDown,
    StopUpDown,
    MoveLeft,
    MoveRight,
    StopLeftRight,
}

//=== Attitude ============================================================

/// Raw device attitude sample, in radians.
///
/// Positive pitch tilts the top of the device away from the player,
/// positive roll tilts the right edge down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f32,
    pub roll: f32,
}

impl Attitude {
    #[inline]
    pub const fn new(pitch: f32, roll: f32) -> Self {
        Self { pitch, roll }
    }

    /// Returns `true` if both components are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.roll.is_finite()
    }
}

//=== InputEvent ==========================================================

/// Event crossing the platform → core boundary.
///
/// # Categories
///
/// - **Gesture**: discrete, order significant, never coalesced
/// - **Attitude**: continuous, only the latest sample of a frame matters
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Gesture(GestureEvent),
    Attitude(Attitude),
}

impl InputEvent {
    /// Returns `true` if the event carries continuous data that may be
    /// coalesced with later samples of the same kind.
    #[inline]
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Attitude(_))
    }
}

impl From<GestureEvent> for InputEvent {
    fn from(gesture: GestureEvent) -> Self {
        Self::Gesture(gesture)
    }
}

impl From<Attitude> for InputEvent {
    fn from(attitude: Attitude) -> Self {
        Self::Attitude(attitude)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tap_is_not_a_swipe() {
        assert!(!GestureEvent::Tap.is_swipe());
    }

    #[test]
    fn all_directions_are_swipes() {
        for gesture in [
            GestureEvent::SwipeLeft,
            GestureEvent::SwipeRight,
            GestureEvent::SwipeUp,
            GestureEvent::SwipeDown,
        ] {
            assert!(gesture.is_swipe(), "{:?} should be a swipe", gesture);
        }
    }

    #[test]
    fn motion_events_are_hashable() {
        let mut set = HashSet::new();
        set.insert(MotionEvent::MoveUp);
        set.insert(MotionEvent::MoveUp);
        set.insert(MotionEvent::StopUpDown);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn attitude_finiteness() {
        assert!(Attitude::new(0.3, -0.2).is_finite());
        assert!(!Attitude::new(f32::NAN, 0.0).is_finite());
        assert!(!Attitude::new(0.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn only_attitude_is_continuous() {
        assert!(InputEvent::from(Attitude::default()).is_continuous());
        assert!(!InputEvent::from(GestureEvent::Tap).is_continuous());
    }
}
