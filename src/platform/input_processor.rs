//=========================================================================
// Input Processor
//=========================================================================
//
// Recognizes touch-style input from desktop winit events.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Mapping:
//   left-button drag ≥ swipe distance → swipe in the dominant axis
//   left-button click                 → Tap
//   Space / Enter                     → Tap
//   Arrow keys                        → swipe
//   W / S / A / D held                → emulated device tilt (Attitude)
//
// Key repeats never produce gestures. Tilt keys emit a sample only when
// the held set actually changes.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{Attitude, GestureEvent, InputEvent};

//=== TiltKeys ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TiltKeys {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl TiltKeys {
    fn axis(negative: bool, positive: bool) -> f32 {
        match (negative, positive) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        }
    }
}

//=== InputProcessor ======================================================

/// Converts winit events to gestures and attitude samples.
pub(crate) struct InputProcessor {
    swipe_distance: f32,
    keyboard_tilt: f32,
    cursor: (f32, f32),
    press_origin: Option<(f32, f32)>,
    tilt_keys: TiltKeys,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(swipe_distance: f32, keyboard_tilt: f32) -> Self {
        Self {
            swipe_distance,
            keyboard_tilt,
            cursor: (0.0, 0.0),
            press_origin: None,
            tilt_keys: TiltKeys::default(),
        }
    }

    //--- Pointer ----------------------------------------------------------

    /// Tracks the cursor in logical pixels; drags are measured against
    /// this position.
    pub(crate) fn process_cursor_moved(&mut self, x: f32, y: f32) {
        self.cursor = (x, y);
    }

    /// Same as [`InputProcessor::process_cursor_moved`] for the physical
    /// position winit reports, so the swipe distance does not shrink on
    /// high-DPI displays.
    pub(crate) fn process_physical_cursor(
        &mut self,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) {
        let logical = position.to_logical::<f32>(scale_factor);
        self.process_cursor_moved(logical.x, logical.y);
    }

    /// Recognizes a tap or swipe when the left button is released.
    pub(crate) fn process_mouse_button(
        &mut self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        if button != WinitMouseButton::Left {
            return None;
        }

        match state {
            ElementState::Pressed => {
                self.press_origin = Some(self.cursor);
                None
            }
            ElementState::Released => {
                let origin = self.press_origin.take()?;
                Some(InputEvent::Gesture(self.classify_drag(origin, self.cursor)))
            }
        }
    }

    //--- Keyboard ---------------------------------------------------------

    /// Converts a winit key event (filters non-physical keys).
    pub(crate) fn process_key_event(&mut self, key_event: &KeyEvent) -> Option<InputEvent> {
        match key_event.physical_key {
            PhysicalKey::Code(code) => self.process_key(code, key_event.state, key_event.repeat),
            _ => None,
        }
    }

    pub(crate) fn process_key(
        &mut self,
        code: WinitKeyCode,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        let pressed = state == ElementState::Pressed;

        let held = match code {
            WinitKeyCode::KeyW => &mut self.tilt_keys.up,
            WinitKeyCode::KeyS => &mut self.tilt_keys.down,
            WinitKeyCode::KeyA => &mut self.tilt_keys.left,
            WinitKeyCode::KeyD => &mut self.tilt_keys.right,
            _ => {
                if !pressed || repeat {
                    return None;
                }
                return Self::gesture_for_key(code).map(InputEvent::Gesture);
            }
        };

        if *held == pressed {
            return None;
        }
        *held = pressed;

        Some(InputEvent::Attitude(self.keyboard_attitude()))
    }

    //--- Internal Helpers -------------------------------------------------

    fn gesture_for_key(code: WinitKeyCode) -> Option<GestureEvent> {
        match code {
            WinitKeyCode::Space | WinitKeyCode::Enter => Some(GestureEvent::Tap),
            WinitKeyCode::ArrowLeft => Some(GestureEvent::SwipeLeft),
            WinitKeyCode::ArrowRight => Some(GestureEvent::SwipeRight),
            WinitKeyCode::ArrowUp => Some(GestureEvent::SwipeUp),
            WinitKeyCode::ArrowDown => Some(GestureEvent::SwipeDown),
            _ => None,
        }
    }

    /// Screen space: y grows downward, so a drag towards the top of the
    /// window is `SwipeUp`.
    fn classify_drag(&self, from: (f32, f32), to: (f32, f32)) -> GestureEvent {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;

        if dx.abs().max(dy.abs()) < self.swipe_distance {
            GestureEvent::Tap
        } else if dx.abs() >= dy.abs() {
            if dx > 0.0 { GestureEvent::SwipeRight } else { GestureEvent::SwipeLeft }
        } else if dy > 0.0 {
            GestureEvent::SwipeDown
        } else {
            GestureEvent::SwipeUp
        }
    }

    fn keyboard_attitude(&self) -> Attitude {
        let keys = self.tilt_keys;
        Attitude::new(
            self.keyboard_tilt * TiltKeys::axis(keys.down, keys.up),
            self.keyboard_tilt * TiltKeys::axis(keys.left, keys.right),
        )
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn processor() -> InputProcessor {
        InputProcessor::new(40.0, 0.5)
    }

    fn drag(p: &mut InputProcessor, from: (f32, f32), to: (f32, f32)) -> Option<InputEvent> {
        p.process_cursor_moved(from.0, from.1);
        assert!(p.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed).is_none());
        p.process_cursor_moved(to.0, to.1);
        p.process_mouse_button(WinitMouseButton::Left, ElementState::Released)
    }

    fn press(p: &mut InputProcessor, code: WinitKeyCode) -> Option<InputEvent> {
        p.process_key(code, ElementState::Pressed, false)
    }

    fn release(p: &mut InputProcessor, code: WinitKeyCode) -> Option<InputEvent> {
        p.process_key(code, ElementState::Released, false)
    }

    fn gesture(g: GestureEvent) -> Option<InputEvent> {
        Some(InputEvent::Gesture(g))
    }

    fn attitude(pitch: f32, roll: f32) -> Option<InputEvent> {
        Some(InputEvent::Attitude(Attitude::new(pitch, roll)))
    }

    #[test]
    fn short_drag_is_tap() {
        let mut p = processor();
        assert_eq!(drag(&mut p, (100.0, 100.0), (110.0, 95.0)), gesture(GestureEvent::Tap));
    }

    #[test]
    fn long_drags_become_swipes() {
        let mut p = processor();
        assert_eq!(drag(&mut p, (100.0, 100.0), (20.0, 110.0)), gesture(GestureEvent::SwipeLeft));
        assert_eq!(drag(&mut p, (100.0, 100.0), (200.0, 80.0)), gesture(GestureEvent::SwipeRight));
        assert_eq!(drag(&mut p, (100.0, 100.0), (90.0, 10.0)), gesture(GestureEvent::SwipeUp));
        assert_eq!(drag(&mut p, (100.0, 100.0), (105.0, 300.0)), gesture(GestureEvent::SwipeDown));
    }

    #[test]
    fn swipe_distance_is_measured_in_logical_pixels() {
        let mut p = processor();
        let scale = 2.0;

        // 60 physical px on a 2x display is a 30 px drag: below the threshold.
        p.process_physical_cursor(PhysicalPosition::new(200.0, 200.0), scale);
        p.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        p.process_physical_cursor(PhysicalPosition::new(260.0, 200.0), scale);
        assert_eq!(
            p.process_mouse_button(WinitMouseButton::Left, ElementState::Released),
            gesture(GestureEvent::Tap)
        );

        p.process_physical_cursor(PhysicalPosition::new(200.0, 200.0), scale);
        p.process_mouse_button(WinitMouseButton::Left, ElementState::Pressed);
        p.process_physical_cursor(PhysicalPosition::new(300.0, 200.0), scale);
        assert_eq!(
            p.process_mouse_button(WinitMouseButton::Left, ElementState::Released),
            gesture(GestureEvent::SwipeRight)
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut p = processor();
        assert!(p.process_mouse_button(WinitMouseButton::Left, ElementState::Released).is_none());
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut p = processor();
        assert!(p.process_mouse_button(WinitMouseButton::Right, ElementState::Pressed).is_none());
        assert!(p.process_mouse_button(WinitMouseButton::Right, ElementState::Released).is_none());
    }

    #[test]
    fn confirm_keys_tap_and_arrows_swipe() {
        let mut p = processor();
        assert_eq!(press(&mut p, WinitKeyCode::Space), gesture(GestureEvent::Tap));
        assert_eq!(press(&mut p, WinitKeyCode::Enter), gesture(GestureEvent::Tap));
        assert_eq!(press(&mut p, WinitKeyCode::ArrowUp), gesture(GestureEvent::SwipeUp));
        assert_eq!(press(&mut p, WinitKeyCode::ArrowLeft), gesture(GestureEvent::SwipeLeft));
    }

    #[test]
    fn repeats_and_releases_produce_no_gesture() {
        let mut p = processor();
        assert!(p.process_key(WinitKeyCode::Space, ElementState::Pressed, true).is_none());
        assert!(release(&mut p, WinitKeyCode::ArrowDown).is_none());
        assert!(press(&mut p, WinitKeyCode::KeyQ).is_none());
    }

    #[test]
    fn tilt_keys_emit_attitude_on_change() {
        let mut p = processor();
        assert_eq!(press(&mut p, WinitKeyCode::KeyW), attitude(0.5, 0.0));
        assert!(p.process_key(WinitKeyCode::KeyW, ElementState::Pressed, true).is_none());
        assert_eq!(press(&mut p, WinitKeyCode::KeyA), attitude(0.5, -0.5));
        assert_eq!(release(&mut p, WinitKeyCode::KeyW), attitude(0.0, -0.5));
    }

    #[test]
    fn opposite_tilt_keys_cancel() {
        let mut p = processor();
        press(&mut p, WinitKeyCode::KeyD);
        assert_eq!(press(&mut p, WinitKeyCode::KeyA), attitude(0.0, 0.0));
    }
}
