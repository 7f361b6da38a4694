//=========================================================================
// Input Types
//
// Portable input vocabulary shared by the platform layer and the core
// thread: gestures, attitude samples and the motion events derived
// from them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{Attitude, GestureEvent, InputEvent, MotionEvent};
