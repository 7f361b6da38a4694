//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use gesture_gate::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Input vocabulary
pub use crate::core::input::{Attitude, GestureEvent, InputEvent, MotionEvent};

// Level and HUD interfaces
pub use crate::core::hud::{Hud, LogHud};
pub use crate::core::level::{Level, LevelFactory, LevelState};

// Motion
pub use crate::core::motion::{AttitudeMotionSource, MotionConfig, MotionDelegate, MotionSource};

// Router
pub use crate::core::router::{FrameSignal, InputRouter, Task, TaskQueue};
