//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::error::EventLoopError;

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Messages sent from the platform thread to the core thread.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Input collected during one platform frame.
    ///
    /// - `discrete`: gestures, in the order they were recognized
    /// - `continuous`: coalesced attitude samples (at most one per frame)
    Inputs {
        discrete: Vec<InputEvent>,
        continuous: Vec<InputEvent>,
    },

    /// Window close requested. The core thread exits on receipt.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// Both are fatal: without an event loop there is no input.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::GestureEvent;

    #[test]
    fn platform_event_is_cloneable_and_debug() {
        let event = PlatformEvent::Inputs {
            discrete: vec![InputEvent::Gesture(GestureEvent::Tap)],
            continuous: vec![],
        };
        let cloned = event.clone();
        assert!(format!("{:?}", cloned).contains("Tap"));
        assert!(format!("{:?}", PlatformEvent::WindowClosed).contains("WindowClosed"));
    }

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
