//=========================================================================
// Input Buffer
//
// Per-frame staging area between the winit callbacks and the channel.
//
// Responsibilities:
// - Keep recognized gestures in order (discrete, never merged)
// - Coalesce attitude samples so only the latest one is sent
// - Hand both to the platform in one `drain()` at the frame boundary
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::input::InputEvent;

//=== InputBuffer =========================================================

pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Gestures are rare; a handful per frame at most.
    //
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: None,
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // The latest sample replaces any previous one (latest-value wins).
    //
    pub fn push_continuous(&mut self, event: InputEvent) {
        self.continuous = Some(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Every gesture is kept: two taps in one frame are two taps.
    //
    pub fn push_discrete(&mut self, event: InputEvent) {
        self.discrete.push(event);
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns `(discrete, continuous)` and clears the buffer, or `None`
    // when nothing was buffered this frame.
    //
    pub fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(16));
        let continuous = self.continuous.take().into_iter().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.continuous.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
