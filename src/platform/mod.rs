//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the game thread via a channel.
//
// Architecture:
// ```text
//  Main Thread:                     Game Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  Orchestrator    │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  InputRouter     │
//  │   ├─ drag → tap / swipe  │    │   ├─ gate        │
//  │   └─ WASD → attitude     │    │   ├─ motion      │
//  │   ↓                      │    │   └─ level       │
//  │  InputBuffer             │    │                  │
//  │   ├─ discrete: gestures  │    └──────────────────┘
//  │   └─ continuous: latest  │             ↑
//  │   ↓                      │             │
//  │  RedrawRequested (flush) │             │
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all buffered input for a frame
//   is sent in one message
// - **Graceful channel disconnect**: if the game thread dies, the
//   platform logs and keeps running so the window can still be closed
// - **Main thread requirement**: winit mandates the main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformConfig ======================================================

/// Window and gesture-recognition settings.
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub swipe_distance: f32,
    pub keyboard_tilt: f32,
}

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Not `Send`: stays on the main thread. Talks to the game thread only
/// through `event_sender`.
pub(crate) struct Platform {
    /// Created lazily in `resumed()` (mobile compatibility).
    window: Option<Window>,

    title: String,

    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,

    input_processor: InputProcessor,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, config: PlatformConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            title: config.title,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(config.swipe_distance, config.keyboard_tilt),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends the frame's buffered input to the game thread.
    ///
    /// A disconnected channel drops the events with a warning; the window
    /// stays responsive so the user can still close it.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation (may repeat on mobile).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale_factor = self.window.as_ref().map_or(1.0, Window::scale_factor);
                self.input_processor.process_physical_cursor(*position, scale_factor);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(event) = self.input_processor.process_mouse_button(*button, *state) {
                    trace!(target: "platform::input", "Pointer gesture: {:?}", event);
                    self.buffer.push_discrete(event);
                }
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(key_event) {
                    Some(event) if event.is_continuous() => self.buffer.push_continuous(event),
                    Some(event) => self.buffer.push_discrete(event),
                    None => trace!(target: "platform::input", "Unmapped key ignored"),
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
