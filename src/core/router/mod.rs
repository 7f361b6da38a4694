//=========================================================================
// Input Router
//=========================================================================
//
// Gates gestures and motion by level state and forwards legal input as
// level commands.
//
// Gate:
// ```text
//   state   │ Tap                         │ Swipe      │ Motion
//  ─────────┼─────────────────────────────┼────────────┼──────────
//   Ready   │ motion.start, level.start   │ ignored    │ forwarded*
//   Play    │ ignored                     │ forwarded  │ forwarded
//   Win     │ motion.stop, level.stop,    │ ignored    │ ignored
//   Loose   │ discard, queue RestartLevel │            │
//   (none)  │ ignored                     │ ignored    │ ignored
// ```
//
// * Motion only flows once the tap has started the source. The level may
//   stay in Ready after `start()` for a while; the source reports zone
//   changes only, so a tilt dropped there would never be seen again.
//
// Restart is two-phase. The tap handler empties the level slot and
// queues `Task::RestartLevel`; `run_pending_tasks()` builds the new level
// at the tick boundary. Between the two, every dispatch sees an empty
// slot and does nothing.
//
//=========================================================================

//=== Module Declarations =================================================

mod task_queue;

//=== Public API ==========================================================

pub use task_queue::{Task, TaskQueue};

//=== External Dependencies ===============================================

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::hud::Hud;
use crate::core::input::{Attitude, GestureEvent, InputEvent, MotionEvent};
use crate::core::level::{Level, LevelFactory, LevelState};
use crate::core::motion::{MotionDelegate, MotionSource};

//=== FrameSignal =========================================================

/// Result of the per-frame hook, telling the render loop what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// A level was updated; keep looping.
    Continue,

    /// No level is bound (restart pending); nothing was updated.
    Idle,
}

//=== InputRouter =========================================================

/// Owns the current level and the motion source and gates input
/// between them.
///
/// Must only be driven from the game thread.
pub struct InputRouter {
    level: Option<Box<dyn Level>>,
    hud: Box<dyn Hud>,
    motion: Box<dyn MotionSource>,
    factory: LevelFactory,
    tasks: TaskQueue,
    motion_events: Vec<MotionEvent>,
}

impl InputRouter {
    //--- Construction -----------------------------------------------------

    /// Builds the first level and shows the ready prompt.
    pub fn new(
        mut factory: LevelFactory,
        mut hud: Box<dyn Hud>,
        motion: Box<dyn MotionSource>,
    ) -> Self {
        let level = Self::build_level(&mut factory);
        hud.show_ready();

        Self {
            level: Some(level),
            hud,
            motion,
            factory,
            tasks: TaskQueue::new(),
            motion_events: Vec::with_capacity(2),
        }
    }

    //--- Queries ----------------------------------------------------------

    /// State of the bound level, or `None` while a restart is pending.
    pub fn level_state(&self) -> Option<LevelState> {
        self.level.as_ref().map(|level| level.state())
    }

    pub fn is_level_bound(&self) -> bool {
        self.level.is_some()
    }

    pub fn is_motion_active(&self) -> bool {
        self.motion.is_active()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }

    //--- Input Entry Points -----------------------------------------------

    /// Routes one platform input event.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Gesture(gesture) => self.handle_gesture(gesture),
            InputEvent::Attitude(attitude) => self.handle_attitude(attitude),
        }
    }

    /// Applies the gesture gate.
    pub fn handle_gesture(&mut self, gesture: GestureEvent) {
        let Some(state) = self.level_state() else {
            trace!(target: "router", "No level bound, dropping {:?}", gesture);
            return;
        };

        if gesture.is_swipe() {
            self.handle_swipe(gesture, state);
        } else {
            self.handle_tap(state);
        }
    }

    /// Feeds an attitude sample to the motion source and forwards the
    /// resulting events through the delegate callbacks.
    pub fn handle_attitude(&mut self, attitude: Attitude) {
        self.motion.process(attitude, &mut self.motion_events);

        let events = std::mem::take(&mut self.motion_events);
        for &event in &events {
            self.dispatch_motion(event);
        }

        // Keep the allocation for the next sample.
        self.motion_events = events;
        self.motion_events.clear();
    }

    //--- Frame Hook -------------------------------------------------------

    /// Called once per simulated frame, after physics has settled.
    pub fn on_physics_settled(&mut self, time: f64) -> FrameSignal {
        let Some(level) = self.level.as_mut() else {
            return FrameSignal::Idle;
        };

        level.update(time, self.hud.as_mut());
        FrameSignal::Continue
    }

    //--- Deferred Work ----------------------------------------------------

    /// Runs every queued task. Returns how many ran.
    ///
    /// Call at the tick boundary, never from inside an input handler.
    pub fn run_pending_tasks(&mut self) -> usize {
        let tasks = self.tasks.take();
        let count = tasks.len();

        for task in tasks {
            match task {
                Task::RestartLevel => self.restart_level(),
            }
        }

        count
    }

    //--- Gate Helpers -----------------------------------------------------

    fn handle_tap(&mut self, state: LevelState) {
        if state.is_terminal() {
            self.discard_level(state);
        } else if state == LevelState::Ready {
            self.start_level();
        } else {
            trace!(target: "router", "Tap ignored while playing");
        }
    }

    fn handle_swipe(&mut self, swipe: GestureEvent, state: LevelState) {
        if state != LevelState::Play {
            trace!(target: "router", "{:?} ignored in state {:?}", swipe, state);
            return;
        }

        let Some(level) = self.level.as_mut() else {
            return;
        };

        match swipe {
            GestureEvent::SwipeLeft => level.swipe_left(),
            GestureEvent::SwipeRight => level.swipe_right(),
            GestureEvent::SwipeUp => level.swipe_up(),
            GestureEvent::SwipeDown => level.swipe_down(),
            GestureEvent::Tap => {}
        }
    }

    fn start_level(&mut self) {
        if self.motion.is_active() {
            warn!(target: "router", "Motion source already running, not starting it again");
        } else {
            self.motion.start();
        }

        if let Some(level) = self.level.as_mut() {
            debug!(target: "router", "Starting level");
            level.start();
        }
    }

    fn discard_level(&mut self, state: LevelState) {
        self.motion.stop();

        if let Some(mut level) = self.level.take() {
            level.stop();
        }

        if self.tasks.contains(Task::RestartLevel) {
            return;
        }

        info!(target: "router", "Level finished ({:?}), restart scheduled", state);
        self.tasks.push(Task::RestartLevel);
    }

    fn restart_level(&mut self) {
        if self.level.is_some() {
            warn!(target: "router", "Restart ran with a level still bound, replacing it");
        }

        let level = Self::build_level(&mut self.factory);
        self.hud.reset();
        self.level = Some(level);
        self.hud.show_ready();

        info!(target: "router", "New level ready");
    }

    fn build_level(factory: &mut LevelFactory) -> Box<dyn Level> {
        let mut level = factory();
        level.create();
        level
    }

    fn forward_motion(&mut self, event: MotionEvent) {
        let Some(level) = self.level.as_mut() else {
            trace!(target: "router", "No level bound, dropping {:?}", event);
            return;
        };

        let active = self.motion.is_active();
        debug_assert!(active, "{:?} delivered while the motion source is stopped", event);
        if !active {
            warn!(target: "router", "{:?} delivered while the motion source is stopped", event);
            return;
        }

        let state = level.state();
        if state.is_terminal() {
            trace!(target: "router", "{:?} ignored in state {:?}", event, state);
            return;
        }

        match event {
            MotionEvent::MoveUp => level.motion_move_up(),
            MotionEvent::MoveDown => level.motion_move_down(),
            MotionEvent::StopUpDown => level.motion_stop_moving_up_down(),
            MotionEvent::MoveLeft => level.motion_move_left(),
            MotionEvent::MoveRight => level.motion_move_right(),
            MotionEvent::StopLeftRight => level.motion_stop_moving_left_right(),
        }
    }
}

//=== Motion Delegate =====================================================

impl MotionDelegate for InputRouter {
    fn motion_move_up(&mut self) {
        self.forward_motion(MotionEvent::MoveUp);
    }

    fn motion_move_down(&mut self) {
        self.forward_motion(MotionEvent::MoveDown);
    }

    fn motion_stop_moving_up_down(&mut self) {
        self.forward_motion(MotionEvent::StopUpDown);
    }

    fn motion_move_left(&mut self) {
        self.forward_motion(MotionEvent::MoveLeft);
    }

    fn motion_move_right(&mut self) {
        self.forward_motion(MotionEvent::MoveRight);
    }

    fn motion_stop_moving_left_right(&mut self) {
        self.forward_motion(MotionEvent::StopLeftRight);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
