//=========================================================================
// Core Systems Orchestrator
//
// Runs the game thread: the single serialized queue on which the input
// router, the level and the HUD are mutated.
//
// Responsibilities:
// - Receive platform input via the crossbeam channel
// - Feed every input event to the router in arrival order
// - Run deferred router tasks at the tick boundary
// - Invoke the per-frame level hook
// - Maintain pacing using a fixed tick rate (TPS)
//
// Notes:
// The orchestrator runs independently from the platform layer and owns
// the router outright. Communication with the platform occurs only
// through message passing, so no locks are needed.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Module Declarations =================================================

pub mod hud;
pub mod input;
pub mod level;
pub mod motion;
pub mod router;
pub(crate) mod platform_bridge;

//=== Internal Imports ====================================================

use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use router::{FrameSignal, InputRouter};

//=== CoreSystemsOrchestrator =============================================

/// Owns the input router and drives it once per tick.
pub(crate) struct CoreSystemsOrchestrator {
    router: InputRouter,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------

    pub fn new(router: InputRouter) -> Self {
        Self { router }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the game thread and ticks the router at `tps`.
    //
    // Each tick:
    //  1. Collects platform events (exits on close / disconnect)
    //  2. Routes input, runs deferred tasks, updates the level
    //  3. Sleeps to maintain fixed pacing
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut orchestrator = self;
            let mut collector = EventCollector::new(receiver);
            let started = Instant::now();

            loop {
                let frame_start = Instant::now();
                let time = started.elapsed().as_secs_f64();

                if let TickControl::Exit = orchestrator.tick(&mut collector, time) {
                    info!("Core thread exiting.");
                    break;
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        })
    }

    //--- tick() -----------------------------------------------------------
    //
    // One frame of game-thread work. Deferred tasks run after input so a
    // restart scheduled by a tap this frame completes before the level
    // update, but never inside the tap handler itself.
    //
    fn tick(&mut self, collector: &mut EventCollector, time: f64) -> TickControl {
        if let TickControl::Exit = collector.collect_frame() {
            return TickControl::Exit;
        }

        for &event in collector.frame() {
            self.router.handle_input(event);
        }

        self.router.run_pending_tasks();

        if let FrameSignal::Idle = self.router.on_physics_settled(time) {
            trace!("No level bound this frame");
        }

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
