//=========================================================================
// Gesture Gate Engine
//
// Main entry point: wires the platform, the game thread and the router.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ spawns game thread
//         ├─ with_hud()              ├─ runs platform (main thread)
//         ├─ with_motion_config()    └─ blocks until exit
//         └─ with_swipe_distance()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::hud::{Hud, LogHud};
use crate::core::level::{Level, LevelFactory};
use crate::core::motion::{AttitudeMotionSource, MotionConfig, MotionSource};
use crate::core::platform_bridge::PlatformEvent;
use crate::core::router::InputRouter;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, PlatformConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (game-thread ticks per second)
/// - **Channel capacity**: 128 events
/// - **HUD**: [`LogHud`]
/// - **Motion source**: [`AttitudeMotionSource`] with [`MotionConfig::default`]
/// - **Swipe distance**: 40.0 logical pixels
/// - **Keyboard tilt**: 0.5 radians
/// - **Window title**: "Gesture Gate"
///
/// # Examples
///
/// ```no_run
/// use gesture_gate::prelude::*;
///
/// struct Runway { state: LevelState }
///
/// impl Level for Runway {
///     fn state(&self) -> LevelState { self.state }
///     fn start(&mut self) { self.state = LevelState::Play; }
///     fn update(&mut self, _time: f64, _hud: &mut dyn Hud) {}
/// }
///
/// EngineBuilder::new(|| Runway { state: LevelState::Ready })
///     .with_tps(120.0)
///     .with_motion_config(MotionConfig::new(0.3, 0.2))
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    factory: LevelFactory,
    hud: Box<dyn Hud>,
    motion: Option<Box<dyn MotionSource>>,
    motion_config: MotionConfig,
    tps: f64,
    channel_capacity: usize,
    swipe_distance: f32,
    keyboard_tilt: f32,
    title: String,
}

impl EngineBuilder {
    /// Creates a builder around a level constructor.
    ///
    /// `make_level` is called once for the first level and again on every
    /// restart.
    pub fn new<F, L>(mut make_level: F) -> Self
    where
        F: FnMut() -> L + Send + 'static,
        L: Level + 'static,
    {
        Self {
            factory: Box::new(move || Box::new(make_level()) as Box<dyn Level>),
            hud: Box::new(LogHud::new()),
            motion: None,
            motion_config: MotionConfig::default(),
            tps: 60.0,
            channel_capacity: 128,
            swipe_distance: 40.0,
            keyboard_tilt: 0.5,
            title: "Gesture Gate".to_owned(),
        }
    }

    /// Replaces the default [`LogHud`].
    pub fn with_hud<H: Hud + 'static>(mut self, hud: H) -> Self {
        self.hud = Box::new(hud);
        self
    }

    /// Replaces the default attitude source.
    ///
    /// A custom source ignores [`EngineBuilder::with_motion_config`].
    pub fn with_motion_source<M: MotionSource + 'static>(mut self, motion: M) -> Self {
        self.motion = Some(Box::new(motion));
        self
    }

    /// Sets the tilt thresholds of the default motion source.
    pub fn with_motion_config(mut self, config: MotionConfig) -> Self {
        self.motion_config = config;
        self
    }

    /// Sets the target ticks per second of the game thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → game thread messages.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the minimum drag length (logical pixels) recognized as a swipe.
    ///
    /// # Panics
    ///
    /// Panics if `distance` is not a positive finite number.
    pub fn with_swipe_distance(mut self, distance: f32) -> Self {
        assert!(
            distance.is_finite() && distance > 0.0,
            "Swipe distance must be positive, got {}",
            distance
        );
        self.swipe_distance = distance;
        self
    }

    /// Sets the tilt (radians) emulated while a W/A/S/D key is held.
    ///
    /// # Panics
    ///
    /// Panics if `tilt` is not a positive finite number.
    pub fn with_keyboard_tilt(mut self, tilt: f32) -> Self {
        assert!(
            tilt.is_finite() && tilt > 0.0,
            "Keyboard tilt must be positive, got {}",
            tilt
        );
        self.keyboard_tilt = tilt;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine. The first level is constructed here.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        let motion: Box<dyn MotionSource> = match self.motion {
            Some(motion) => motion,
            None => Box::new(AttitudeMotionSource::new(self.motion_config)),
        };

        let router = InputRouter::new(self.factory, self.hud, motion);

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(router),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            platform_config: PlatformConfig {
                title: self.title,
                swipe_distance: self.swipe_distance,
                keyboard_tilt: self.keyboard_tilt,
            },
        }
    }
}

//=== Engine ==============================================================

/// Runtime coordinating the platform and the game thread.
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Game Thread @ TPS)
///   │     └─► InputRouter ─► Level / Hud / MotionSource
///   │
///   └─► Platform (Event Loop)
///         └─► Window, gesture recognition
///
/// Communication: bounded crossbeam channel (PlatformEvent)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    platform_config: PlatformConfig,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform → game thread channel
    /// 2. Spawns the game thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On exit: the channel disconnects and the game thread terminates
    ///
    /// Platform errors and game-thread panics are logged, not propagated.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        let (tx, rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);

        let core_handle = self.orchestrator.spawn_core_thread(rx, self.tps);
        info!("Game thread spawned");

        let platform = Platform::new(tx, self.platform_config);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        match core_handle.join() {
            Ok(()) => info!("Game thread terminated cleanly"),
            Err(e) => error!("Game thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::LevelState;

    struct IdleLevel;

    impl Level for IdleLevel {
        fn state(&self) -> LevelState {
            LevelState::Ready
        }
        fn start(&mut self) {}
        fn update(&mut self, _time: f64, _hud: &mut dyn Hud) {}
    }

    fn builder() -> EngineBuilder {
        EngineBuilder::new(|| IdleLevel)
    }

    #[test]
    fn builder_defaults() {
        let builder = builder();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.swipe_distance, 40.0);
        assert_eq!(builder.keyboard_tilt, 0.5);
        assert_eq!(builder.motion_config, MotionConfig::default());
        assert_eq!(builder.title, "Gesture Gate");
        assert!(builder.motion.is_none());
    }

    #[test]
    fn builder_with_tps() {
        assert_eq!(builder().with_tps(120.0).tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        builder().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        builder().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Swipe distance must be positive")]
    fn builder_with_swipe_distance_panics_on_negative() {
        builder().with_swipe_distance(-1.0);
    }

    #[test]
    #[should_panic(expected = "Keyboard tilt must be positive")]
    fn builder_with_keyboard_tilt_panics_on_nan() {
        builder().with_keyboard_tilt(f32::NAN);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = builder()
            .with_tps(30.0)
            .with_channel_capacity(256)
            .with_swipe_distance(60.0)
            .with_keyboard_tilt(0.4)
            .with_window_title("Runway")
            .build();

        assert_eq!(engine.tps, 30.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(engine.platform_config.swipe_distance, 60.0);
        assert_eq!(engine.platform_config.keyboard_tilt, 0.4);
        assert_eq!(engine.platform_config.title, "Runway");
    }

    #[test]
    fn build_constructs_first_level() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let built = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&built);
        let _engine = EngineBuilder::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            IdleLevel
        })
        .build();

        assert_eq!(built.load(Ordering::SeqCst), 1);
    }
}
