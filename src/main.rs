//! gesture-gate-demo - a glider kept aloft by tilting.
//!
//! Click or press Space to start. Hold W/S to climb or dive, A/D to bank.
//! Arrow keys (or mouse drags) trigger swipe manoeuvres. Stay between the
//! ground and the ceiling for the whole flight to win; tap again to retry.

use gesture_gate::prelude::*;
use log::info;

const FLIGHT_SECONDS: f64 = 20.0;
const CEILING: f32 = 100.0;
const CLIMB_RATE: f32 = 12.0;
const SINK_RATE: f32 = 1.5;
const DRIFT_RATE: f32 = 10.0;
const SWIPE_HOP: f32 = 6.0;

struct Glider {
    state: LevelState,
    altitude: f32,
    lateral: f32,
    climb: f32,
    drift: f32,
    started_at: Option<f64>,
    last_time: Option<f64>,
    announced: bool,
}

impl Glider {
    fn new() -> Self {
        Self {
            state: LevelState::Ready,
            altitude: 0.0,
            lateral: 0.0,
            climb: 0.0,
            drift: 0.0,
            started_at: None,
            last_time: None,
            announced: false,
        }
    }

    fn finish(&mut self, state: LevelState, hud: &mut dyn Hud) {
        self.state = state;
        let title = if state == LevelState::Win { "YOU WIN" } else { "GAME OVER" };
        hud.message(title, "- Touch screen to restart -");
        info!("Flight ended: {:?} at altitude {:.1}", state, self.altitude);
    }
}

impl Level for Glider {
    fn state(&self) -> LevelState {
        self.state
    }

    fn create(&mut self) {
        self.altitude = CEILING / 2.0;
    }

    fn start(&mut self) {
        self.state = LevelState::Play;
    }

    fn swipe_left(&mut self) {
        self.lateral -= SWIPE_HOP;
    }

    fn swipe_right(&mut self) {
        self.lateral += SWIPE_HOP;
    }

    fn swipe_up(&mut self) {
        self.altitude += SWIPE_HOP;
    }

    fn swipe_down(&mut self) {
        self.altitude -= SWIPE_HOP;
    }

    fn motion_move_up(&mut self) {
        self.climb = CLIMB_RATE;
    }

    fn motion_move_down(&mut self) {
        self.climb = -CLIMB_RATE;
    }

    fn motion_move_left(&mut self) {
        self.drift = -DRIFT_RATE;
    }

    fn motion_move_right(&mut self) {
        self.drift = DRIFT_RATE;
    }

    fn motion_stop_moving_up_down(&mut self) {
        self.climb = 0.0;
    }

    fn motion_stop_moving_left_right(&mut self) {
        self.drift = 0.0;
    }

    fn update(&mut self, time: f64, hud: &mut dyn Hud) {
        let dt = self.last_time.map_or(0.0, |last| (time - last) as f32);
        self.last_time = Some(time);

        if self.state != LevelState::Play {
            return;
        }

        let started_at = *self.started_at.get_or_insert(time);
        if !self.announced {
            hud.message("FLY!", "- Tilt to stay aloft -");
            self.announced = true;
        }

        self.altitude += (self.climb - SINK_RATE) * dt;
        self.lateral += self.drift * dt;

        if self.altitude <= 0.0 || self.altitude >= CEILING {
            self.finish(LevelState::Loose, hud);
        } else if time - started_at >= FLIGHT_SECONDS {
            self.finish(LevelState::Win, hud);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    EngineBuilder::new(Glider::new)
        .with_window_title("Gesture Gate - Glider")
        .build()
        .run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_crashes_when_sinking_to_the_ground() {
        let mut hud = LogHud::new();
        let mut glider = Glider::new();
        glider.create();
        glider.start();
        glider.motion_move_down();

        let mut time = 0.0;
        while glider.state() == LevelState::Play && time < FLIGHT_SECONDS {
            glider.update(time, &mut hud);
            time += 0.1;
        }

        assert_eq!(glider.state(), LevelState::Loose);
        assert_eq!(hud.last_message().map(|(title, _)| title), Some("GAME OVER"));
    }

    #[test]
    fn glider_wins_after_full_flight() {
        let mut hud = LogHud::new();
        let mut glider = Glider::new();
        glider.create();
        glider.start();

        // Sink is slow enough to survive the flight from half height.
        let mut time = 0.0;
        while glider.state() == LevelState::Play {
            glider.update(time, &mut hud);
            time += 0.5;
        }

        assert_eq!(glider.state(), LevelState::Win);
    }
}
