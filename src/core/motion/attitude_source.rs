//=========================================================================
// Attitude Motion Source
//=========================================================================
//
// Threshold-based motion source.
//
// Each axis sits in one of three zones. An event is emitted only when an
// axis changes zone, so a steady tilt produces a single Move and the
// return to neutral produces a single Stop.
//
//   pitch:  ──Down──┤-t   neutral   +t├──Up──
//   roll:   ──Left──┤-t   neutral   +t├──Right──
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::{MotionConfig, MotionSource};
use crate::core::input::{Attitude, MotionEvent};

//=== Zone ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Negative,
    Neutral,
    Positive,
}

impl Zone {
    fn classify(value: f32, threshold: f32) -> Self {
        if value > threshold {
            Zone::Positive
        } else if value < -threshold {
            Zone::Negative
        } else {
            Zone::Neutral
        }
    }
}

//=== AttitudeMotionSource ================================================

/// Default [`MotionSource`] driven by raw [`Attitude`] samples.
#[derive(Debug)]
pub struct AttitudeMotionSource {
    config: MotionConfig,
    active: bool,
    pitch: Zone,
    roll: Zone,
}

impl AttitudeMotionSource {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            active: false,
            pitch: Zone::Neutral,
            roll: Zone::Neutral,
        }
    }

    fn reset_zones(&mut self) {
        self.pitch = Zone::Neutral;
        self.roll = Zone::Neutral;
    }
}

impl Default for AttitudeMotionSource {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

impl MotionSource for AttitudeMotionSource {
    fn start(&mut self) {
        if self.active {
            debug!(target: "motion", "Motion source already active");
            return;
        }
        debug!(target: "motion", "Motion source started");
        self.reset_zones();
        self.active = true;
    }

    fn stop(&mut self) {
        if !self.active {
            return;
        }
        debug!(target: "motion", "Motion source stopped");
        self.active = false;
        self.reset_zones();
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn process(&mut self, attitude: Attitude, out: &mut Vec<MotionEvent>) {
        if !self.active {
            return;
        }

        if !attitude.is_finite() {
            trace!(target: "motion", "Ignoring non-finite sample {:?}", attitude);
            return;
        }

        let pitch = Zone::classify(attitude.pitch, self.config.pitch_threshold);
        if pitch != self.pitch {
            self.pitch = pitch;
            out.push(match pitch {
                Zone::Positive => MotionEvent::MoveUp,
                Zone::Negative => MotionEvent::MoveDown,
                Zone::Neutral => MotionEvent::StopUpDown,
            });
        }

        let roll = Zone::classify(attitude.roll, self.config.roll_threshold);
        if roll != self.roll {
            self.roll = roll;
            out.push(match roll {
                Zone::Positive => MotionEvent::MoveRight,
                Zone::Negative => MotionEvent::MoveLeft,
                Zone::Neutral => MotionEvent::StopLeftRight,
            });
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(source: &mut AttitudeMotionSource, pitch: f32, roll: f32) -> Vec<MotionEvent> {
        let mut out = Vec::new();
        source.process(Attitude::new(pitch, roll), &mut out);
        out
    }

    fn active_source() -> AttitudeMotionSource {
        let mut source = AttitudeMotionSource::default();
        source.start();
        source
    }

    #[test]
    fn inactive_source_emits_nothing() {
        let mut source = AttitudeMotionSource::default();
        assert!(feed(&mut source, 1.0, 1.0).is_empty());
    }

    #[test]
    fn crossing_pitch_threshold_emits_move_once() {
        let mut source = active_source();
        assert_eq!(feed(&mut source, 0.5, 0.0), vec![MotionEvent::MoveUp]);
        assert!(feed(&mut source, 0.6, 0.0).is_empty(), "Steady tilt must not repeat");
    }

    #[test]
    fn returning_to_neutral_emits_stop() {
        let mut source = active_source();
        feed(&mut source, -0.5, 0.0);
        assert_eq!(feed(&mut source, 0.1, 0.0), vec![MotionEvent::StopUpDown]);
    }

    #[test]
    fn flipping_direction_emits_latest_move_only() {
        let mut source = active_source();
        feed(&mut source, 0.5, 0.0);
        assert_eq!(feed(&mut source, -0.5, 0.0), vec![MotionEvent::MoveDown]);
    }

    #[test]
    fn roll_maps_to_left_and_right() {
        let mut source = active_source();
        assert_eq!(feed(&mut source, 0.0, -0.4), vec![MotionEvent::MoveLeft]);
        assert_eq!(feed(&mut source, 0.0, 0.4), vec![MotionEvent::MoveRight]);
        assert_eq!(feed(&mut source, 0.0, 0.0), vec![MotionEvent::StopLeftRight]);
    }

    #[test]
    fn both_axes_report_in_one_sample() {
        let mut source = active_source();
        assert_eq!(
            feed(&mut source, 0.5, -0.5),
            vec![MotionEvent::MoveUp, MotionEvent::MoveLeft]
        );
    }

    #[test]
    fn threshold_itself_is_neutral() {
        let mut source = active_source();
        assert!(feed(&mut source, 0.25, -0.25).is_empty());
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut source = active_source();
        assert!(feed(&mut source, f32::NAN, 0.9).is_empty());
    }

    #[test]
    fn stop_is_idempotent_and_resets_zones() {
        let mut source = active_source();
        feed(&mut source, 0.5, 0.5);

        source.stop();
        source.stop();
        assert!(!source.is_active());

        source.start();
        assert_eq!(
            feed(&mut source, 0.5, 0.5),
            vec![MotionEvent::MoveUp, MotionEvent::MoveRight],
            "Zones must restart from neutral"
        );
    }

    #[test]
    fn custom_thresholds_apply() {
        let mut source = AttitudeMotionSource::new(MotionConfig::new(0.8, 0.1));
        source.start();
        assert_eq!(feed(&mut source, 0.5, 0.2), vec![MotionEvent::MoveRight]);
    }
}
