//=========================================================================
// Event Collector
//=========================================================================
//
// Core-side drain of the platform channel with shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → frame input → TickControl
//
// A frame's input is one ordered list: every gesture in arrival order,
// then at most one attitude sample (the newest seen this tick). Gestures
// go first so a tap that starts the motion source is applied before the
// tilt it should observe.
//
// Draining is bounded per frame so a flood of platform messages cannot
// starve the level update. Leftovers are picked up on the next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::{Attitude, InputEvent};

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Turns the platform channel into one ordered input list per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    frame: Vec<InputEvent>,
}

impl EventCollector {
    const MAX_MESSAGES_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            frame: Vec::with_capacity(8),
        }
    }

    /// Replaces the frame input with whatever the platform sent since the
    /// last call.
    ///
    /// Returns [`TickControl::Exit`] on `WindowClosed` or when the platform
    /// side of the channel is gone.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.frame.clear();
        let mut latest_attitude: Option<Attitude> = None;
        let mut messages = 0;

        while messages < Self::MAX_MESSAGES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                    messages += 1;
                    for event in discrete.into_iter().chain(continuous) {
                        match event {
                            InputEvent::Gesture(_) => self.frame.push(event),
                            InputEvent::Attitude(sample) => latest_attitude = Some(sample),
                        }
                    }
                }
                Ok(PlatformEvent::WindowClosed) => return TickControl::Exit,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if messages == Self::MAX_MESSAGES_PER_FRAME && !self.receiver.is_empty() {
            warn!(
                "Platform backlog: {} messages deferred to the next tick",
                self.receiver.len()
            );
        }

        self.frame.extend(latest_attitude.map(InputEvent::Attitude));
        TickControl::Continue
    }

    /// Input gathered by the last [`EventCollector::collect_frame`].
    pub(crate) fn frame(&self) -> &[InputEvent] {
        &self.frame
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::GestureEvent;
    use crossbeam_channel::{unbounded, Sender};

    fn send(tx: &Sender<PlatformEvent>, discrete: Vec<InputEvent>, continuous: Vec<InputEvent>) {
        tx.send(PlatformEvent::Inputs { discrete, continuous }).unwrap();
    }

    fn tilt(pitch: f32, roll: f32) -> InputEvent {
        Attitude::new(pitch, roll).into()
    }

    #[test]
    fn empty_channel_gives_empty_frame() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.frame().is_empty());
    }

    #[test]
    fn gestures_keep_order_and_precede_attitude() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        send(&tx, vec![GestureEvent::Tap.into()], vec![tilt(0.4, 0.0)]);
        send(&tx, vec![GestureEvent::SwipeUp.into()], vec![]);

        collector.collect_frame();
        assert_eq!(
            collector.frame(),
            [
                InputEvent::Gesture(GestureEvent::Tap),
                InputEvent::Gesture(GestureEvent::SwipeUp),
                tilt(0.4, 0.0),
            ]
        );
    }

    #[test]
    fn only_newest_attitude_survives_a_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        send(&tx, vec![], vec![tilt(0.1, 0.0)]);
        send(&tx, vec![], vec![tilt(0.2, -0.3)]);

        collector.collect_frame();
        assert_eq!(collector.frame(), [tilt(0.2, -0.3)]);
    }

    #[test]
    fn frame_is_replaced_on_each_collect() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        send(&tx, vec![GestureEvent::Tap.into()], vec![]);
        collector.collect_frame();
        assert_eq!(collector.frame().len(), 1);

        collector.collect_frame();
        assert!(collector.frame().is_empty());
    }

    #[test]
    fn window_closed_exits_even_with_pending_input() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        send(&tx, vec![GestureEvent::Tap.into()], vec![]);
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn disconnect_exits() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_spills_into_next_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for _ in 0..EventCollector::MAX_MESSAGES_PER_FRAME + 5 {
            send(&tx, vec![GestureEvent::SwipeLeft.into()], vec![]);
        }

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.frame().len(), EventCollector::MAX_MESSAGES_PER_FRAME);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.frame().len(), 5);
    }
}
