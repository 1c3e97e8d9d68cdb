use std::time::Duration;

use bevy::prelude::*;

use crate::constants::{FRAME_INTERVAL, TOTAL_FRAMES};

/// One scheduled step of a running capture session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureStep {
    pub frame: u32,
    pub angle: f32,
}

/// What a session tick asks the driver to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionTick {
    /// Rotate the capture rig and export one frame.
    Step(CaptureStep),
    /// The frame bound was reached; the session is over.
    Finished,
}

/// Spin angle for a frame index: one full turn spread over the session.
/// Frame 0 is 0; the last frame stops short of 2π so the loop tiles cleanly.
pub fn spin_angle(frame: u32, total_frames: u32) -> f32 {
    (frame as f32 / total_frames as f32) * std::f32::consts::TAU
}

/// Exclusive owner of one capture run: frame counter, pacing, running flag.
/// At most one session is active at a time; `start` on a running session is
/// a no-op.
#[derive(Resource)]
pub struct CaptureSession {
    running: bool,
    current_frame: u32,
    total_frames: u32,
    frame_interval: Duration,
    until_next_step: Duration,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(TOTAL_FRAMES, FRAME_INTERVAL)
    }
}

impl CaptureSession {
    pub fn new(total_frames: u32, frame_interval: Duration) -> Self {
        Self {
            running: false,
            current_frame: 0,
            total_frames,
            frame_interval,
            until_next_step: Duration::ZERO,
        }
    }

    /// Begin a new run. Returns `false` without touching anything if a
    /// session is already running; otherwise rewinds to frame 0 and arms the
    /// first step to fire on the next tick.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.current_frame = 0;
        self.until_next_step = Duration::ZERO;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frame index the next export will be named after.
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Advance the session clock. Emits at most one tick per call, so steps
    /// never overlap no matter how large `delta` is. Idle sessions ignore
    /// time entirely.
    pub fn advance(&mut self, delta: Duration) -> Option<SessionTick> {
        if !self.running {
            return None;
        }

        self.until_next_step = self.until_next_step.saturating_sub(delta);
        if !self.until_next_step.is_zero() {
            return None;
        }

        if self.current_frame >= self.total_frames {
            self.running = false;
            return Some(SessionTick::Finished);
        }

        let step = CaptureStep {
            frame: self.current_frame,
            angle: spin_angle(self.current_frame, self.total_frames),
        };
        self.current_frame += 1;
        self.until_next_step = self.frame_interval;
        Some(SessionTick::Step(step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    const INTERVAL: Duration = Duration::from_millis(300);

    fn running_session() -> CaptureSession {
        let mut session = CaptureSession::new(36, INTERVAL);
        assert!(session.start());
        session
    }

    /// Tick a running session to completion, one interval at a time.
    fn drain(session: &mut CaptureSession) -> Vec<SessionTick> {
        let mut ticks = Vec::new();
        for _ in 0..200 {
            if let Some(tick) = session.advance(INTERVAL) {
                let finished = tick == SessionTick::Finished;
                ticks.push(tick);
                if finished {
                    break;
                }
            }
        }
        ticks
    }

    fn steps(ticks: &[SessionTick]) -> Vec<CaptureStep> {
        ticks
            .iter()
            .filter_map(|tick| match tick {
                SessionTick::Step(step) => Some(*step),
                SessionTick::Finished => None,
            })
            .collect()
    }

    mod angles {
        use super::*;

        #[test]
        fn first_frame_has_zero_angle() {
            assert_eq!(spin_angle(0, 36), 0.0);
        }

        #[test]
        fn quarter_turn_at_a_quarter_of_the_frames() {
            assert_eq!(spin_angle(9, 36), TAU / 4.0);
        }

        #[test]
        fn last_frame_stays_short_of_a_full_turn() {
            assert!(spin_angle(35, 36) < TAU);
        }
    }

    mod start_guard {
        use super::*;

        #[test]
        fn fresh_session_is_idle() {
            let session = CaptureSession::new(36, INTERVAL);
            assert!(!session.is_running());
            assert_eq!(session.current_frame(), 0);
        }

        #[test]
        fn start_marks_running() {
            let session = running_session();
            assert!(session.is_running());
            assert_eq!(session.current_frame(), 0);
        }

        #[test]
        fn start_while_running_is_a_noop() {
            let mut session = running_session();
            session.advance(Duration::ZERO);
            session.advance(INTERVAL);
            let frame_before = session.current_frame();

            assert!(!session.start());
            assert!(session.is_running());
            assert_eq!(session.current_frame(), frame_before);

            // The in-progress sequence continues where it left off
            match session.advance(INTERVAL) {
                Some(SessionTick::Step(step)) => assert_eq!(step.frame, frame_before),
                other => panic!("expected a step, got {other:?}"),
            }
        }
    }

    mod pacing {
        use super::*;

        #[test]
        fn idle_session_ignores_time() {
            let mut session = CaptureSession::new(36, INTERVAL);
            assert_eq!(session.advance(Duration::from_secs(3600)), None);
            assert_eq!(session.current_frame(), 0);
        }

        #[test]
        fn first_step_fires_immediately() {
            let mut session = running_session();
            match session.advance(Duration::ZERO) {
                Some(SessionTick::Step(step)) => {
                    assert_eq!(step.frame, 0);
                    assert_eq!(step.angle, 0.0);
                }
                other => panic!("expected frame 0, got {other:?}"),
            }
        }

        #[test]
        fn steps_wait_out_the_full_interval() {
            let mut session = running_session();
            session.advance(Duration::ZERO);

            let third = INTERVAL / 3;
            assert_eq!(session.advance(third), None);
            assert_eq!(session.advance(third), None);
            match session.advance(third) {
                Some(SessionTick::Step(step)) => assert_eq!(step.frame, 1),
                other => panic!("expected frame 1, got {other:?}"),
            }
        }

        #[test]
        fn one_step_per_advance_even_after_a_stall() {
            let mut session = running_session();
            assert!(matches!(
                session.advance(Duration::from_secs(10)),
                Some(SessionTick::Step(_))
            ));
            // A long stall earns no burst of catch-up steps
            assert_eq!(session.advance(Duration::ZERO), None);
        }
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn one_session_emits_every_frame_then_finishes() {
            let mut session = running_session();
            let ticks = drain(&mut session);
            let steps = steps(&ticks);

            assert_eq!(steps.len(), 36);
            let frames: Vec<u32> = steps.iter().map(|step| step.frame).collect();
            assert_eq!(frames, (0..36).collect::<Vec<u32>>());
            assert_eq!(ticks.last(), Some(&SessionTick::Finished));
            assert!(!session.is_running());
        }

        #[test]
        fn angles_increase_strictly_within_a_run() {
            let mut session = running_session();
            let steps = steps(&drain(&mut session));

            assert_eq!(steps[0].angle, 0.0);
            for pair in steps.windows(2) {
                assert!(pair[0].angle < pair[1].angle);
            }
            assert!(steps.last().unwrap().angle < TAU);
        }

        #[test]
        fn completed_session_restarts_from_frame_zero() {
            let mut session = running_session();
            drain(&mut session);

            assert!(session.start());
            match session.advance(Duration::ZERO) {
                Some(SessionTick::Step(step)) => assert_eq!(step.frame, 0),
                other => panic!("expected frame 0, got {other:?}"),
            }
        }
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn angle_stays_within_one_turn(frame in 0u32..360, total in 1u32..360) {
                prop_assume!(frame < total);
                let angle = spin_angle(frame, total);
                prop_assert!(angle >= 0.0);
                prop_assert!(angle < TAU);
            }
        }
    }
}
