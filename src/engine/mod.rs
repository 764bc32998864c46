//! Wheel spin engine.
//!
//! The animation is an explicit state machine (`Idle -> Spinning -> Idle`)
//! advanced by [`SpinAnimator::tick`]. The engine never sleeps or schedules
//! anything itself; the host decides the frame cadence and feeds in the
//! current instant, which keeps every transition unit-testable without a
//! render loop.

pub mod config;
pub mod easing;
pub mod outcome;

use std::time::{Duration, Instant};

pub use config::WheelConfig;
pub use easing::Easing;
pub use outcome::{pick, seeded_rng, UnitRandom};

/// Identifies one spin session. A fresh `start` invalidates the previous id,
/// so a stale driver loop ticking with an old id gets `None` back instead of
/// racing the new spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinId(u64);

/// Transient state of one in-flight spin
#[derive(Debug, Clone)]
struct SpinSession {
    id: SpinId,
    started_at: Instant,
    target_degrees: f64,
}

/// One rendered step of the animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinFrame {
    /// Accumulated rotation in degrees. Grows past 360 on purpose; only the
    /// renderer reduces it modulo the wheel.
    pub rotation_degrees: f64,
    /// Linear progress in `[0, 1]`
    pub progress: f64,
    /// True exactly once, on the completing frame
    pub finished: bool,
}

/// Drives rotation from 0 to a randomized target over a fixed duration
#[derive(Debug)]
pub struct SpinAnimator {
    duration: Duration,
    base_full_spins: u32,
    easing: Easing,
    next_id: u64,
    session: Option<SpinSession>,
}

impl SpinAnimator {
    pub fn new(config: &WheelConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.spin_duration_ms),
            base_full_spins: config.base_full_spins,
            easing: config.easing,
            next_id: 0,
            session: None,
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    /// Target rotation of the in-flight spin, if any
    pub fn target_degrees(&self) -> Option<f64> {
        self.session.as_ref().map(|s| s.target_degrees)
    }

    /// Begin a spin. Any in-flight session is cancelled first: its id becomes
    /// stale and its pending ticks turn into no-ops.
    ///
    /// The target lands in `[base*360, base*360 + 360)` so every spin makes
    /// at least `base_full_spins` full rotations.
    pub fn start(&mut self, now: Instant, rng: &mut dyn UnitRandom) -> SpinId {
        let id = SpinId(self.next_id);
        self.next_id += 1;

        let target_degrees =
            (rng.next_unit() * 360.0).floor() + f64::from(self.base_full_spins) * 360.0;
        self.session = Some(SpinSession {
            id,
            started_at: now,
            target_degrees,
        });
        id
    }

    /// Advance the spin identified by `id`. Returns `None` when the id is
    /// stale or nothing is spinning. The completing frame reports
    /// `finished = true` and carries exactly the target rotation; the
    /// animator is back in idle afterwards, so completion is observed once.
    pub fn tick(&mut self, id: SpinId, now: Instant) -> Option<SpinFrame> {
        let session = self.session.as_ref()?;
        if session.id != id {
            return None;
        }

        let elapsed = now.saturating_duration_since(session.started_at);
        let progress = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        let frame = SpinFrame {
            rotation_degrees: session.target_degrees * self.easing.apply(progress),
            progress,
            finished: progress >= 1.0,
        };
        if frame.finished {
            self.session = None;
        }
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::outcome::test_support::ScriptedRandom;
    use super::*;

    fn animator() -> SpinAnimator {
        SpinAnimator::new(&WheelConfig::default())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn target_stays_within_one_turn_of_the_base() {
        let mut animator = animator();
        let mut rng = seeded_rng(Some(5));
        let base = 5.0 * 360.0;
        for _ in 0..200 {
            animator.start(Instant::now(), &mut rng);
            let target = animator.target_degrees().unwrap();
            assert!(target >= base && target < base + 360.0, "target {target}");
        }
    }

    #[test]
    fn max_unit_draw_gives_base_plus_359() {
        let mut animator = animator();
        let mut rng = ScriptedRandom::new(vec![0.999_999]);
        animator.start(Instant::now(), &mut rng);
        let target = animator.target_degrees().unwrap();
        assert_eq!(target, 5.0 * 360.0 + 359.0);
    }

    #[test]
    fn rotation_is_monotonic_and_ends_on_target() {
        let mut animator = animator();
        let mut rng = seeded_rng(Some(11));
        let start = Instant::now();
        let id = animator.start(start, &mut rng);
        let target = animator.target_degrees().unwrap();

        let mut prev = -1.0;
        let mut last_frame = None;
        for step in 0..=60 {
            let frame = animator.tick(id, start + ms(step * 100)).unwrap();
            assert!(
                frame.rotation_degrees >= prev,
                "rotation regressed at step {step}"
            );
            prev = frame.rotation_degrees;
            last_frame = Some(frame);
        }
        let last = last_frame.unwrap();
        assert!(last.finished);
        assert_eq!(last.rotation_degrees, target);
    }

    #[test]
    fn completion_is_observed_exactly_once() {
        let mut animator = animator();
        let mut rng = seeded_rng(Some(3));
        let start = Instant::now();
        let id = animator.start(start, &mut rng);

        let frame = animator.tick(id, start + ms(6000)).unwrap();
        assert!(frame.finished);
        // the session is gone; further ticks are no-ops
        assert!(animator.tick(id, start + ms(6100)).is_none());
        assert!(!animator.is_spinning());
    }

    #[test]
    fn ticks_before_completion_are_unfinished() {
        let mut animator = animator();
        let mut rng = seeded_rng(Some(3));
        let start = Instant::now();
        let id = animator.start(start, &mut rng);

        let frame = animator.tick(id, start + ms(5999)).unwrap();
        assert!(!frame.finished);
        assert!(frame.progress < 1.0);
        assert!(animator.is_spinning());
    }

    #[test]
    fn restart_cancels_the_previous_session() {
        let mut animator = animator();
        let mut rng = ScriptedRandom::new(vec![0.25, 0.75]);
        let start = Instant::now();

        let first = animator.start(start, &mut rng);
        let first_target = animator.target_degrees().unwrap();
        let second = animator.start(start + ms(1000), &mut rng);
        let second_target = animator.target_degrees().unwrap();
        assert_ne!(first_target, second_target);

        // the stale id is a no-op and does not disturb the new session
        assert!(animator.tick(first, start + ms(1500)).is_none());
        let frame = animator.tick(second, start + ms(1500)).unwrap();
        assert!(!frame.finished);
        assert_eq!(animator.target_degrees(), Some(second_target));
    }

    #[test]
    fn mid_spin_frame_matches_the_easing_curve() {
        let config = WheelConfig::default();
        let mut animator = SpinAnimator::new(&config);
        let mut rng = ScriptedRandom::new(vec![0.0]);
        let start = Instant::now();
        let id = animator.start(start, &mut rng);
        let target = animator.target_degrees().unwrap();

        let frame = animator.tick(id, start + ms(3000)).unwrap();
        let expected = target * Easing::EaseOutQuart.apply(0.5);
        assert!((frame.rotation_degrees - expected).abs() < 1e-9);
        assert!((frame.progress - 0.5).abs() < 1e-9);
    }
}
