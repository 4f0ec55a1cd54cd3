//! Position tween component.
//!
//! [`TweenPosition`] animates an entity's
//! [`Position`](super::position::Position) from one point to another over a
//! fixed duration. Interpolation is linear and position-only; each movement
//! command in a scene is one tween, and tweens on different entities run
//! independently without sharing state.
//!
//! Scenes chain further logic after some movements, so a tween can raise a
//! flag in [`WorldSignals`](crate::resources::worldsignals::WorldSignals)
//! when it completes, and another when its progress first crosses a
//! milestone fraction (the finish-line scene releases the hare only after
//! the tortoise passes 80% of its run).
//!
//! See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;
use glam::Vec3;

/// Marks a fraction of tween progress that raises a flag when first reached.
#[derive(Clone, Debug)]
pub struct Milestone {
    /// Progress fraction in `[0.0, 1.0]`.
    pub at: f32,
    /// Flag raised in `WorldSignals` when progress first reaches `at`.
    pub flag: String,
    /// Whether the flag has already been raised.
    pub reached: bool,
}

/// Animates an entity's [`Position`](super::position::Position) between two
/// points over `duration` seconds, linearly.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Starting position.
    pub from: Vec3,
    /// Ending position.
    pub to: Vec3,
    /// Duration in seconds.
    pub duration: f32,
    /// Time elapsed since the tween started.
    pub elapsed: f32,
    /// Whether the tween is still advancing.
    pub playing: bool,
    /// Flag raised in `WorldSignals` once the tween completes.
    pub done_flag: Option<String>,
    /// Optional progress milestone notification.
    pub milestone: Option<Milestone>,
}

impl TweenPosition {
    pub fn new(from: Vec3, to: Vec3, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            elapsed: 0.0,
            playing: true,
            done_flag: None,
            milestone: None,
        }
    }

    pub fn with_done_flag(mut self, flag: impl Into<String>) -> Self {
        self.done_flag = Some(flag.into());
        self
    }

    pub fn with_milestone(mut self, at: f32, flag: impl Into<String>) -> Self {
        self.milestone = Some(Milestone {
            at,
            flag: flag.into(),
            reached: false,
        });
        self
    }

    /// Normalized progress in `[0.0, 1.0]`.
    ///
    /// A non-positive duration counts as already finished.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Position at the current progress.
    ///
    /// Completion returns `to` exactly, with no floating-point residue from
    /// the interpolation formula.
    pub fn sample(&self) -> Vec3 {
        let t = self.progress();
        if t >= 1.0 {
            self.to
        } else {
            self.from + (self.to - self.from) * t
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_new_defaults() {
        let from = Vec3::new(-0.6, 0.3, 0.0);
        let to = Vec3::new(0.5, 0.0, 0.0);
        let tw = TweenPosition::new(from, to, 3.0);

        assert!(vec_approx_eq(tw.from, from));
        assert!(vec_approx_eq(tw.to, to));
        assert!(approx_eq(tw.duration, 3.0));
        assert!(approx_eq(tw.elapsed, 0.0));
        assert!(tw.playing);
        assert!(tw.done_flag.is_none());
        assert!(tw.milestone.is_none());
    }

    #[test]
    fn test_builder_flags() {
        let tw = TweenPosition::new(Vec3::ZERO, Vec3::X, 1.0)
            .with_done_flag("arrived")
            .with_milestone(0.8, "almost");

        assert_eq!(tw.done_flag.as_deref(), Some("arrived"));
        let ms = tw.milestone.as_ref().unwrap();
        assert!(approx_eq(ms.at, 0.8));
        assert_eq!(ms.flag, "almost");
        assert!(!ms.reached);
    }

    #[test]
    fn test_sample_at_start_is_from() {
        let from = Vec3::new(-1.1, 0.3, 0.2);
        let tw = TweenPosition::new(from, Vec3::new(1.5, 0.3, 0.2), 5.0);
        assert!(vec_approx_eq(tw.sample(), from));
    }

    #[test]
    fn test_sample_at_end_is_exactly_to() {
        let to = Vec3::new(1.5, 0.3, 0.2);
        let mut tw = TweenPosition::new(Vec3::new(-1.1, 0.3, 0.2), to, 5.0);
        tw.elapsed = 5.0;
        // bit-exact, not just approximate
        assert_eq!(tw.sample(), to);

        tw.elapsed = 7.5;
        assert_eq!(tw.sample(), to);
    }

    #[test]
    fn test_sample_midpoint() {
        let from = Vec3::new(0.0, 0.0, 0.0);
        let to = Vec3::new(2.0, -4.0, 1.0);
        let mut tw = TweenPosition::new(from, to, 4.0);
        tw.elapsed = 2.0;
        assert!(vec_approx_eq(tw.sample(), (from + to) * 0.5));
    }

    #[test]
    fn test_sample_components_independent() {
        let from = Vec3::new(0.0, 100.0, -10.0);
        let to = Vec3::new(100.0, 0.0, 10.0);
        let mut tw = TweenPosition::new(from, to, 1.0);
        tw.elapsed = 0.25;
        let s = tw.sample();
        assert!(approx_eq(s.x, 25.0));
        assert!(approx_eq(s.y, 75.0));
        assert!(approx_eq(s.z, -5.0));
    }

    #[test]
    fn test_zero_duration_counts_as_finished() {
        let to = Vec3::new(1.0, 2.0, 3.0);
        let tw = TweenPosition::new(Vec3::ZERO, to, 0.0);
        assert!(approx_eq(tw.progress(), 1.0));
        assert_eq!(tw.sample(), to);
    }
}
