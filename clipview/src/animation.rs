use crate::{Easing, Point};

/// An in-flight decelerated scroll from one origin to another.
///
/// This is a pure value: `sample` is a deterministic function of the
/// animation's fields and `now_ms`, with no hidden state. The owning
/// [`crate::ClipView`] holds at most one animation at a time and drops it on
/// completion or when a newer scroll request supersedes it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnimation {
    pub from: Point,
    pub to: Point,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl ScrollAnimation {
    pub fn new(from: Point, to: Point, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Samples the animated origin at `now_ms`.
    ///
    /// A `now_ms` before `start_ms` clamps to the starting origin (clock
    /// skew never produces negative progress), and any `now_ms` at or past
    /// the end returns exactly `to` with zero residual error.
    pub fn sample(&self, now_ms: u64) -> Point {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return self.to;
        }
        let t = elapsed as f64 / self.duration_ms as f64;
        let eased = self.easing.sample(t);

        Point::new(
            self.from.x + (self.to.x - self.from.x) * eased,
            self.from.y + (self.to.y - self.from.y) * eased,
        )
    }

    /// Restarts the animation from its current sampled origin toward a new
    /// target. Used to coalesce successive wheel steps into one deceleration.
    pub fn retarget(&mut self, now_ms: u64, new_to: Point, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

/// A validity token for host-scheduled per-frame callbacks.
///
/// The token is a generation counter: starting or cancelling an animation
/// bumps the generation, so a callback scheduled for an earlier animation
/// carries a stale token and [`crate::ClipView::tick_frame`] ignores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameToken(pub(crate) u64);
