//! Time-based tween of the slide strip position.

use std::time::{Duration, Instant};

/// Duration of the slide change animation.
pub const SLIDE_TRANSITION: Duration = Duration::from_secs(1);

/// Position of the slide strip, independent of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideOffset {
    /// Number of slide widths shifted to the left.
    pub slides: f32,
    /// Live drag distance added on top, in logical pixels.
    pub drag_px: f32,
}

impl SlideOffset {
    pub fn at(index: usize) -> Self {
        Self {
            slides: index as f32,
            drag_px: 0.0,
        }
    }

    pub fn dragged(index: usize, drag_px: f32) -> Self {
        Self {
            slides: index as f32,
            drag_px,
        }
    }

    /// Horizontal offset of the first slide for a viewport `width` wide.
    pub fn to_pixels(self, width: f32) -> f32 {
        -self.slides * width + self.drag_px
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            slides: self.slides + (to.slides - self.slides) * t,
            drag_px: self.drag_px + (to.drag_px - self.drag_px) * t,
        }
    }
}

/// CSS `ease` timing function, `cubic-bezier(0.25, 0.1, 0.25, 1.0)`.
pub fn css_ease(t: f32) -> f32 {
    cubic_bezier(0.25, 0.1, 0.25, 1.0, t)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let curve = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Solve x(s) = t for the curve parameter.
    let mut s = t;
    for _ in 0..8 {
        let err = curve(x1, x2, s) - t;
        if err.abs() < 1e-5 {
            return curve(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = t;
    for _ in 0..32 {
        let x = curve(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }

    curve(y1, y2, s)
}

/// Animates the strip between two offsets.
///
/// While dragging or resizing the strip follows its target without
/// animation; any other target change eases over [`SLIDE_TRANSITION`].
#[derive(Debug, Clone)]
pub struct SlideTransition {
    from: SlideOffset,
    to: SlideOffset,
    started: Option<Instant>,
    duration: Duration,
}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::new(SlideOffset::default())
    }
}

impl SlideTransition {
    pub fn new(at: SlideOffset) -> Self {
        Self {
            from: at,
            to: at,
            started: None,
            duration: SLIDE_TRANSITION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn target(&self) -> SlideOffset {
        self.to
    }

    pub fn is_running(&self) -> bool {
        self.started.is_some()
    }

    /// Jump to `to` immediately.
    pub fn snap(&mut self, to: SlideOffset) {
        self.from = to;
        self.to = to;
        self.started = None;
    }

    /// Start easing from the current position towards `to`.
    pub fn animate_to(&mut self, to: SlideOffset, now: Instant) {
        if to == self.to && !self.is_running() {
            return;
        }

        self.from = self.sample(now);
        self.to = to;
        if self.duration.is_zero() || self.from == to {
            self.started = None;
        } else {
            self.started = Some(now);
        }
    }

    /// Follow a new target using the snap or animate rule.
    pub fn sync(&mut self, to: SlideOffset, resizing: bool, now: Instant) {
        if resizing || to.drag_px != 0.0 {
            self.snap(to);
        } else if to != self.to {
            self.animate_to(to, now);
        }
    }

    /// Position at `now`, without advancing the state.
    pub fn sample(&self, now: Instant) -> SlideOffset {
        let Some(started) = self.started else {
            return self.to;
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.duration {
            return self.to;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(self.to, css_ease(t))
    }

    /// Advance to `now`. Returns the position and finishes the animation
    /// once its duration has elapsed.
    pub fn tick(&mut self, now: Instant) -> SlideOffset {
        let offset = self.sample(now);
        if let Some(started) = self.started
            && now.saturating_duration_since(started) >= self.duration
        {
            self.finish();
        }
        offset
    }

    pub fn finish(&mut self) {
        self.from = self.to;
        self.started = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_formula() {
        assert_eq!(SlideOffset::at(0).to_pixels(800.0), 0.0);
        assert_eq!(SlideOffset::at(2).to_pixels(800.0), -1600.0);
        assert_eq!(SlideOffset::dragged(1, 40.0).to_pixels(500.0), -460.0);
    }

    #[test]
    fn test_css_ease_endpoints_and_shape() {
        assert_eq!(css_ease(0.0), 0.0);
        assert_eq!(css_ease(1.0), 1.0);
        let mid = css_ease(0.5);
        assert!((mid - 0.8024).abs() < 0.01, "ease(0.5) = {mid}");
        let mut last = 0.0;
        for i in 1..=20 {
            let v = css_ease(i as f32 / 20.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_animate_and_finish() {
        let start = Instant::now();
        let mut transition = SlideTransition::new(SlideOffset::at(0));
        transition.animate_to(SlideOffset::at(1), start);
        assert!(transition.is_running());

        let mid = transition.tick(start + Duration::from_millis(500));
        assert!(mid.slides > 0.0 && mid.slides < 1.0);
        assert!(transition.is_running());

        let end = transition.tick(start + SLIDE_TRANSITION);
        assert_eq!(end, SlideOffset::at(1));
        assert!(!transition.is_running());
    }

    #[test]
    fn test_retarget_starts_from_current_position() {
        let start = Instant::now();
        let mut transition = SlideTransition::new(SlideOffset::at(0));
        transition.animate_to(SlideOffset::at(2), start);
        let half = start + Duration::from_millis(500);
        let here = transition.sample(half);

        transition.animate_to(SlideOffset::at(0), half);
        assert_eq!(transition.sample(half), here);
        assert_eq!(transition.target(), SlideOffset::at(0));
    }

    #[test]
    fn test_sync_snaps_while_dragging_or_resizing() {
        let now = Instant::now();
        let mut transition = SlideTransition::new(SlideOffset::at(1));

        transition.sync(SlideOffset::dragged(1, -30.0), false, now);
        assert!(!transition.is_running());
        assert_eq!(transition.sample(now), SlideOffset::dragged(1, -30.0));

        transition.sync(SlideOffset::at(2), true, now);
        assert!(!transition.is_running());
        assert_eq!(transition.sample(now).slides, 2.0);
    }

    #[test]
    fn test_sync_animates_release() {
        let now = Instant::now();
        let mut transition = SlideTransition::new(SlideOffset::dragged(1, 60.0));
        transition.sync(SlideOffset::at(1), false, now);
        assert!(transition.is_running());
        assert_eq!(transition.sample(now).drag_px, 60.0);
    }

    #[test]
    fn test_sync_same_target_is_noop() {
        let now = Instant::now();
        let mut transition = SlideTransition::new(SlideOffset::at(3));
        transition.sync(SlideOffset::at(3), false, now);
        assert!(!transition.is_running());
    }

    #[test]
    fn test_zero_duration_snaps() {
        let now = Instant::now();
        let mut transition = SlideTransition::default().with_duration(Duration::ZERO);
        transition.animate_to(SlideOffset::at(4), now);
        assert!(!transition.is_running());
        assert_eq!(transition.sample(now), SlideOffset::at(4));
    }
}
