use swiper_types::PointerSource;

/// Horizontal distance in logical pixels a drag has to exceed to change slide.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// A drag in progress: where it started and which pointer drives it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: PointerSource,
    pub origin_x: f32,
    pub last_x: f32,
}

impl DragSession {
    /// Signed distance from the press, positive to the right.
    pub fn distance(&self) -> f32 {
        self.last_x - self.origin_x
    }
}

/// What a finished swipe does to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragged right past the threshold.
    Previous,
    /// Dragged left past the threshold.
    Next,
    /// Short drag, the slide snaps back.
    Cancel,
}

impl SwipeOutcome {
    pub fn from_distance(distance: f32) -> Self {
        if distance > SWIPE_THRESHOLD {
            SwipeOutcome::Previous
        } else if distance < -SWIPE_THRESHOLD {
            SwipeOutcome::Next
        } else {
            SwipeOutcome::Cancel
        }
    }
}

/// Recognizes horizontal swipes on the slide area.
///
/// At most one session exists at a time. A second press while a drag is
/// active restarts the session from the new position.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    session: Option<DragSession>,
}

impl SwipeGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, x: f32, source: PointerSource) -> DragSession {
        let session = DragSession {
            source,
            origin_x: x,
            last_x: x,
        };
        self.session = Some(session);
        session
    }

    /// Pointer moved to `x`. Returns the new drag distance, or `None` when
    /// no drag is active.
    pub fn motion(&mut self, x: f32) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.last_x = x;
        Some(session.distance())
    }

    /// Pointer released. Returns `None` when no drag was active.
    pub fn release(&mut self) -> Option<SwipeOutcome> {
        let session = self.session.take()?;
        let outcome = SwipeOutcome::from_distance(session.distance());
        tracing::trace!(
            "swipe released after {:.1}px: {outcome:?}",
            session.distance()
        );
        Some(outcome)
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the active drag needs window-wide move and release events.
    pub fn tracks_globally(&self) -> bool {
        self.session
            .is_some_and(|session| session.source.needs_global_tracking())
    }
}

/// Pointer travel on the strip below which a press still counts as a click.
pub const CLICK_SLOP: f32 = 5.0;

/// Drag-to-scroll state of the thumbnail strip.
///
/// The offset follows the pointer one to one and stays within
/// `[0, content - visible]`. The travel of the last press is kept after
/// release so a click can be told apart from a scroll.
#[derive(Debug, Clone, Default)]
pub struct StripScroll {
    offset: f32,
    max_offset: f32,
    last_x: Option<f32>,
    origin_x: f32,
    travel: f32,
}

impl StripScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    pub fn is_dragging(&self) -> bool {
        self.last_x.is_some()
    }

    pub fn press(&mut self, x: f32) {
        self.last_x = Some(x);
        self.origin_x = x;
        self.travel = 0.0;
    }

    /// Whether the last press stayed within [`CLICK_SLOP`] of where it started.
    pub fn is_click(&self) -> bool {
        self.travel <= CLICK_SLOP
    }

    /// Pointer moved to `x`. Returns the new offset when it changed.
    pub fn motion(&mut self, x: f32) -> Option<f32> {
        let last_x = self.last_x.replace(x)?;
        self.travel = self.travel.max((x - self.origin_x).abs());
        let next = (self.offset + last_x - x).clamp(0.0, self.max_offset);
        if next == self.offset {
            return None;
        }

        self.offset = next;
        Some(next)
    }

    pub fn release(&mut self) {
        self.last_x = None;
    }

    /// Update the scrollable range from the strip's content and visible widths.
    pub fn set_extent(&mut self, content: f32, visible: f32) {
        self.max_offset = (content - visible).max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_offset);
    }

    /// Adopt an offset reported by the strip itself (wheel scrolling).
    pub fn sync_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset);
    }
}
