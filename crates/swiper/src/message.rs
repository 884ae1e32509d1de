use std::time::Instant;
use swiper_nav::ResizeTicket;
use swiper_types::PointerSource;

/// Messages handled by [`crate::ImageSwiper::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Grid preview image clicked.
    OpenAt(usize),
    /// The "more" affordance clicked.
    OpenMore,
    Close,
    Prev,
    Next,
    /// Jump to a slide.
    GoTo(usize),
    /// Pointer went down on a navigation entry.
    EntryPressed(usize),
    /// Pointer went up on a navigation entry; jumps there only when the
    /// press began on the same entry and did not scroll the strip.
    EntryReleased(usize),
    SwipePressed {
        x: f32,
        source: PointerSource,
    },
    SwipeMoved(f32),
    SwipeReleased,
    StripPressed {
        x: f32,
        source: PointerSource,
        visible_width: f32,
    },
    StripMoved(f32),
    StripReleased,
    StripViewport {
        offset: f32,
        content_width: f32,
        visible_width: f32,
    },
    WindowResized,
    ResizeSettled(ResizeTicket),
    AnimationTick(Instant),
    DimensionsRead {
        generation: u64,
        index: usize,
        width: u32,
        height: u32,
    },
    /// A background task finished without anything to report.
    Cancelled,
}
