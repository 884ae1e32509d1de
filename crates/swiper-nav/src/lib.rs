//! Interaction core of the swiper: slide index management, drag gesture
//! recognition, resize debouncing and the slide transition. Nothing in here
//! knows about the GUI toolkit.

pub mod carousel;
pub mod gesture;
pub mod resize;
pub mod transition;

pub use carousel::Carousel;
pub use gesture::{
    CLICK_SLOP, DragSession, SWIPE_THRESHOLD, StripScroll, SwipeGesture, SwipeOutcome,
};
pub use resize::{RESIZE_SETTLE, ResizeDebounce, ResizeTicket};
pub use transition::{SLIDE_TRANSITION, SlideOffset, SlideTransition, css_ease};
