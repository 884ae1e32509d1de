//! The image swiper component: a grid preview that opens a fullscreen,
//! swipeable carousel.

use std::time::Instant;

use cosmic::{
    Element, Task,
    iced::{
        Event, Subscription, event,
        keyboard::{self, Key, Modifiers},
        mouse, window,
    },
    iced_widget::scrollable,
    widget::{Id, image::Handle},
};
use swiper_config::{GridStyle, SwiperOptions};
use swiper_image::{ImageDimensions, local_path, read_dimensions};
use swiper_nav::{
    Carousel, RESIZE_SETTLE, ResizeDebounce, ResizeTicket, SlideOffset, SlideTransition,
    StripScroll, SwipeGesture,
};
use swiper_types::{NavigationStyle, PointerSource};

use crate::Message;

const STRIP_SCROLL_ID: &str = "swiper-navigation-strip";

pub struct ImageSwiper {
    pub(crate) options: SwiperOptions,
    pub(crate) style: GridStyle,
    pub(crate) navigation: Option<NavigationStyle>,
    pub(crate) carousel: Carousel,
    pub(crate) gesture: SwipeGesture,
    pub(crate) strip: StripScroll,
    strip_pointer: Option<PointerSource>,
    pressed_entry: Option<usize>,
    resize: ResizeDebounce,
    resize_timer: Option<cosmic::iced::task::Handle>,
    pub(crate) transition: SlideTransition,
    pub(crate) handles: Vec<Handle>,
    pub(crate) sizes: Vec<Option<ImageDimensions>>,
    generation: u64,
    pub(crate) strip_id: Id,
}

impl ImageSwiper {
    pub fn new(options: SwiperOptions) -> (Self, Task<Message>) {
        let mut swiper = Self {
            options: SwiperOptions::default(),
            style: GridStyle::default(),
            navigation: Some(NavigationStyle::default()),
            carousel: Carousel::default(),
            gesture: SwipeGesture::new(),
            strip: StripScroll::new(),
            strip_pointer: None,
            pressed_entry: None,
            resize: ResizeDebounce::new(),
            resize_timer: None,
            transition: SlideTransition::new(SlideOffset::default()),
            handles: Vec::new(),
            sizes: Vec::new(),
            generation: 0,
            strip_id: Id::new(STRIP_SCROLL_ID),
        };

        let task = swiper.set_options(options);
        (swiper, task)
    }

    /// Replace the options and image list. Gesture and animation state is
    /// reset; the current index is kept when still in range.
    pub fn set_options(&mut self, options: SwiperOptions) -> Task<Message> {
        self.style = options.resolved_grid_style();
        self.navigation = options.resolved_navigation();

        self.generation = self.generation.wrapping_add(1);
        self.handles = options
            .image_array
            .iter()
            .map(|image| {
                local_path(&image.source).map_or_else(
                    || {
                        tracing::warn!("remote image source {} will not load", image.source);
                        Handle::from_path(&image.source)
                    },
                    Handle::from_path,
                )
            })
            .collect();
        self.sizes = vec![None; options.image_array.len()];

        self.carousel.set_images(options.image_array.clone());
        self.gesture.cancel();
        self.strip.release();
        self.strip_pointer = None;
        self.pressed_entry = None;
        self.transition
            .snap(SlideOffset::at(self.carousel.index()));

        tracing::debug!(
            "swiper has {} images, showing {} in the grid",
            self.carousel.total(),
            self.carousel.shown_count(options.number_shown)
        );

        self.options = options;
        self.read_all_dimensions()
    }

    fn read_all_dimensions(&self) -> Task<Message> {
        let generation = self.generation;
        let tasks = self
            .options
            .image_array
            .iter()
            .enumerate()
            .filter(|(_, image)| local_path(&image.source).is_some())
            .map(|(index, image)| {
                let source = image.source.clone();
                cosmic::task::future(async move {
                    match read_dimensions(source).await {
                        Ok(dims) => Message::DimensionsRead {
                            generation,
                            index,
                            width: dims.width,
                            height: dims.height,
                        },
                        Err(err) => {
                            tracing::warn!("{err}");
                            Message::Cancelled
                        }
                    }
                })
            })
            .collect::<Vec<_>>();

        Task::batch(tasks)
    }

    pub fn options(&self) -> &SwiperOptions {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.carousel.is_open()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn drag_offset(&self) -> f32 {
        self.carousel.drag_offset()
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_resizing()
    }

    pub fn shows_prev(&self) -> bool {
        self.carousel.shows_prev()
    }

    pub fn shows_next(&self) -> bool {
        self.carousel.shows_next()
    }

    /// Images hidden behind the "more" affordance.
    pub fn more_count(&self) -> usize {
        self.carousel.more_count(self.options.number_shown)
    }

    /// Where the slide strip should be drawn right now.
    pub fn slide_offset(&self, now: Instant) -> SlideOffset {
        self.transition.sample(now)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    fn target_offset(&self) -> SlideOffset {
        SlideOffset::dragged(self.carousel.index(), self.carousel.drag_offset())
    }

    fn sync_transition(&mut self) {
        let target = self.target_offset();
        self.transition
            .sync(target, self.resize.is_resizing(), Instant::now());
    }

    fn snap_transition(&mut self) {
        let target = self.target_offset();
        self.transition.snap(target);
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenAt(index) => {
                if self.carousel.open_at(index) {
                    tracing::debug!("opened viewer at image {index}");
                    self.snap_transition();
                }
            }
            Message::OpenMore => {
                if self.carousel.open() {
                    tracing::debug!("opened viewer at image {}", self.carousel.index());
                    self.snap_transition();
                }
            }
            Message::Close => {
                self.carousel.close();
                self.gesture.cancel();
                self.strip.release();
                self.strip_pointer = None;
                self.pressed_entry = None;
                self.snap_transition();
            }
            Message::Prev => {
                if self.is_open() && self.carousel.go_prev() {
                    tracing::debug!("previous image: {}", self.carousel.index());
                }
                self.sync_transition();
            }
            Message::Next => {
                if self.is_open() && self.carousel.go_next() {
                    tracing::debug!("next image: {}", self.carousel.index());
                }
                self.sync_transition();
            }
            Message::GoTo(index) => self.go_to(index),
            Message::EntryPressed(index) => {
                self.pressed_entry = Some(index);
            }
            Message::EntryReleased(index) => {
                let pressed = self.pressed_entry.take();
                if pressed == Some(index) && self.strip.is_click() {
                    self.go_to(index);
                } else {
                    tracing::trace!("ignoring release on entry {index}, pressed {pressed:?}");
                }
            }
            Message::SwipePressed { x, source } => {
                if self.is_open() {
                    self.gesture.press(x, source);
                }
            }
            Message::SwipeMoved(x) => {
                if let Some(distance) = self.gesture.motion(x) {
                    self.carousel.set_drag_offset(distance);
                    self.sync_transition();
                }
            }
            Message::SwipeReleased => {
                if let Some(outcome) = self.gesture.release() {
                    tracing::debug!("swipe finished: {outcome:?}");
                    self.carousel.apply_swipe(outcome);
                    self.sync_transition();
                }
            }
            Message::StripPressed {
                x,
                source,
                visible_width,
            } => {
                self.strip
                    .set_extent(self.strip_content_width(), visible_width);
                self.strip.press(x);
                self.strip_pointer = Some(source);
            }
            Message::StripMoved(x) => {
                if let Some(offset) = self.strip.motion(x) {
                    return scrollable::scroll_to(
                        self.strip_id.clone(),
                        scrollable::AbsoluteOffset { x: offset, y: 0.0 },
                    );
                }
            }
            Message::StripReleased => {
                self.strip.release();
                self.strip_pointer = None;
            }
            Message::StripViewport {
                offset,
                content_width,
                visible_width,
            } => {
                self.strip.set_extent(content_width, visible_width);
                self.strip.sync_offset(offset);
            }
            Message::WindowResized => return self.on_resize(),
            Message::ResizeSettled(ticket) => {
                if self.resize.settle(ticket) {
                    tracing::trace!("resize settled");
                    self.resize_timer = None;
                }
            }
            Message::AnimationTick(now) => {
                self.transition.tick(now);
            }
            Message::DimensionsRead {
                generation,
                index,
                width,
                height,
            } => {
                if generation == self.generation
                    && let Some(size) = self.sizes.get_mut(index)
                {
                    *size = Some(ImageDimensions::new(width, height));
                }
            }
            Message::Cancelled => {}
        }

        Task::none()
    }

    fn go_to(&mut self, index: usize) {
        if self.is_open() {
            self.carousel.go_to(index);
        }
        self.sync_transition();
    }

    /// Every resize restarts the quiet period; the pending timer is aborted
    /// when its handle is replaced.
    fn on_resize(&mut self) -> Task<Message> {
        let ticket = self.resize.resized();
        self.snap_transition();

        let (task, handle) = cosmic::task::future(settle_after(ticket)).abortable();
        self.resize_timer = Some(handle.abort_on_drop());
        task
    }

    /// Width of the navigation strip content.
    pub(crate) fn strip_content_width(&self) -> f32 {
        let Some(style) = self.navigation else {
            return 0.0;
        };

        let count = self.carousel.total() as f32;
        if count == 0.0 {
            return 0.0;
        }

        count * crate::views::navigation::entry_size(style)
            + (count - 1.0) * crate::views::navigation::ENTRY_SPACING
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(window_resize_event)];

        if self.gesture.tracks_globally() {
            subscriptions.push(event::listen_with(swipe_drag_event));
        }

        if self.strip.is_dragging() && self.strip_pointer.is_some_and(|p| p.needs_global_tracking())
        {
            subscriptions.push(event::listen_with(strip_drag_event));
        }

        if self.transition.is_running() {
            subscriptions.push(window::frames().map(Message::AnimationTick));
        }

        if self.is_open() {
            subscriptions.push(keyboard::on_key_press(key_press_handler));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.view_with(Vec::new())
    }

    /// The grid preview with extra `children` after the preview cells, plus
    /// the fullscreen viewer on top while it is open.
    pub fn view_with<'a>(&'a self, children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
        let grid = self.grid_view(children);

        if self.is_open() {
            cosmic::iced_widget::stack![grid, self.viewer_view()].into()
        } else {
            grid
        }
    }
}

pub(crate) async fn settle_after(ticket: ResizeTicket) -> Message {
    tokio::time::sleep(RESIZE_SETTLE).await;
    Message::ResizeSettled(ticket)
}

fn window_resize_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(_)) => Some(Message::WindowResized),
        _ => None,
    }
}

fn swipe_drag_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::SwipeMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::SwipeReleased)
        }
        _ => None,
    }
}

fn strip_drag_event(event: Event, _status: event::Status, _id: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::StripMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::StripReleased)
        }
        _ => None,
    }
}

fn key_press_handler(key: Key, _modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Prev),
        Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Next),
        Key::Named(keyboard::key::Named::Escape) => Some(Message::Close),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use swiper_types::GalleryImage;

    fn swiper(count: usize) -> ImageSwiper {
        let images = (0..count)
            .map(|i| GalleryImage::new(format!("/nonexistent/{i}.png"), format!("Foto {i}")))
            .collect();
        ImageSwiper::new(SwiperOptions::new(images).number_shown(3)).0
    }

    #[test]
    fn test_open_and_close_keeps_index() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(3));
        assert!(s.is_open());
        assert_eq!(s.current_index(), 3);
        let _ = s.update(Message::Close);
        assert!(!s.is_open());
        let _ = s.update(Message::OpenMore);
        assert_eq!(s.current_index(), 3);
    }

    #[test]
    fn test_opening_does_not_animate() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(4));
        assert!(!s.is_animating());
        assert_eq!(s.slide_offset(Instant::now()), SlideOffset::at(4));
    }

    #[test]
    fn test_mouse_swipe_flow() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(2));
        let _ = s.update(Message::SwipePressed {
            x: 100.0,
            source: PointerSource::Mouse,
        });
        let _ = s.update(Message::SwipeMoved(250.0));
        assert_eq!(s.drag_offset(), 150.0);
        assert!(!s.is_animating());

        let _ = s.update(Message::SwipeReleased);
        assert_eq!(s.current_index(), 1);
        assert_eq!(s.drag_offset(), 0.0);
        assert!(s.is_animating());
    }

    #[test]
    fn test_swipe_ignored_while_closed() {
        let mut s = swiper(5);
        let _ = s.update(Message::SwipePressed {
            x: 0.0,
            source: PointerSource::Touch,
        });
        let _ = s.update(Message::SwipeMoved(-300.0));
        let _ = s.update(Message::SwipeReleased);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.drag_offset(), 0.0);
    }

    #[test]
    fn test_go_to_resets_drag() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(0));
        let _ = s.update(Message::SwipePressed {
            x: 0.0,
            source: PointerSource::Touch,
        });
        let _ = s.update(Message::SwipeMoved(-40.0));
        let _ = s.update(Message::GoTo(4));
        assert_eq!(s.current_index(), 4);
        assert_eq!(s.drag_offset(), 0.0);
    }

    #[test]
    fn test_resize_suppresses_transition() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(0));
        let _ = s.update(Message::WindowResized);
        assert!(s.is_resizing());

        let _ = s.update(Message::Next);
        assert_eq!(s.current_index(), 1);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_stale_resize_ticket_is_ignored() {
        let mut s = swiper(2);
        let mut debounce = ResizeDebounce::new();
        let foreign = debounce.resized();
        let _ = s.update(Message::WindowResized);
        let _ = s.update(Message::WindowResized);
        let _ = s.update(Message::ResizeSettled(foreign));
        assert!(s.is_resizing());
    }

    #[test]
    fn test_queries() {
        let mut s = swiper(5);
        assert_eq!(s.more_count(), 2);
        let _ = s.update(Message::OpenAt(0));
        assert!(!s.shows_prev());
        assert!(s.shows_next());
        let _ = s.update(Message::GoTo(4));
        assert!(s.shows_prev());
        assert!(!s.shows_next());
    }

    #[test]
    fn test_stale_dimensions_are_dropped() {
        let mut s = swiper(2);
        let _ = s.update(Message::DimensionsRead {
            generation: 0,
            index: 0,
            width: 10,
            height: 10,
        });
        assert!(s.sizes[0].is_none());

        let current = s.generation;
        let _ = s.update(Message::DimensionsRead {
            generation: current,
            index: 1,
            width: 40,
            height: 30,
        });
        assert_eq!(s.sizes[1], Some(ImageDimensions::new(40, 30)));
    }

    #[test]
    fn test_strip_drag_scrolls_within_content() {
        let mut s = swiper(20);
        let _ = s.update(Message::OpenAt(0));
        let _ = s.update(Message::StripPressed {
            x: 300.0,
            source: PointerSource::Mouse,
            visible_width: 200.0,
        });
        assert!(s.strip.is_dragging());
        let _ = s.update(Message::StripMoved(250.0));
        assert_eq!(s.strip.offset(), 50.0);
        let _ = s.update(Message::StripMoved(-5000.0));
        assert_eq!(s.strip.offset(), s.strip_content_width() - 200.0);
        let _ = s.update(Message::StripReleased);
        assert!(!s.strip.is_dragging());
    }

    fn press_entry(s: &mut ImageSwiper, index: usize, x: f32) {
        let _ = s.update(Message::EntryPressed(index));
        let _ = s.update(Message::StripPressed {
            x,
            source: PointerSource::Mouse,
            visible_width: 200.0,
        });
    }

    #[test]
    fn test_entry_click_jumps_to_slide() {
        let mut s = swiper(20);
        let _ = s.update(Message::OpenAt(0));
        press_entry(&mut s, 2, 70.0);
        let _ = s.update(Message::StripMoved(72.0));
        let _ = s.update(Message::EntryReleased(2));
        let _ = s.update(Message::StripReleased);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_strip_scroll_does_not_navigate() {
        let mut s = swiper(20);
        let _ = s.update(Message::OpenAt(0));
        press_entry(&mut s, 2, 150.0);
        let _ = s.update(Message::StripMoved(70.0));
        let _ = s.update(Message::EntryReleased(6));
        let _ = s.update(Message::StripReleased);
        assert_eq!(s.current_index(), 0);

        // Scrolling away and back onto the pressed entry is still a scroll.
        press_entry(&mut s, 3, 150.0);
        let _ = s.update(Message::StripMoved(70.0));
        let _ = s.update(Message::StripMoved(150.0));
        let _ = s.update(Message::StripReleased);
        let _ = s.update(Message::EntryReleased(3));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_swipe_released_over_strip_keeps_outcome() {
        let mut s = swiper(5);
        let _ = s.update(Message::OpenAt(1));
        let _ = s.update(Message::SwipePressed {
            x: 400.0,
            source: PointerSource::Mouse,
        });
        let _ = s.update(Message::SwipeMoved(250.0));
        let _ = s.update(Message::EntryReleased(4));
        let _ = s.update(Message::SwipeReleased);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_key_bindings() {
        assert!(matches!(
            key_press_handler(Key::Named(keyboard::key::Named::ArrowLeft), Modifiers::empty()),
            Some(Message::Prev)
        ));
        assert!(matches!(
            key_press_handler(Key::Named(keyboard::key::Named::Escape), Modifiers::empty()),
            Some(Message::Close)
        ));
        assert!(key_press_handler(Key::Character("a".into()), Modifiers::empty()).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_settles_after_quiet_period() {
        let mut debounce = ResizeDebounce::new();
        let ticket = debounce.resized();
        let started = tokio::time::Instant::now();

        let message = settle_after(ticket).await;
        assert!(started.elapsed() >= Duration::from_millis(200));
        match message {
            Message::ResizeSettled(settled) => assert!(debounce.settle(settled)),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_burst_settles_through_update() {
        let mut s = swiper(3);
        let _ = s.update(Message::OpenAt(0));

        let _ = s.update(Message::WindowResized);
        let first = s.resize.pending().unwrap();
        let _ = s.update(Message::WindowResized);
        let last = s.resize.pending().unwrap();
        assert_ne!(first, last);

        let _ = s.update(settle_after(first).await);
        assert!(s.is_resizing());

        let _ = s.update(settle_after(last).await);
        assert!(!s.is_resizing());

        let _ = s.update(Message::Next);
        assert!(s.is_animating());
    }
}
