use swiper_types::GalleryImage;

use crate::SwipeOutcome;

/// Gallery state: the image list, whether the fullscreen viewer is open,
/// the current slide and the live drag offset.
///
/// `cur_idx` stays below `images.len()` whenever the list is non-empty.
/// Navigation clamps at both ends, it never wraps around.
#[derive(Debug, Clone, Default)]
pub struct Carousel {
    images: Vec<GalleryImage>,
    cur_idx: usize,
    is_open: bool,
    drag_offset: f32,
}

impl Carousel {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.cur_idx)
    }

    pub fn index(&self) -> usize {
        self.cur_idx
    }

    pub fn total(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    fn last_index(&self) -> usize {
        self.images.len().saturating_sub(1)
    }

    /// Replace the image list, keeping the index in range. An empty list
    /// closes the viewer.
    pub fn set_images(&mut self, images: Vec<GalleryImage>) {
        self.images = images;
        self.cur_idx = self.cur_idx.min(self.last_index());
        self.drag_offset = 0.0;
        if self.images.is_empty() {
            self.is_open = false;
        }
    }

    /// Open the viewer on the image at `idx` (grid preview click).
    pub fn open_at(&mut self, idx: usize) -> bool {
        if idx >= self.images.len() {
            tracing::warn!(
                "ignoring request to open image {idx} of {}",
                self.images.len()
            );
            return false;
        }

        self.cur_idx = idx;
        self.is_open = true;
        true
    }

    /// Open the viewer on the last selected image (the "more" affordance).
    pub fn open(&mut self) -> bool {
        if self.images.is_empty() {
            tracing::warn!("ignoring request to open an empty gallery");
            return false;
        }

        self.is_open = true;
        true
    }

    /// Close the viewer. The index is kept for the next `open`.
    pub fn close(&mut self) {
        self.is_open = false;
        self.drag_offset = 0.0;
    }

    pub fn go_next(&mut self) -> bool {
        self.drag_offset = 0.0;
        if self.images.is_empty() || self.cur_idx == self.last_index() {
            return false;
        }

        self.cur_idx += 1;
        true
    }

    pub fn go_prev(&mut self) -> bool {
        self.drag_offset = 0.0;
        if self.cur_idx == 0 {
            return false;
        }

        self.cur_idx -= 1;
        true
    }

    /// Jump to `idx` (navigation affordance). The drag offset is reset
    /// whether or not the index is valid.
    pub fn go_to(&mut self, idx: usize) -> bool {
        self.drag_offset = 0.0;
        if idx >= self.images.len() {
            tracing::warn!("ignoring jump to slide {idx} of {}", self.images.len());
            return false;
        }

        self.cur_idx = idx;
        true
    }

    pub fn set_drag_offset(&mut self, px: f32) {
        self.drag_offset = px;
    }

    pub fn reset_drag(&mut self) {
        self.drag_offset = 0.0;
    }

    /// Commit the result of a finished swipe.
    pub fn apply_swipe(&mut self, outcome: SwipeOutcome) {
        match outcome {
            SwipeOutcome::Previous => {
                self.go_prev();
            }
            SwipeOutcome::Next => {
                self.go_next();
            }
            SwipeOutcome::Cancel => self.reset_drag(),
        }
    }

    pub fn shows_prev(&self) -> bool {
        !self.images.is_empty() && self.cur_idx != 0
    }

    pub fn shows_next(&self) -> bool {
        !self.images.is_empty() && self.cur_idx != self.last_index()
    }

    /// Number of images drawn in the grid preview.
    pub fn shown_count(&self, number_shown: usize) -> usize {
        self.images.len().min(number_shown)
    }

    /// Images hidden behind the "more" affordance, zero when it is not shown.
    pub fn more_count(&self, number_shown: usize) -> usize {
        self.images.len().saturating_sub(number_shown)
    }
}
