//! SlideStrip - the horizontal row of full-width slides in the fullscreen viewer
//!
//! Every slide is one viewport wide; the strip is drawn shifted by the
//! current [`SlideOffset`] and clipped to the widget bounds. Images are
//! fitted inside their slide once their pixel size is known.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Rectangle, Size,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            image::Renderer as ImageRenderer,
            layout::{Limits, Node},
            overlay,
            renderer::{self as iced_renderer, Quad, Renderer as QuadRenderer},
            widget::{Operation, Tree},
        },
        event::{Event, Status},
        mouse::{self, Cursor},
    },
    widget::image::Handle,
};
use swiper_nav::SlideOffset;

use crate::layout_core as core;

/// One slide of the strip.
#[derive(Debug, Clone)]
pub struct Slide {
    pub handle: Handle,
    /// Pixel size of the image, `None` until read.
    pub size: Option<(u32, u32)>,
}

impl Slide {
    pub fn new(handle: Handle, size: Option<(u32, u32)>) -> Self {
        Self { handle, size }
    }
}

pub struct SlideStrip {
    slides: Vec<Slide>,
    offset: SlideOffset,
    dragging: bool,
    background: Color,
    width: Length,
    height: Length,
}

impl SlideStrip {
    pub fn new(slides: Vec<Slide>, offset: SlideOffset) -> Self {
        Self {
            slides,
            offset,
            dragging: false,
            background: Color::TRANSPARENT,
            width: Length::Fill,
            height: Length::Fill,
        }
    }

    /// Whether a drag is in progress, used for the cursor shape.
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn background(mut self, color: impl Into<Color>) -> Self {
        self.background = color.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

pub fn slide_strip(slides: Vec<Slide>, offset: SlideOffset) -> SlideStrip {
    SlideStrip::new(slides, offset)
}

impl<M> Widget<M, cosmic::Theme, Renderer> for SlideStrip {
    fn children(&self) -> Vec<Tree> {
        Vec::new()
    }

    fn diff(&mut self, _tree: &mut Tree) {}

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        let limits = limits.width(self.width).height(self.height);
        Node::new(limits.resolve(self.width, self.height, limits.max()))
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &iced_renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let offset_px = self.offset.to_pixels(bounds.width);

        renderer.with_layer(bounds, |renderer| {
            if self.background.a > 0.0 {
                renderer.fill_quad(
                    Quad {
                        bounds,
                        border: cosmic::iced::Border::default(),
                        shadow: Default::default(),
                    },
                    self.background,
                );
            }

            for index in core::visible_slides(self.slides.len(), offset_px, bounds.width) {
                let slide = &self.slides[index];
                let cell = core::slide_bounds(bounds, index, offset_px);
                let target = match slide.size {
                    Some((w, h)) => core::fit_centered(cell, w as f32, h as f32),
                    None => cell,
                };

                renderer.draw_image(
                    slide.handle.clone().into(),
                    cosmic::iced::widget::image::FilterMethod::Linear,
                    target,
                    cosmic::iced::Radians(0.0),
                    1.0,
                    [0.0; 4],
                );
            }
        });
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        _event: Event,
        _layout: Layout<'_>,
        _cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        _shell: &mut Shell<'_, M>,
        _viewport: &Rectangle,
    ) -> Status {
        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn operate(
        &self,
        _tree: &mut Tree,
        _layout: Layout<'_>,
        _renderer: &Renderer,
        _operation: &mut dyn Operation,
    ) {
    }

    fn overlay<'b>(
        &'b mut self,
        _tree: &'b mut Tree,
        _layout: Layout<'_>,
        _renderer: &Renderer,
        _translation: cosmic::iced::Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        None
    }
}

impl<'a, M: 'a> From<SlideStrip> for Element<'a, M> {
    fn from(strip: SlideStrip) -> Self {
        Element::new(strip)
    }
}
